//! Per-action-kind request lifecycle.
//!
//! ```text
//! Idle --begin--> Pending --succeed--> Success --settle--> Idle
//!                         --fail-----> Error   --settle--> Idle
//! ```
//!
//! One record per [`ActionKind`], not per row. Concurrent invocations of the same
//! kind share it and the last write wins; it is never used for mutual exclusion.
//! Which rows have a request outstanding is tracked separately, per
//! `(kind, key)` pair.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};

use dining_states::State;
use log::debug;

use crate::gateway::ActionKind;
use crate::rows::RowKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLifecycle {
    status: RequestStatus,
    error: Option<String>,
}

impl RequestLifecycle {
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Message of the most recent failure. Kept after settling, cleared by the
    /// next [`RequestLifecycle::begin`].
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn begin(&mut self) {
        self.status = RequestStatus::Pending;
        self.error = None;
    }

    pub fn succeed(&mut self) {
        self.status = RequestStatus::Success;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = RequestStatus::Error;
        self.error = Some(message.into());
    }

    /// Terminal states are transient; settle back to idle.
    pub fn settle(&mut self) {
        if matches!(self.status, RequestStatus::Success | RequestStatus::Error) {
            self.status = RequestStatus::Idle;
        }
    }
}

/// All lifecycle records, keyed by action kind, plus the rows with a request in flight.
#[derive(Debug, Clone, Default)]
pub struct ActionLifecycles {
    records: BTreeMap<ActionKind, RequestLifecycle>,
    in_flight: BTreeSet<(ActionKind, RowKey)>,
}

impl ActionLifecycles {
    pub fn status(&self, kind: ActionKind) -> RequestStatus {
        self.records
            .get(&kind)
            .map(RequestLifecycle::status)
            .unwrap_or_default()
    }

    pub fn is_pending(&self, kind: ActionKind) -> bool {
        self.status(kind) == RequestStatus::Pending
    }

    /// Whether `key` has a `kind` request outstanding. Other rows are unaffected.
    pub fn is_in_flight(&self, kind: ActionKind, key: RowKey) -> bool {
        self.in_flight.contains(&(kind, key))
    }

    pub fn last_error(&self, kind: ActionKind) -> Option<&str> {
        self.records.get(&kind).and_then(RequestLifecycle::error)
    }

    fn record_mut(&mut self, kind: ActionKind) -> &mut RequestLifecycle {
        self.records.entry(kind).or_default()
    }

    pub(crate) fn start(&mut self, kind: ActionKind, key: RowKey) {
        self.in_flight.insert((kind, key));
        self.transition(kind, RequestLifecycle::begin);
    }

    pub(crate) fn finish(&mut self, kind: ActionKind, key: RowKey) {
        self.in_flight.remove(&(kind, key));
        self.transition(kind, RequestLifecycle::settle);
    }

    pub(crate) fn transition(&mut self, kind: ActionKind, f: impl FnOnce(&mut RequestLifecycle)) {
        let record = self.record_mut(kind);
        let before = record.status;
        f(record);
        debug!("{kind:?} lifecycle {before:?} -> {:?}", record.status);
    }
}

impl State for ActionLifecycles {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
