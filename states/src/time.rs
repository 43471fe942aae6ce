use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// The frame's notion of "now".
///
/// Reading time through state keeps date defaults deterministic in tests.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    now: DateTime<Utc>,
}

impl Default for Time {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}

impl Time {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.now
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}
