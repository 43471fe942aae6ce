//! Action dispatcher: binds a row key to a gateway call and drives the
//! lifecycle around it.
//!
//! Failures never escape: they become lifecycle state plus an `error!` line.

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use dining_states::{Command, CommandFuture, CommandSnapshot, State, Updater};
use log::{error, info, warn};

use crate::BusinessConfig;
use crate::gateway::{ActionKind, HttpMutationGateway, MutationGateway, MutationRequest};
use crate::lifecycle::{ActionLifecycles, RequestLifecycle};
use crate::rows::RowKey;

/// Refresh callback run once per successful invocation.
pub type OnSuccess = Arc<dyn Fn() + Send + Sync>;
/// Called with the failure message.
pub type OnFailure = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed(String),
}

#[derive(Clone)]
pub struct ActionDispatcher {
    gateway: Arc<dyn MutationGateway>,
    updater: Updater,
    on_success: Option<OnSuccess>,
    on_failure: Option<OnFailure>,
}

impl Debug for ActionDispatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionDispatcher")
            .field("on_success", &self.on_success.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .finish_non_exhaustive()
    }
}

impl ActionDispatcher {
    pub fn new(gateway: Arc<dyn MutationGateway>, updater: Updater) -> Self {
        Self {
            gateway,
            updater,
            on_success: None,
            on_failure: None,
        }
    }

    pub fn on_success(mut self, callback: OnSuccess) -> Self {
        self.on_success = Some(callback);
        self
    }

    pub fn on_failure(mut self, callback: OnFailure) -> Self {
        self.on_failure = Some(callback);
        self
    }

    pub fn bind(&self, kind: ActionKind, key: RowKey) -> BoundAction {
        self.bind_request(MutationRequest::new(kind, key))
    }

    pub fn bind_request(&self, request: MutationRequest) -> BoundAction {
        BoundAction {
            request,
            dispatcher: self.clone(),
        }
    }
}

/// One row's action, ready to run.
#[derive(Debug, Clone)]
pub struct BoundAction {
    request: MutationRequest,
    dispatcher: ActionDispatcher,
}

impl BoundAction {
    pub fn request(&self) -> &MutationRequest {
        &self.request
    }

    /// Runs the action to completion.
    ///
    /// Pending is queued before the gateway call; the terminal state and the
    /// callbacks follow once the response is processed, then the record settles.
    pub async fn invoke(self) -> ActionOutcome {
        let Self {
            request,
            dispatcher,
        } = self;
        let kind = request.kind;
        let key = request.key;
        let updater = &dispatcher.updater;

        updater.update::<ActionLifecycles>(move |l| l.start(kind, key));

        let outcome = match dispatcher.gateway.execute(&request).await {
            Ok(()) => {
                info!("{} (id {})", kind.success_message(), request.key);
                updater.update::<ActionLifecycles>(move |l| {
                    l.transition(kind, RequestLifecycle::succeed);
                });
                if let Some(callback) = &dispatcher.on_success {
                    callback();
                }
                ActionOutcome::Succeeded
            }
            Err(err) => {
                let message = err.message();
                error!("Error {}: {message}", kind.describe());
                let recorded = message.clone();
                updater.update::<ActionLifecycles>(move |l| {
                    l.transition(kind, |record| record.fail(recorded));
                });
                if let Some(callback) = &dispatcher.on_failure {
                    callback(&message);
                }
                ActionOutcome::Failed(message)
            }
        };

        updater.update::<ActionLifecycles>(move |l| l.finish(kind, key));
        outcome
    }
}

/// Input for [`RunActionCommand`].
///
/// The UI fills this right before dispatching; the command reads its snapshot,
/// so later clicks do not affect a dispatch already in flight.
#[derive(Clone, Default)]
pub struct ActionInput {
    pub request: Option<MutationRequest>,
    pub on_success: Option<OnSuccess>,
    pub on_failure: Option<OnFailure>,
}

impl ActionInput {
    pub fn new(kind: ActionKind, key: RowKey) -> Self {
        Self {
            request: Some(MutationRequest::new(kind, key)),
            ..Self::default()
        }
    }

    pub fn on_success(mut self, callback: OnSuccess) -> Self {
        self.on_success = Some(callback);
        self
    }
}

impl Debug for ActionInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionInput")
            .field("request", &self.request)
            .field("on_success", &self.on_success.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .finish()
    }
}

impl State for ActionInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Runs the action described by [`ActionInput`] through the HTTP gateway.
#[derive(Default, Debug)]
pub struct RunActionCommand;

impl Command for RunActionCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let input = snap.state::<ActionInput>().clone();
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            let Some(request) = input.request else {
                warn!("RunActionCommand dispatched without a request");
                return;
            };

            let mut dispatcher =
                ActionDispatcher::new(Arc::new(HttpMutationGateway::new(config)), updater);
            if let Some(callback) = input.on_success {
                dispatcher = dispatcher.on_success(callback);
            }
            if let Some(callback) = input.on_failure {
                dispatcher = dispatcher.on_failure(callback);
            }

            dispatcher.bind_request(request).invoke().await;
        })
    }
}
