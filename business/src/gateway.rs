//! Mutation gateway: performs one named backend write.
//!
//! The gateway owns no table state. It resolves each request exactly once to
//! success or a [`GatewayError`]; it never retries.

use async_trait::async_trait;
use log::debug;
use serde::Serialize;

use crate::BusinessConfig;
use crate::http::{Client, HttpError};
use crate::review::ReviewDraft;
use crate::rows::RowKey;

/// Named backend writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    ToggleAdmin,
    ToggleModerator,
    SubmitReview,
}

impl ActionKind {
    pub fn path(self) -> &'static str {
        match self {
            Self::ToggleAdmin => "/api/admin/users/toggleAdmin",
            Self::ToggleModerator => "/api/admin/users/toggleModerator",
            Self::SubmitReview => "/api/reviews/post",
        }
    }

    /// Gerund phrase used in log lines: `Error {describe}: {message}`.
    pub fn describe(self) -> &'static str {
        match self {
            Self::ToggleAdmin => "toggling admin status",
            Self::ToggleModerator => "toggling moderator status",
            Self::SubmitReview => "submitting review",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::ToggleAdmin => "Admin status toggled successfully",
            Self::ToggleModerator => "Moderator status toggled successfully",
            Self::SubmitReview => "Review submitted successfully",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionPayload {
    #[default]
    None,
    Review(ReviewDraft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRequest {
    pub kind: ActionKind,
    pub key: RowKey,
    pub payload: ActionPayload,
}

impl MutationRequest {
    pub fn new(kind: ActionKind, key: RowKey) -> Self {
        Self {
            kind,
            key,
            payload: ActionPayload::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("API returned status: {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("{0:?} requires a payload")]
    MissingPayload(ActionKind),
}

impl GatewayError {
    /// Human-readable message: the server's `message` when it sent one.
    pub fn message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[async_trait]
pub trait MutationGateway: Send + Sync {
    async fn execute(&self, request: &MutationRequest) -> Result<(), GatewayError>;
}

#[derive(Serialize)]
struct IdBody {
    id: RowKey,
}

/// Gateway backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpMutationGateway {
    config: BusinessConfig,
}

impl HttpMutationGateway {
    pub fn new(config: BusinessConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MutationGateway for HttpMutationGateway {
    async fn execute(&self, request: &MutationRequest) -> Result<(), GatewayError> {
        let url = self.config.endpoint(request.kind.path());

        let builder = match (request.kind, &request.payload) {
            (ActionKind::ToggleAdmin | ActionKind::ToggleModerator, _) => {
                Client::post(url).json(&IdBody { id: request.key })?
            }
            (ActionKind::SubmitReview, ActionPayload::Review(draft)) => {
                Client::post(url).query(draft.query_pairs(request.key))
            }
            (ActionKind::SubmitReview, ActionPayload::None) => {
                return Err(GatewayError::MissingPayload(request.kind));
            }
        };

        debug!("POST {} for {:?} {}", builder.url(), request.kind, request.key);
        let response = builder.send().await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Status {
                status: response.status,
                message: response.error_message(),
            })
        }
    }
}
