//! The current viewer: identity and role set.
//!
//! Read-only to the grid. Refreshed by [`RefreshViewerCommand`]; an unauthenticated
//! or unreachable backend yields the anonymous viewer.

use std::any::Any;
use std::collections::BTreeSet;

use dining_states::{Command, CommandFuture, CommandSnapshot, State, Updater};
use log::{info, warn};
use serde::Deserialize;
use ustr::Ustr;

use crate::BusinessConfig;
use crate::http::Client;

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_MODERATOR: &str = "ROLE_MODERATOR";

pub const CURRENT_USER_PATH: &str = "/api/currentUser";

/// Set of capability tags. Checks are purely additive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<Ustr>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(&Ustr::from(role))
    }

    pub fn insert(&mut self, role: &str) {
        self.0.insert(Ustr::from(role));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|role| role.as_str())
    }
}

impl<'a> FromIterator<&'a str> for RoleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(Ustr::from).collect())
    }
}

/// Identity fields shown in the navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerIdentity {
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct RoleGrant {
    authority: String,
}

/// `GET /api/currentUser` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrentUserResponse {
    user: Option<ViewerIdentity>,
    roles: Vec<RoleGrant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    pub identity: Option<ViewerIdentity>,
    pub roles: RoleSet,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_roles<'a>(email: &str, roles: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            identity: Some(ViewerIdentity {
                email: Some(email.to_owned()),
                ..ViewerIdentity::default()
            }),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn current_roles(&self) -> &RoleSet {
        &self.roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().and_then(|id| id.email.as_deref())
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }
}

impl From<CurrentUserResponse> for Viewer {
    fn from(response: CurrentUserResponse) -> Self {
        Self {
            roles: response
                .roles
                .iter()
                .map(|grant| grant.authority.as_str())
                .filter(|authority| !authority.is_empty())
                .collect(),
            identity: response.user,
        }
    }
}

impl State for Viewer {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Fetches the current viewer and replaces [`Viewer`].
#[derive(Default, Debug)]
pub struct RefreshViewerCommand;

impl Command for RefreshViewerCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            let viewer = match Client::get(config.endpoint(CURRENT_USER_PATH)).send().await {
                Ok(response) if response.is_success() => {
                    match response.json::<CurrentUserResponse>() {
                        Ok(body) => Viewer::from(body),
                        Err(err) => {
                            warn!("Malformed current user response: {err}");
                            Viewer::anonymous()
                        }
                    }
                }
                Ok(response) => {
                    warn!(
                        "Current user unavailable (status {}), continuing anonymously",
                        response.status
                    );
                    Viewer::anonymous()
                }
                Err(err) => {
                    warn!("Fetching current user failed: {err}");
                    Viewer::anonymous()
                }
            };

            info!(
                "Viewer resolved: {} with {} role(s)",
                viewer.email().unwrap_or("anonymous"),
                viewer.roles.iter().count()
            );
            updater.set(viewer);
        })
    }
}
