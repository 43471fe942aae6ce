//! Row data sources owned by pages.
//!
//! Each entity kind has a compute-shaped cache, [`RowsCompute`], filled by the
//! manual [`RefreshRowsCommand`]. A successful mutation's refresh callback
//! enqueues the command, which replaces the collection wholesale.

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use dining_states::{
    Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, State, StateCtx, Updater,
};
use log::{error, info};

use crate::BusinessConfig;
use crate::dispatch::OnSuccess;
use crate::grid::GridEntity;
use crate::http::{Client, HttpError};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("malformed collection: {0}")]
    Decode(#[from] serde_json::Error),
}

/// `GET` the collection of `R`. An empty or `null` body is an empty list.
pub async fn fetch_rows<R: GridEntity>(config: &BusinessConfig) -> Result<Vec<R>, FetchError> {
    let response = Client::get(config.endpoint(R::COLLECTION_PATH)).send().await?;

    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    Ok(response.json::<Option<Vec<R>>>()?.unwrap_or_default())
}

#[derive(Debug, Clone, Default)]
pub enum RowsResult<R> {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<R>),
    Error(String),
}

/// Latest collection of `R`.
pub struct RowsCompute<R> {
    pub result: RowsResult<R>,
}

impl<R> Default for RowsCompute<R> {
    fn default() -> Self {
        Self {
            result: RowsResult::Idle,
        }
    }
}

impl<R: GridEntity> Debug for RowsCompute<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let result = match &self.result {
            RowsResult::Idle => "idle".to_owned(),
            RowsResult::Loading => "loading".to_owned(),
            RowsResult::Loaded(rows) => format!("{} rows", rows.len()),
            RowsResult::Error(message) => format!("error: {message}"),
        };
        f.debug_struct("RowsCompute")
            .field("table", &R::TABLE_ID)
            .field("result", &result)
            .finish()
    }
}

impl<R> RowsCompute<R> {
    /// Rows when loaded; empty otherwise.
    pub fn rows(&self) -> &[R] {
        match &self.result {
            RowsResult::Loaded(rows) => rows,
            _ => &[],
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.result, RowsResult::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.result, RowsResult::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            RowsResult::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<R: GridEntity> State for RowsCompute<R> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<R: GridEntity> Compute for RowsCompute<R> {
    fn deps(&self) -> ComputeDeps {
        // Filled by `RefreshRowsCommand`; nothing to derive from.
        Vec::new()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}
}

/// Fetches the collection of `R` and replaces [`RowsCompute<R>`].
pub struct RefreshRowsCommand<R>(PhantomData<fn() -> R>);

impl<R> Default for RefreshRowsCommand<R> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<R: GridEntity> RefreshRowsCommand<R> {
    /// Callback for mutations: refresh this source on the next frame.
    pub fn callback(updater: &Updater) -> OnSuccess {
        let updater = updater.clone();
        std::sync::Arc::new(move || updater.enqueue::<Self>())
    }
}

impl<R: GridEntity> Command for RefreshRowsCommand<R> {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            // Keep showing the previous rows while a refetch is in flight.
            updater.update::<RowsCompute<R>>(|source| {
                if !matches!(source.result, RowsResult::Loaded(_)) {
                    source.result = RowsResult::Loading;
                }
            });

            let result = match fetch_rows::<R>(&config).await {
                Ok(rows) => {
                    info!("Loaded {} {} rows", rows.len(), R::TABLE_ID);
                    RowsResult::Loaded(rows)
                }
                Err(err) => {
                    error!("Error loading {}: {err}", R::COLLECTION_PATH);
                    RowsResult::Error(err.to_string())
                }
            };

            updater.set(RowsCompute::<R> { result });
        })
    }
}

/// Starts the first fetch of `R` when nothing has been requested yet.
///
/// The source is marked loading before dispatching so the next frame does not
/// fetch again.
pub fn load_if_idle<R: GridEntity>(ctx: &mut StateCtx) -> bool {
    let idle = ctx
        .try_state::<RowsCompute<R>>()
        .is_some_and(RowsCompute::is_idle);

    if idle {
        ctx.update::<RowsCompute<R>>(|source| source.result = RowsResult::Loading);
        ctx.dispatch::<RefreshRowsCommand<R>>();
    }
    idle
}
