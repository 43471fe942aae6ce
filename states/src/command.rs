use std::future::Future;
use std::pin::Pin;

use crate::{CommandSnapshot, Updater};

/// Future returned by [`Command::run`]. `Send` on every target so native
/// builds can hand it to the tokio runtime.
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only unit of work, typically network IO.
///
/// Commands never run implicitly. They read their inputs from the snapshot taken
/// at dispatch time and publish results through the updater.
pub trait Command: Send + Sync + 'static {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture;
}
