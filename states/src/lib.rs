//! State runtime shared by the business layer and the UI.
//!
//! - [`State`]: plain data stored in [`StateCtx`], keyed by type.
//! - [`Compute`]: derived state, re-run when one of its dependencies changes.
//! - [`Command`]: manual-only side effects (network IO), dispatched explicitly.
//!
//! Async work never touches `StateCtx` directly. It reports back through an
//! [`Updater`], and the owner applies the queued updates with
//! [`StateCtx::sync_computes`] once per frame.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod snapshot;
mod state;
mod task;
mod time;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::StateError;
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use task::{TaskHandle, TaskId};
pub use time::Time;
pub use updater::Updater;
