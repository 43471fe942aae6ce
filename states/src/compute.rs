use std::any::TypeId;

use crate::{Dep, State, Updater};

/// Types a compute reads. A change to any of them marks the compute stale.
pub type ComputeDeps = Vec<TypeId>;

/// Derived state.
///
/// `compute` must stay free of side effects: it runs implicitly whenever a
/// dependency changes. The new value is published with [`Updater::set`] and
/// becomes visible after the next [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
pub trait Compute: State {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);
}
