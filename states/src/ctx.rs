use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Debug, Formatter};

use flume::Receiver;
use log::{debug, warn};

use crate::task::{self, TaskHandle, TaskId};
use crate::updater::Update;
use crate::{Command, CommandSnapshot, Compute, ComputeDeps, Dep, State, Updater};

type ComputeRunner = fn(&dyn State, Dep<'_>, Updater);

struct ComputeSlot {
    deps: ComputeDeps,
    run: ComputeRunner,
}

fn run_compute<T: Compute>(value: &dyn State, deps: Dep<'_>, updater: Updater) {
    if let Some(compute) = value.as_any().downcast_ref::<T>() {
        compute.compute(deps, updater);
    }
}

/// Owner of every state and compute in the application.
///
/// Frame loop:
/// 1. [`StateCtx::sync_computes`] applies everything async work queued.
/// 2. The UI reads states and dispatches commands.
/// 3. [`StateCtx::run_computed`] re-runs computes whose dependencies changed.
pub struct StateCtx {
    values: BTreeMap<TypeId, Box<dyn State>>,
    names: BTreeMap<TypeId, &'static str>,
    computes: BTreeMap<TypeId, ComputeSlot>,
    stale: BTreeSet<TypeId>,

    updater: Updater,
    recv: Receiver<Update>,

    generation: u64,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.names.values().collect::<Vec<_>>())
            .field("stale", &self.stale.len())
            .field("generation", &self.generation)
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            values: BTreeMap::new(),
            names: BTreeMap::new(),
            computes: BTreeMap::new(),
            stale: BTreeSet::new(),
            updater: Updater::new(send),
            recv,
            generation: 0,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.names.insert(id, type_name::<T>());
        self.values.insert(id, Box::new(state));
        self.mark_dependents(id);
    }

    /// Registers a compute. It runs on the next [`StateCtx::run_computed`].
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let deps = compute.deps();

        self.names.insert(id, type_name::<T>());
        self.values.insert(id, Box::new(compute));
        self.computes.insert(
            id,
            ComputeSlot {
                deps,
                run: run_compute::<T>,
            },
        );
        self.stale.insert(id);
    }

    pub fn try_state<T: State>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("{} is not registered in StateCtx", type_name::<T>()))
    }

    /// Mutable access. Computes depending on `T` are marked stale.
    ///
    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.mark_dependents(id);
        self.values
            .get_mut(&id)
            .and_then(|value| value.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{} is not registered in StateCtx", type_name::<T>()))
    }

    /// Mutates `T` in place. Unregistered types are ignored with a warning.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        let id = TypeId::of::<T>();
        match self
            .values
            .get_mut(&id)
            .and_then(|value| value.as_any_mut().downcast_mut::<T>())
        {
            Some(value) => {
                f(value);
                self.mark_dependents(id);
            }
            None => warn!("update on unregistered state {}", type_name::<T>()),
        }
    }

    /// Latest value of a compute, if registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.try_state::<T>()
    }

    pub fn updater(&self) -> Updater {
        self.updater.clone()
    }

    /// Applies every queued update in send order, then runs queued dispatches.
    pub fn sync_computes(&mut self) {
        let mut dispatches = Vec::new();

        while let Ok(update) = self.recv.try_recv() {
            match update {
                Update::Set(id, value) => {
                    if self.values.contains_key(&id) {
                        self.values.insert(id, value);
                        self.mark_dependents(id);
                    } else {
                        warn!("dropping value for unregistered state {id:?}");
                    }
                }
                Update::Mutate(id, mutation) => match self.values.get_mut(&id) {
                    Some(value) => {
                        mutation(value.as_any_mut());
                        self.mark_dependents(id);
                    }
                    None => warn!("dropping mutation for unregistered state {id:?}"),
                },
                Update::Dispatch(name, dispatch) => dispatches.push((name, dispatch)),
            }
        }

        for (name, dispatch) in dispatches {
            debug!("running queued dispatch of {name}");
            dispatch(self);
        }
    }

    /// Runs every stale compute once.
    pub fn run_computed(&mut self) {
        let stale = std::mem::take(&mut self.stale);

        for id in stale {
            let (Some(slot), Some(value)) = (self.computes.get(&id), self.values.get(&id)) else {
                continue;
            };
            (slot.run)(value.as_ref(), Dep::new(&self.values), self.updater.clone());
        }
    }

    /// Snapshots the current states and spawns `C`.
    ///
    /// On native targets this must be called inside a tokio runtime.
    pub fn dispatch<C: Command + Default>(&mut self) -> TaskHandle {
        self.generation += 1;
        let id = TaskId::new(TypeId::of::<C>(), self.generation);

        debug!("dispatching {} (generation {})", type_name::<C>(), id.generation());

        let future = C::default().run(self.snapshot(), self.updater.clone());
        task::spawn(id, future)
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, value) in &self.values {
            if let Some(cloned) = value.snapshot() {
                snap.insert_cloned(*id, cloned);
            }
        }
        snap
    }

    fn mark_dependents(&mut self, id: TypeId) {
        for (compute_id, slot) in &self.computes {
            if slot.deps.contains(&id) {
                self.stale.insert(*compute_id);
            }
        }
    }
}
