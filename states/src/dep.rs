use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::State;

/// Read-only view over the registered states, handed to [`Compute::compute`](crate::Compute::compute).
pub struct Dep<'a> {
    values: &'a BTreeMap<TypeId, Box<dyn State>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(values: &'a BTreeMap<TypeId, Box<dyn State>>) -> Self {
        Self { values }
    }

    pub fn try_get_state_ref<T: State>(&self) -> Option<&'a T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never registered; computes must only read their declared deps.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.try_get_state_ref::<T>()
            .unwrap_or_else(|| panic!("{} is not registered in StateCtx", type_name::<T>()))
    }
}
