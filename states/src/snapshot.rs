use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::StateError;

/// Cloned states captured when a command is dispatched.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    /// Builder-style insert, mostly for tests that run a command by hand.
    pub fn with<T: Any + Send>(mut self, value: T) -> Self {
        self.inner.insert(TypeId::of::<T>(), Box::new(value));
        self
    }

    pub fn try_state<T: Any>(&self) -> Result<&T, StateError> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or(StateError::MissingSnapshot {
                type_name: type_name::<T>(),
            })
    }

    /// # Panics
    /// Panics if `T` does not provide a snapshot.
    pub fn state<T: Any>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }
}
