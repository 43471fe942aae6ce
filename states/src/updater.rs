use std::any::{Any, TypeId, type_name};
use std::fmt::{Debug, Formatter};

use flume::Sender;
use log::warn;

use crate::{Command, State, StateCtx};

pub(crate) type Mutation = Box<dyn FnOnce(&mut dyn Any) + Send>;

pub(crate) enum Update {
    /// Replace the stored value.
    Set(TypeId, Box<dyn State>),
    /// Mutate the stored value in place.
    Mutate(TypeId, Mutation),
    /// Dispatch a command on the next sync.
    Dispatch(&'static str, fn(&mut StateCtx)),
}

/// Sending half of the state channel.
///
/// Cheap to clone and `Send`; async work keeps one and reports through it.
/// Updates are applied in send order by [`StateCtx::sync_computes`].
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Debug for Updater {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("queued", &self.send.len())
            .finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    /// Replaces the value of `T`.
    pub fn set<T: State>(&self, value: T) {
        self.push(type_name::<T>(), Update::Set(TypeId::of::<T>(), Box::new(value)));
    }

    /// Mutates the current value of `T` in place.
    ///
    /// Prefer this over [`Updater::set`] when several tasks touch the same state
    /// concurrently: each closure sees the latest value instead of a stale copy.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let mutation: Mutation = Box::new(move |value: &mut dyn Any| {
            if let Some(value) = value.downcast_mut::<T>() {
                f(value);
            }
        });
        self.push(type_name::<T>(), Update::Mutate(TypeId::of::<T>(), mutation));
    }

    /// Dispatches `C` during the next sync.
    pub fn enqueue<C: Command + Default>(&self) {
        fn dispatch<C: Command + Default>(ctx: &mut StateCtx) {
            drop(ctx.dispatch::<C>());
        }

        self.push(
            type_name::<C>(),
            Update::Dispatch(type_name::<C>(), dispatch::<C>),
        );
    }

    fn push(&self, name: &'static str, update: Update) {
        if self.send.send(update).is_err() {
            warn!("StateCtx is gone, dropping update for {name}");
        }
    }
}
