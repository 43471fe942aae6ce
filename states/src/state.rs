use std::any::Any;

/// A value owned by [`StateCtx`](crate::StateCtx).
///
/// Only one value per type is stored, so the type itself is the key.
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone handed to commands when they are dispatched.
    ///
    /// States returning `None` are invisible to commands.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}
