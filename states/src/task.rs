//! Spawned command tasks.
//!
//! Commands run to completion: there is no cancellation and no timeout. A
//! [`TaskHandle`] only tells the caller when the work has finished.

use std::any::TypeId;

use flume::Receiver;

use crate::CommandFuture;

/// Identifies one dispatch of a command type.
///
/// The generation increases with every dispatch made by the same `StateCtx`,
/// so two dispatches of the same command never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Completion handle for a dispatched command.
///
/// Dropping the handle does not affect the task.
#[derive(Debug)]
pub struct TaskHandle {
    id: TaskId,
    done: Receiver<()>,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Waits until the command future has completed.
    pub async fn finished(self) {
        // A disconnect also means the task is gone.
        self.done.recv_async().await.ok();
    }
}

/// Spawns the future on the platform executor.
///
/// Native builds require a running tokio runtime; wasm builds run on the JS
/// event loop.
pub(crate) fn spawn(id: TaskId, future: CommandFuture) -> TaskHandle {
    let (done_tx, done_rx) = flume::bounded::<()>(1);

    let task = async move {
        future.await;
        done_tx.send(()).ok();
    };

    #[cfg(not(target_arch = "wasm32"))]
    drop(tokio::spawn(task));

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(task);

    TaskHandle { id, done: done_rx }
}
