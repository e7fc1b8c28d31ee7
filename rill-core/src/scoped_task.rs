// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task handle with cooperative cancellation.

use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A spawned background task that is cancelled when the handle is dropped.
///
/// The spawned closure receives a [`CancellationToken`] it should monitor to
/// enable graceful shutdown. Dropping the handle signals cancellation without
/// waiting; [`shutdown`](ScopedTask::shutdown) signals and then awaits the
/// task's completion.
///
/// # Example
///
/// ```
/// use rill_core::ScopedTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = ScopedTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
///     // clean up and exit
/// });
///
/// task.shutdown().await;
/// # }
/// ```
#[derive(Debug)]
pub struct ScopedTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScopedTask {
    /// Spawns a background task with cancellation support.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(f(cancel.clone()));
        Self { cancel, handle }
    }

    /// Signals the task to stop without waiting for it to complete.
    ///
    /// The task stops at its next cancellation checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Signals cancellation and waits for the task to finish cleaning up.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        let _ = (&mut self.handle).await;
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
