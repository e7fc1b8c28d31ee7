// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use rill_core::{Lifecycle, ScopedTask, StreamItem};
use std::future::Future;
use std::pin::pin;
use std::sync::Arc;

/// What ended one subscription attempt.
pub(crate) enum Outcome {
    /// The stream completed (or an error was intercepted)
    Completed,
    /// The window deactivated while the stream was still live
    Deactivated,
    /// The lifecycle was dropped or the supervisor cancelled
    Closed,
}

/// Extension trait attaching stream consumers to a [`Lifecycle`] window.
pub trait CollectScopedExt {
    /// Collects a stream while the lifecycle window is active.
    ///
    /// Each time the window becomes active, `make_stream` is invoked for a
    /// fresh subscription and `on_next` is applied to every element until
    /// the stream ends, an error is intercepted, or the window deactivates.
    /// Because the factory rebuilds the pipeline, combinator state never
    /// survives a restart. Elements are delivered sequentially: `on_next`
    /// runs to completion before the next element is taken.
    ///
    /// # Error policy
    ///
    /// In-band stream errors and consumer errors are logged and end the
    /// current subscription attempt; they never escape the supervisor.
    /// Collection resumes on the next activation.
    ///
    /// The returned [`ScopedTask`] owns the supervision loop: dropping it
    /// signals teardown, [`shutdown`](ScopedTask::shutdown) also awaits it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::stream;
    /// use rill_core::{Lifecycle, StreamItem};
    /// use rill_exec::CollectScopedExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let lifecycle = Lifecycle::new();
    ///
    /// let task = lifecycle.collect_scoped(
    ///     || stream::iter(vec![StreamItem::Value(1), StreamItem::Value(2)]),
    ///     |value| async move {
    ///         println!("got {value}");
    ///         Ok::<(), std::io::Error>(())
    ///     },
    /// );
    ///
    /// lifecycle.set_active(true);
    /// // ... later
    /// lifecycle.set_active(false);
    /// task.shutdown().await;
    /// # }
    /// ```
    fn collect_scoped<Mk, S, T, F, Fut, E>(&self, make_stream: Mk, on_next: F) -> ScopedTask
    where
        Mk: FnMut() -> S + Send + 'static,
        S: Stream<Item = StreamItem<T>> + Send + 'static,
        T: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: std::error::Error + Send + 'static;

    /// Collects several streams concurrently while the window is active.
    ///
    /// One independent consumption task is spawned per stream factory, all
    /// scoped to the same window. An intercepted error ends only the task
    /// it occurred in; sibling tasks keep running. Deactivation cancels
    /// every task and awaits their cleanup before the supervisor waits for
    /// the next activation.
    fn collect_all_scoped<Mk, S, T, F, Fut, E>(
        &self,
        make_streams: Vec<Mk>,
        on_next: F,
    ) -> ScopedTask
    where
        Mk: FnMut() -> S + Send + 'static,
        S: Stream<Item = StreamItem<T>> + Send + 'static,
        T: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: std::error::Error + Send + 'static;
}

impl CollectScopedExt for Lifecycle {
    fn collect_scoped<Mk, S, T, F, Fut, E>(&self, make_stream: Mk, on_next: F) -> ScopedTask
    where
        Mk: FnMut() -> S + Send + 'static,
        S: Stream<Item = StreamItem<T>> + Send + 'static,
        T: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: std::error::Error + Send + 'static,
    {
        let lifecycle = self.clone();

        ScopedTask::spawn(move |cancel| async move {
            let mut window = lifecycle.watcher();
            let mut make_stream = make_stream;

            loop {
                let open = tokio::select! {
                    open = window.active() => open,
                    () = cancel.cancelled() => false,
                };
                if !open {
                    break;
                }

                let stream = make_stream();
                let outcome = tokio::select! {
                    () = run_subscription(stream, &on_next) => Outcome::Completed,
                    open = window.inactive() => {
                        if open {
                            Outcome::Deactivated
                        } else {
                            Outcome::Closed
                        }
                    }
                    () = cancel.cancelled() => Outcome::Closed,
                };

                match outcome {
                    Outcome::Completed => {
                        // Resubscribe only after the window has cycled
                        let open = tokio::select! {
                            open = window.inactive() => open,
                            () = cancel.cancelled() => false,
                        };
                        if !open {
                            break;
                        }
                    }
                    Outcome::Deactivated => {}
                    Outcome::Closed => break,
                }
            }
        })
    }

    fn collect_all_scoped<Mk, S, T, F, Fut, E>(
        &self,
        make_streams: Vec<Mk>,
        on_next: F,
    ) -> ScopedTask
    where
        Mk: FnMut() -> S + Send + 'static,
        S: Stream<Item = StreamItem<T>> + Send + 'static,
        T: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: std::error::Error + Send + 'static,
    {
        let lifecycle = self.clone();

        ScopedTask::spawn(move |cancel| async move {
            let mut window = lifecycle.watcher();
            let mut make_streams = make_streams;
            let on_next = Arc::new(on_next);

            loop {
                let open = tokio::select! {
                    open = window.active() => open,
                    () = cancel.cancelled() => false,
                };
                if !open {
                    break;
                }

                // One task per stream; a failing sibling never cancels the others
                let mut tasks = Vec::with_capacity(make_streams.len());
                for make_stream in &mut make_streams {
                    let stream = make_stream();
                    let on_next = Arc::clone(&on_next);
                    tasks.push(tokio::spawn(async move {
                        run_subscription(stream, on_next.as_ref()).await;
                    }));
                }

                let open = tokio::select! {
                    open = window.inactive() => open,
                    () = cancel.cancelled() => false,
                };

                // Deactivation tears every task down and awaits cleanup
                for task in &tasks {
                    task.abort();
                }
                for task in tasks {
                    let _ = task.await;
                }

                if !open {
                    break;
                }
            }
        })
    }
}

/// Consumes one subscription until the stream ends or an error is
/// intercepted. Errors are logged and absorbed here; they never reach the
/// owning component.
pub(crate) async fn run_subscription<S, T, F, Fut, E>(stream: S, on_next: &F)
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
    E: std::error::Error + Send + 'static,
{
    let mut stream = pin!(stream);

    while let Some(item) = stream.next().await {
        match item {
            StreamItem::Value(value) => {
                if let Err(error) = on_next(value).await {
                    error!("scoped collection: consumer failed: {error}");
                    return;
                }
            }
            StreamItem::Error(error) => {
                error!("scoped collection: stream error: {error}");
                return;
            }
        }
    }
}
