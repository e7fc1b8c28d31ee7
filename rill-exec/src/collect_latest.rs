// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::collect::Outcome;
use futures::stream::StreamExt;
use futures::Stream;
use rill_core::{Lifecycle, ScopedTask, StreamItem};
use std::future::Future;
use std::pin::pin;

/// Extension trait attaching a latest-wins stream consumer to a
/// [`Lifecycle`] window.
pub trait CollectLatestScopedExt {
    /// Collects a stream while the window is active, cancelling the
    /// in-flight consumer invocation when a newer element arrives.
    ///
    /// Like [`collect_scoped`], but while `on_next` is still running for an
    /// element and the stream yields another one, the running invocation is
    /// dropped at its next suspension point and `on_next` starts over with
    /// the newest element. When the stream completes, an in-flight
    /// invocation is allowed to finish.
    ///
    /// Subscription restarts and the error policy are identical to
    /// [`collect_scoped`]: fresh stream per activation, errors logged and
    /// absorbed at this boundary.
    ///
    /// [`collect_scoped`]: crate::CollectScopedExt::collect_scoped
    fn collect_latest_scoped<Mk, S, T, F, Fut, E>(&self, make_stream: Mk, on_next: F) -> ScopedTask
    where
        Mk: FnMut() -> S + Send + 'static,
        S: Stream<Item = StreamItem<T>> + Send + 'static,
        T: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: std::error::Error + Send + 'static;
}

impl CollectLatestScopedExt for Lifecycle {
    fn collect_latest_scoped<Mk, S, T, F, Fut, E>(&self, make_stream: Mk, on_next: F) -> ScopedTask
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
                    () = run_subscription_latest(stream, &on_next) => Outcome::Completed,
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
}

/// Latest-wins variant of the subscription loop: a newer element drops the
/// in-flight consumer invocation.
async fn run_subscription_latest<S, T, F, Fut, E>(stream: S, on_next: &F)
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
    E: std::error::Error + Send + 'static,
{
    let mut stream = pin!(stream.fuse());

    while let Some(item) = stream.next().await {
        let mut value = match item {
            StreamItem::Value(value) => value,
            StreamItem::Error(error) => {
                error!("scoped collection: stream error: {error}");
                return;
            }
        };

        'supersede: loop {
            let mut current = Box::pin(on_next(value));

            tokio::select! {
                result = &mut current => {
                    if let Err(error) = result {
                        error!("scoped collection: consumer failed: {error}");
                        return;
                    }
                    break 'supersede;
                }
                next = stream.next() => match next {
                    Some(StreamItem::Value(newer)) => {
                        // A newer element cancels the in-flight invocation
                        drop(current);
                        value = newer;
                    }
                    Some(StreamItem::Error(error)) => {
                        error!("scoped collection: stream error: {error}");
                        return;
                    }
                    None => {
                        // Stream ended; let the in-flight invocation finish
                        if let Err(error) = current.await {
                            error!("scoped collection: consumer failed: {error}");
                        }
                        return;
                    }
                },
            }
        }
    }
}
