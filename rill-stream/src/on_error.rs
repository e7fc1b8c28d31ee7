// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::ready;
use futures::stream::StreamExt;
use futures::Stream;
use rill_core::{RillError, StreamItem};

/// Extension trait providing the `on_error` operator.
pub trait OnErrorExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Handles in-band errors with a handler function.
    ///
    /// The handler receives a reference to each error and returns `true` to
    /// consume it (remove it from the stream) or `false` to propagate it
    /// downstream. Multiple `on_error` operators can be chained to build a
    /// chain of responsibility.
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use rill_core::{RillError, StreamItem};
    /// use rill_stream::OnErrorExt;
    /// use rill_test_utils::test_channel_with_errors;
    ///
    /// # async fn example() {
    /// let (tx, stream) = test_channel_with_errors();
    /// let mut stream = stream.on_error(|_err| true); // swallow everything
    ///
    /// tx.send(StreamItem::Error(RillError::stream_error("dropped"))).unwrap();
    /// tx.send(StreamItem::Value(1)).unwrap();
    ///
    /// assert_eq!(stream.next().await.unwrap().unwrap(), 1);
    /// # }
    /// ```
    fn on_error<F>(self, handler: F) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        F: FnMut(&RillError) -> bool + Send + 'static;
}

impl<S, T> OnErrorExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn on_error<F>(self, mut handler: F) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        F: FnMut(&RillError) -> bool + Send + 'static,
    {
        let stream = self.filter_map(move |item| {
            ready(match item {
                StreamItem::Error(err) => {
                    if handler(&err) {
                        // Error handled, skip it
                        None
                    } else {
                        // Error not handled, propagate
                        Some(StreamItem::Error(err))
                    }
                }
                other => Some(other),
            })
        });

        Box::pin(stream)
    }
}
