// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use parking_lot::Mutex;
use rill_core::StreamItem;
use std::sync::Arc;

/// Extension trait providing the `distinct_until_changed` operator.
pub trait DistinctUntilChangedExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone + PartialEq,
{
    /// Suppresses consecutive equal elements.
    ///
    /// The first element is always emitted; afterwards an element is emitted
    /// only when it differs from the previously emitted one. Equivalent to
    /// [`distinct_until_changed_by_key`] with the identity transform.
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use rill_stream::DistinctUntilChangedExt;
    /// use rill_test_utils::test_channel;
    ///
    /// # async fn example() {
    /// let (tx, stream) = test_channel();
    /// let mut distinct = stream.distinct_until_changed();
    ///
    /// for value in [1, 1, 2, 2, 2, 3] {
    ///     tx.send(value).unwrap();
    /// }
    ///
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 1);
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 2);
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 3);
    /// # }
    /// ```
    ///
    /// [`distinct_until_changed_by_key`]: crate::DistinctUntilChangedByKeyExt::distinct_until_changed_by_key
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>> + Send + Unpin;
}

impl<S, T> DistinctUntilChangedExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Clone + PartialEq + Send + 'static,
{
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>> + Send + Unpin {
        let last_value: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));

        let stream = self.filter_map(move |item| {
            let last_value = Arc::clone(&last_value);

            async move {
                match item {
                    StreamItem::Value(value) => {
                        let mut last = last_value.lock();
                        let changed = match last.as_ref() {
                            None => true,
                            Some(previous) => *previous != value,
                        };

                        if changed {
                            *last = Some(value.clone());
                            Some(StreamItem::Value(value))
                        } else {
                            None
                        }
                    }
                    StreamItem::Error(e) => Some(StreamItem::Error(e)),
                }
            }
        });

        Box::pin(stream)
    }
}
