// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use parking_lot::Mutex;
use rill_core::StreamItem;
use std::sync::Arc;

/// Extension trait providing the `distinct_until_changed_by_key` operator.
///
/// The operator derives a comparison key from each element and suppresses
/// elements whose key equals the key of the previously emitted element.
pub trait DistinctUntilChangedByKeyExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits an element only when its derived key differs from the key of
    /// the immediately preceding emitted element.
    ///
    /// # Behavior
    ///
    /// - The first element is always emitted (no previous key to compare)
    /// - Keys are compared by value equality (`PartialEq` on `K`)
    /// - The stored key is updated only when an element is emitted
    /// - Errors are always propagated immediately
    ///
    /// The comparison state is created by this call and owned by the
    /// returned stream, so every subscription starts with no observed key.
    ///
    /// # Arguments
    ///
    /// * `transform` - Pure function deriving the comparison key from an
    ///   element.
    ///
    /// # Examples
    ///
    /// ## Deduplicate by a derived field
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use rill_stream::DistinctUntilChangedByKeyExt;
    /// use rill_test_utils::test_channel;
    ///
    /// # async fn example() {
    /// let (tx, stream) = test_channel();
    /// let mut distinct = stream.distinct_until_changed_by_key(|s: &String| s.len());
    ///
    /// tx.send("cat".to_string()).unwrap();
    /// tx.send("dog".to_string()).unwrap(); // same length, filtered
    /// tx.send("horse".to_string()).unwrap(); // length changed, emitted
    ///
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), "cat");
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), "horse");
    /// # }
    /// ```
    ///
    /// ## Revisited keys are emitted again
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use rill_stream::DistinctUntilChangedByKeyExt;
    /// use rill_test_utils::test_channel;
    ///
    /// # async fn example() {
    /// let (tx, stream) = test_channel();
    /// let mut distinct = stream.distinct_until_changed_by_key(|n: &i32| n % 2);
    ///
    /// tx.send(1).unwrap(); // odd, emitted
    /// tx.send(3).unwrap(); // odd, filtered
    /// tx.send(2).unwrap(); // even, emitted
    /// tx.send(5).unwrap(); // odd again, emitted
    ///
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 1);
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 2);
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 5);
    /// # }
    /// ```
    ///
    /// # See Also
    ///
    /// - [`distinct_until_changed`](crate::DistinctUntilChangedExt::distinct_until_changed) -
    ///   compares whole elements via `PartialEq`
    /// - [`distinct_until_any_changed`](crate::DistinctUntilAnyChangedExt::distinct_until_any_changed) -
    ///   compares a sequence of derived keys
    fn distinct_until_changed_by_key<K, F>(
        self,
        transform: F,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        K: PartialEq + Send + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static;
}

impl<S, T> DistinctUntilChangedByKeyExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn distinct_until_changed_by_key<K, F>(
        self,
        transform: F,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        K: PartialEq + Send + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let last_key: Arc<Mutex<Option<K>>> = Arc::new(Mutex::new(None));
        let transform = Arc::new(transform);

        let stream = self.filter_map(move |item| {
            let last_key = Arc::clone(&last_key);
            let transform = Arc::clone(&transform);

            async move {
                match item {
                    StreamItem::Value(value) => {
                        let key = transform(&value);

                        let mut last = last_key.lock();
                        let changed = match last.as_ref() {
                            // First value, always emit
                            None => true,
                            Some(previous) => *previous != key,
                        };

                        if changed {
                            *last = Some(key);
                            Some(StreamItem::Value(value))
                        } else {
                            None
                        }
                    }
                    // Propagate errors
                    StreamItem::Error(e) => Some(StreamItem::Error(e)),
                }
            }
        });

        Box::pin(stream)
    }
}
