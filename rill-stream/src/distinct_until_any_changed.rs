// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use parking_lot::Mutex;
use rill_core::StreamItem;
use std::sync::Arc;

/// Extension trait providing the `distinct_until_any_changed` operator.
pub trait DistinctUntilAnyChangedExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits an element when at least one position of its derived key
    /// sequence differs from the previously emitted element's sequence.
    ///
    /// # Behavior
    ///
    /// - The first element is always emitted
    /// - Positions are compared pairwise with `PartialEq`
    /// - The transform must produce the same number of keys for every
    ///   element; a changed arity is treated as a change and logged, never
    ///   silently truncated
    /// - Errors are always propagated immediately
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use rill_stream::DistinctUntilAnyChangedExt;
    /// use rill_test_utils::test_channel;
    ///
    /// # async fn example() {
    /// let (tx, stream) = test_channel();
    /// // Compare by the first two characters
    /// let mut distinct = stream.distinct_until_any_changed(|s: &String| {
    ///     s.chars().take(2).collect::<Vec<_>>()
    /// });
    ///
    /// tx.send("banana".to_string()).unwrap();
    /// tx.send("bandanna".to_string()).unwrap(); // [b, a] unchanged, filtered
    /// tx.send("bus".to_string()).unwrap(); // [b, u] differs, emitted
    ///
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), "banana");
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), "bus");
    /// # }
    /// ```
    fn distinct_until_any_changed<K, F>(
        self,
        transform: F,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        K: PartialEq + Send + 'static,
        F: Fn(&T) -> Vec<K> + Send + Sync + 'static;
}

impl<S, T> DistinctUntilAnyChangedExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn distinct_until_any_changed<K, F>(
        self,
        transform: F,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        K: PartialEq + Send + 'static,
        F: Fn(&T) -> Vec<K> + Send + Sync + 'static,
    {
        let last_keys: Arc<Mutex<Option<Vec<K>>>> = Arc::new(Mutex::new(None));
        let transform = Arc::new(transform);

        let stream = self.filter_map(move |item| {
            let last_keys = Arc::clone(&last_keys);
            let transform = Arc::clone(&transform);

            async move {
                match item {
                    StreamItem::Value(value) => {
                        let keys = transform(&value);

                        let mut last = last_keys.lock();
                        let changed = match last.as_ref() {
                            None => true,
                            Some(previous) => {
                                if previous.len() != keys.len() {
                                    // Caller contract: fixed arity per transform
                                    warn!(
                                        "distinct_until_any_changed: key arity changed from {} to {}",
                                        previous.len(),
                                        keys.len()
                                    );
                                    true
                                } else {
                                    previous.iter().zip(keys.iter()).any(|(a, b)| a != b)
                                }
                            }
                        };

                        if changed {
                            *last = Some(keys);
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
