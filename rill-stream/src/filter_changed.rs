// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, StreamExt};
use futures::Stream;
use rill_core::StreamItem;
use std::collections::HashMap;
use std::hash::Hash;

/// Extension trait providing the `filter_changed` operator for streams of
/// lists.
pub trait FilterChangedExt<T>: Stream<Item = StreamItem<Vec<T>>> + Sized
where
    T: Eq + Hash + Clone,
{
    /// Flattens a stream of lists into the elements that are new or changed
    /// relative to the previous list.
    ///
    /// For every incoming list, an element is emitted when it was absent
    /// from the previous list or present with a different derived value.
    /// The stored element-to-derived-value mapping is replaced wholesale
    /// with the current list's mapping on every incoming list, regardless
    /// of which elements were emitted. Emission order follows the order of
    /// elements within the incoming list.
    ///
    /// # Behavior
    ///
    /// - The first list emits all of its elements (no prior mapping)
    /// - Comparison is by element identity (`Eq + Hash`) plus derived value
    ///   (`PartialEq`)
    /// - An empty list emits nothing but still clears the stored mapping
    /// - Errors are re-emitted in-band at their position in the stream
    ///
    /// # Examples
    ///
    /// With the identity transform, elements are emitted the first time
    /// they appear in a list:
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use rill_stream::FilterChangedExt;
    /// use rill_test_utils::test_channel;
    ///
    /// # async fn example() {
    /// let (tx, stream) = test_channel();
    /// let mut changed = stream.filter_changed(|v: &i32| *v);
    ///
    /// tx.send(vec![0]).unwrap(); // emits 0
    /// tx.send(vec![0, 1]).unwrap(); // emits 1
    /// tx.send(vec![0, 1, 2, 3]).unwrap(); // emits 2, 3
    /// tx.send(vec![4]).unwrap(); // emits 4
    ///
    /// for expected in [0, 1, 2, 3, 4] {
    ///     assert_eq!(changed.next().await.unwrap().unwrap(), expected);
    /// }
    /// # }
    /// ```
    ///
    /// With a derived value, an element re-appears when its derived value
    /// changes:
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use rill_stream::FilterChangedExt;
    /// use rill_test_utils::test_channel;
    ///
    /// # async fn example() {
    /// let (tx, stream) = test_channel();
    /// // Elements are (name, score); diff by score
    /// let mut changed = stream.filter_changed(|entry: &(&str, u32)| entry.1);
    ///
    /// tx.send(vec![("a", 1)]).unwrap();
    /// tx.send(vec![("a", 1), ("b", 2)]).unwrap(); // a unchanged
    /// tx.send(vec![("a", 1), ("b", 3)]).unwrap(); // b's score changed
    ///
    /// assert_eq!(changed.next().await.unwrap().unwrap(), ("a", 1));
    /// assert_eq!(changed.next().await.unwrap().unwrap(), ("b", 2));
    /// assert_eq!(changed.next().await.unwrap().unwrap(), ("b", 3));
    /// # }
    /// ```
    fn filter_changed<V, F>(
        self,
        transform: F,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        V: PartialEq + Send + 'static,
        F: Fn(&T) -> V + Send + Sync + 'static;
}

impl<S, T> FilterChangedExt<T> for S
where
    S: Stream<Item = StreamItem<Vec<T>>> + Send + 'static,
    T: Eq + Hash + Clone + Send + 'static,
{
    fn filter_changed<V, F>(
        self,
        transform: F,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        V: PartialEq + Send + 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        let mut previous: Option<HashMap<T, V>> = None;

        let stream = self.flat_map(move |item| match item {
            StreamItem::Value(values) => {
                let changed: Vec<StreamItem<T>> = match previous.as_ref() {
                    // No prior list: everything is new
                    None => values.iter().cloned().map(StreamItem::Value).collect(),
                    Some(seen) => values
                        .iter()
                        .filter(|value| {
                            seen.get(*value)
                                .is_none_or(|derived| *derived != transform(*value))
                        })
                        .cloned()
                        .map(StreamItem::Value)
                        .collect(),
                };

                // Wholesale replacement, independent of what was emitted
                previous = Some(
                    values
                        .iter()
                        .map(|value| (value.clone(), transform(value)))
                        .collect(),
                );

                stream::iter(changed)
            }
            StreamItem::Error(e) => stream::iter(vec![StreamItem::Error(e)]),
        });

        Box::pin(stream)
    }
}
