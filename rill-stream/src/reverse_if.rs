// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::ready;
use futures::stream::{self, StreamExt};
use futures::Stream;
use rill_core::StreamItem;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

enum Update<T> {
    Items(StreamItem<Vec<T>>),
    Reversed(bool),
}

/// Extension trait providing the `reverse_if` operator for streams of lists.
pub trait ReverseIfExt<T>: Stream<Item = StreamItem<Vec<T>>> + Sized
where
    T: Clone,
{
    /// Emits each list reversed while the watched flag is `true`, unchanged
    /// otherwise.
    ///
    /// The first emission happens once a list and the flag's current value
    /// have both been observed. Afterwards the operator emits on either
    /// side: a new list is emitted in the current orientation, and a flag
    /// flip re-emits the latest list in the new orientation.
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use rill_stream::ReverseIfExt;
    /// use rill_test_utils::test_channel;
    /// use tokio::sync::watch;
    ///
    /// # async fn example() {
    /// let (tx, stream) = test_channel();
    /// let (flag_tx, flag_rx) = watch::channel(false);
    /// let mut lists = stream.reverse_if(flag_rx);
    ///
    /// tx.send(vec![1, 2, 3]).unwrap();
    /// assert_eq!(lists.next().await.unwrap().unwrap(), vec![1, 2, 3]);
    ///
    /// flag_tx.send(true).unwrap();
    /// assert_eq!(lists.next().await.unwrap().unwrap(), vec![3, 2, 1]);
    /// # }
    /// ```
    fn reverse_if(
        self,
        reversed: watch::Receiver<bool>,
    ) -> impl Stream<Item = StreamItem<Vec<T>>> + Send + Unpin;
}

impl<S, T> ReverseIfExt<T> for S
where
    S: Stream<Item = StreamItem<Vec<T>>> + Send + 'static,
    T: Clone + Send + 'static,
{
    fn reverse_if(
        self,
        reversed: watch::Receiver<bool>,
    ) -> impl Stream<Item = StreamItem<Vec<T>>> + Send + Unpin {
        let lists = self.map(Update::Items);
        let flags = WatchStream::new(reversed).map(Update::Reversed);

        let mut latest: Option<Vec<T>> = None;
        let mut flip: Option<bool> = None;

        let stream = stream::select(lists, flags).filter_map(move |update| {
            ready(match update {
                Update::Items(StreamItem::Error(e)) => Some(StreamItem::Error(e)),
                Update::Items(StreamItem::Value(values)) => {
                    latest = Some(values);
                    match (flip, latest.as_ref()) {
                        (Some(flip), Some(values)) => {
                            Some(StreamItem::Value(oriented(values, flip)))
                        }
                        _ => None,
                    }
                }
                Update::Reversed(value) => {
                    flip = Some(value);
                    latest
                        .as_ref()
                        .map(|values| StreamItem::Value(oriented(values, value)))
                }
            })
        });

        Box::pin(stream)
    }
}

fn oriented<T: Clone>(values: &[T], reversed: bool) -> Vec<T> {
    if reversed {
        values.iter().rev().cloned().collect()
    } else {
        values.to_vec()
    }
}
