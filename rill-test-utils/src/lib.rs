// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rill workspace.
//!
//! Provides channel-backed test streams, assertion helpers and
//! catalog-flavored fixture data. For development and testing only.

pub mod error_injection;
pub mod helpers;
pub mod media;

use futures::{Stream, StreamExt};
use rill_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};
pub use media::MediaEntry;

/// Creates a test channel that wraps sent values in `StreamItem::Value`.
///
/// Tests send plain values; the stream side yields `StreamItem<T>` as the
/// operators expect.
///
/// # Example
///
/// ```rust
/// use rill_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
/// tx.send(7).unwrap();
/// assert_eq!(stream.next().await.unwrap().unwrap(), 7);
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` directly.
///
/// Lets tests inject both values and in-band errors.
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
