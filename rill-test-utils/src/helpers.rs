// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use rill_core::StreamItem;
use std::time::Duration;
use tokio::time::sleep;

/// Awaits the next item of the stream, panicking if nothing arrives in time
/// or the stream ends.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => item.expect("stream ended while an element was expected"),
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("no element emitted within {timeout_ms}ms")
        }
    }
}

/// Asserts that the stream emits nothing for the given duration.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("unexpected element emitted, expected no output");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Asserts that the stream has ended.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            assert!(item.is_none(), "expected end of stream, got an element");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("stream did not end within {timeout_ms}ms")
        }
    }
}
