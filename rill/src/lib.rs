// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reactive-stream utilities for catalog browsing clients.
//!
//! `rill` bundles the workspace crates behind one import:
//!
//! - change-detection combinators from `rill-stream`
//!   ([`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed),
//!   [`filter_changed`](FilterChangedExt::filter_changed), ...)
//! - lifecycle-scoped collection and concurrent mapping from `rill-exec`
//! - the foundation types from `rill-core`
//! - the catalog [`sort`] option mapping
//!
//! # Example
//!
//! ```rust
//! use futures::StreamExt;
//! use rill::DistinctUntilChangedByKeyExt;
//! use rill_test_utils::test_channel;
//!
//! # async fn example() {
//! let (tx, stream) = test_channel();
//! let mut scores = stream.distinct_until_changed_by_key(|entry: &(u32, u32)| entry.1);
//!
//! tx.send((1, 84)).unwrap();
//! tx.send((2, 84)).unwrap(); // same score, suppressed
//!
//! assert_eq!(scores.next().await.unwrap().unwrap(), (1, 84));
//! # }
//! ```

pub mod sort;

pub use rill_core::{
    CancellationToken, Lifecycle, LifecycleWatcher, Result, RillError, ScopedTask, StreamItem,
};
pub use rill_exec::{
    concurrent_map, concurrent_map_indexed, try_concurrent_map, try_concurrent_map_indexed,
    CollectLatestScopedExt, CollectScopedExt,
};
pub use rill_stream::{
    DistinctUntilAnyChangedExt, DistinctUntilChangedByKeyExt, DistinctUntilChangedExt,
    FilterChangedExt, OnErrorExt, ReverseIfExt,
};
