// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lifecycle-scoped stream collection and concurrent execution helpers.
//!
//! The collection helpers attach an async consumer to a stream for the
//! duration of a [`Lifecycle`](rill_core::Lifecycle) window: a subscription
//! is established when the window opens, torn down when it closes, and
//! re-established when the window reopens. The stream factory is invoked
//! again on every reopen, so operator state never survives a restart. All
//! producer and consumer errors are intercepted at this boundary, logged,
//! and never propagated to the owning component.
//!
//! The concurrent map helpers apply an async transform to every element of
//! a fixed collection concurrently, preserving input order in the results.

#[macro_use]
mod logging;
pub mod collect;
pub mod collect_latest;
pub mod concurrent_map;

pub use collect::CollectScopedExt;
pub use collect_latest::CollectLatestScopedExt;
pub use concurrent_map::{
    concurrent_map, concurrent_map_indexed, try_concurrent_map, try_concurrent_map_indexed,
};
