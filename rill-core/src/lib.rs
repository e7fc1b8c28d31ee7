// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Foundation types for the rill reactive-stream utilities.
//!
//! This crate provides the pieces every other rill crate builds on:
//!
//! - [`StreamItem`]: in-band value-or-error stream elements
//! - [`RillError`]: the root error type, plus the [`Result`] alias
//! - [`Lifecycle`]: an externally driven active/inactive window signal
//! - [`ScopedTask`]: a spawned task with cooperative cancellation and
//!   awaited shutdown
//!
//! The cancellation token used throughout the workspace is
//! `tokio_util::sync::CancellationToken`, re-exported here so downstream
//! crates do not need a direct `tokio-util` dependency.

pub mod error;
pub mod lifecycle;
pub mod scoped_task;
pub mod stream_item;

pub use self::error::{Result, RillError};
pub use self::lifecycle::{Lifecycle, LifecycleWatcher};
pub use self::scoped_task::ScopedTask;
pub use self::stream_item::StreamItem;
pub use tokio_util::sync::CancellationToken;
