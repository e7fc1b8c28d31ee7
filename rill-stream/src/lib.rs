// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Change-detection stream combinators.
//!
//! This crate provides operators that suppress or extract stream elements
//! based on how they compare to what was previously emitted. All operators
//! work on `Stream<Item = StreamItem<T>>` and propagate in-band errors
//! unchanged; each operator is provided via an extension trait for
//! composability.
//!
//! # Operators
//!
//! - [`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed):
//!   drops consecutive equal elements
//! - [`distinct_until_changed_by_key`](DistinctUntilChangedByKeyExt::distinct_until_changed_by_key):
//!   drops elements whose derived key equals the previous emission's key
//! - [`distinct_until_any_changed`](DistinctUntilAnyChangedExt::distinct_until_any_changed):
//!   drops elements whose derived key sequence is unchanged in every position
//! - [`filter_changed`](FilterChangedExt::filter_changed): diffs a stream of
//!   lists, emitting only new or changed elements
//! - [`reverse_if`](ReverseIfExt::reverse_if): reverses emitted lists while
//!   an external flag is set
//! - [`on_error`](OnErrorExt::on_error): consumes or propagates in-band
//!   errors via a handler
//!
//! # State ownership
//!
//! Every operator call constructs its own comparison state. Because the
//! operators consume the source stream, two subscriptions can never share
//! state: building a second pipeline means calling the operator again, which
//! creates a fresh state object. State updates happen synchronously while an
//! element is processed, so delivery order within one subscription is never
//! affected.

#[macro_use]
mod logging;
pub mod distinct_until_any_changed;
pub mod distinct_until_changed;
pub mod distinct_until_changed_by_key;
pub mod filter_changed;
pub mod on_error;
pub mod reverse_if;

pub use distinct_until_any_changed::DistinctUntilAnyChangedExt;
pub use distinct_until_changed::DistinctUntilChangedExt;
pub use distinct_until_changed_by_key::DistinctUntilChangedByKeyExt;
pub use filter_changed::FilterChangedExt;
pub use on_error::OnErrorExt;
pub use reverse_if::ReverseIfExt;
