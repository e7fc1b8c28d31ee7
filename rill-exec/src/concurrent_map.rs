// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Order-preserving concurrent mapping over fixed collections.

use futures::future::{join_all, try_join_all};
use std::future::Future;

/// Applies an async transform to every element concurrently and returns the
/// results in input order, regardless of completion order.
///
/// ```rust
/// use rill_exec::concurrent_map;
///
/// # #[tokio::main]
/// # async fn main() {
/// let doubled = concurrent_map(vec![1, 2, 3], |n| async move { n * 2 }).await;
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # }
/// ```
pub async fn concurrent_map<I, T, U, F, Fut>(items: I, transform: F) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: Fn(T) -> Fut,
    Fut: Future<Output = U>,
{
    join_all(items.into_iter().map(transform)).await
}

/// Like [`concurrent_map`], additionally passing the element index to the
/// transform.
pub async fn concurrent_map_indexed<I, T, U, F, Fut>(items: I, transform: F) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: Fn(usize, T) -> Fut,
    Fut: Future<Output = U>,
{
    join_all(
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| transform(index, item)),
    )
    .await
}

/// Fallible variant of [`concurrent_map`].
///
/// The collection is treated as a single unit of work: the first transform
/// failure fails the whole call, the remaining in-flight transforms are
/// dropped and any partial results are discarded.
///
/// ```rust
/// use rill_exec::try_concurrent_map;
///
/// # #[tokio::main]
/// # async fn main() {
/// let result = try_concurrent_map(vec![1, 2, 3], |n| async move {
///     if n == 2 {
///         Err("even numbers not allowed")
///     } else {
///         Ok(n)
///     }
/// })
/// .await;
/// assert!(result.is_err());
/// # }
/// ```
pub async fn try_concurrent_map<I, T, U, E, F, Fut>(
    items: I,
    transform: F,
) -> std::result::Result<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: Fn(T) -> Fut,
    Fut: Future<Output = std::result::Result<U, E>>,
{
    try_join_all(items.into_iter().map(transform)).await
}

/// Fallible variant of [`concurrent_map_indexed`], with the same
/// all-or-nothing semantics as [`try_concurrent_map`].
pub async fn try_concurrent_map_indexed<I, T, U, E, F, Fut>(
    items: I,
    transform: F,
) -> std::result::Result<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: Fn(usize, T) -> Fut,
    Fut: Future<Output = std::result::Result<U, E>>,
{
    try_join_all(
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| transform(index, item)),
    )
    .await
}
