// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_exec::{
    concurrent_map, concurrent_map_indexed, try_concurrent_map, try_concurrent_map_indexed,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;
use tokio::time::{sleep, timeout};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("transform failed on {0}")]
struct TransformError(i32);

#[tokio::test]
async fn test_identity_round_trip() {
    let input = vec![1, 2, 3, 4, 5];

    let output = concurrent_map(input.clone(), |n| async move { n }).await;

    assert_eq!(output, input);
}

#[tokio::test]
async fn test_results_preserve_input_order_despite_completion_order() {
    // Later elements finish first
    let output = concurrent_map(vec![3u64, 2, 1], |n| async move {
        sleep(Duration::from_millis(n * 30)).await;
        n
    })
    .await;

    assert_eq!(output, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_transforms_run_concurrently() {
    // A barrier only opens if every transform is in flight at once
    let barrier = Arc::new(Barrier::new(4));

    let output = timeout(
        Duration::from_millis(1000),
        concurrent_map(vec![1, 2, 3, 4], move |n| {
            let barrier = barrier.clone();
            async move {
                barrier.wait().await;
                n * 10
            }
        }),
    )
    .await
    .expect("transforms did not run concurrently");

    assert_eq!(output, vec![10, 20, 30, 40]);
}

#[tokio::test]
async fn test_empty_collection_maps_to_empty_result() {
    let output = concurrent_map(Vec::<i32>::new(), |n| async move { n }).await;

    assert!(output.is_empty());
}

#[tokio::test]
async fn test_indexed_transform_receives_positions() {
    let output =
        concurrent_map_indexed(vec!["a", "b", "c"], |index, s| async move { (index, s) }).await;

    assert_eq!(output, vec![(0, "a"), (1, "b"), (2, "c")]);
}

#[tokio::test]
async fn test_single_failure_fails_the_whole_operation() {
    let result = try_concurrent_map(vec![1, 2, 3, 4], |n| async move {
        if n == 3 {
            Err(TransformError(n))
        } else {
            Ok(n * 2)
        }
    })
    .await;

    assert_eq!(result.unwrap_err(), TransformError(3));
}

#[tokio::test]
async fn test_successful_fallible_map_returns_all_results() {
    let result = try_concurrent_map(vec![1, 2, 3], |n| async move {
        Ok::<_, TransformError>(n + 100)
    })
    .await;

    assert_eq!(result.unwrap(), vec![101, 102, 103]);
}

#[tokio::test]
async fn test_indexed_fallible_map_fails_fast() {
    let result = try_concurrent_map_indexed(vec![10, 20, 30], |index, n| async move {
        if index == 1 {
            Err(TransformError(n))
        } else {
            Ok(n)
        }
    })
    .await;

    assert_eq!(result.unwrap_err(), TransformError(20));
}

#[tokio::test]
async fn test_failure_discards_partial_results() {
    // Even when every other transform completes first, the caller sees only
    // the failure
    let result = try_concurrent_map(vec![1, 2, 3], |n| async move {
        if n == 3 {
            sleep(Duration::from_millis(100)).await;
            Err(TransformError(n))
        } else {
            Ok(n)
        }
    })
    .await;

    assert_eq!(result.unwrap_err(), TransformError(3));
}
