// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{RillError, StreamItem};
use rill_stream::ReverseIfExt;
use rill_test_utils::{
    assert_no_element_emitted, test_channel, test_channel_with_errors, unwrap_stream,
};
use tokio::sync::watch;

#[tokio::test]
async fn test_lists_pass_through_while_flag_is_false() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Vec<i32>>();
    let (_flag_tx, flag_rx) = watch::channel(false);
    let mut lists = stream.reverse_if(flag_rx);

    // Act
    tx.send(vec![1, 2, 3])?;

    // Assert
    assert_eq!(
        unwrap_stream(&mut lists, 500).await.unwrap(),
        vec![1, 2, 3]
    );

    Ok(())
}

#[tokio::test]
async fn test_lists_are_reversed_while_flag_is_true() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Vec<i32>>();
    let (_flag_tx, flag_rx) = watch::channel(true);
    let mut lists = stream.reverse_if(flag_rx);

    // Act
    tx.send(vec![1, 2, 3])?;

    // Assert
    assert_eq!(
        unwrap_stream(&mut lists, 500).await.unwrap(),
        vec![3, 2, 1]
    );

    Ok(())
}

#[tokio::test]
async fn test_flag_flip_replays_latest_list() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Vec<i32>>();
    let (flag_tx, flag_rx) = watch::channel(false);
    let mut lists = stream.reverse_if(flag_rx);

    tx.send(vec![1, 2, 3])?;
    assert_eq!(
        unwrap_stream(&mut lists, 500).await.unwrap(),
        vec![1, 2, 3]
    );

    // Act: flipping the flag re-emits without a new list
    flag_tx.send(true)?;
    assert_eq!(
        unwrap_stream(&mut lists, 500).await.unwrap(),
        vec![3, 2, 1]
    );

    // And back
    flag_tx.send(false)?;
    assert_eq!(
        unwrap_stream(&mut lists, 500).await.unwrap(),
        vec![1, 2, 3]
    );

    Ok(())
}

#[tokio::test]
async fn test_no_emission_before_first_list() -> anyhow::Result<()> {
    // Arrange
    let (_tx, stream) = test_channel::<Vec<i32>>();
    let (flag_tx, flag_rx) = watch::channel(false);
    let mut lists = stream.reverse_if(flag_rx);

    // Act: flag activity alone produces nothing
    flag_tx.send(true)?;
    flag_tx.send(false)?;

    // Assert
    assert_no_element_emitted(&mut lists, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_errors_are_propagated() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<Vec<i32>>();
    let (_flag_tx, flag_rx) = watch::channel(false);
    let mut lists = stream.reverse_if(flag_rx);

    // Act
    tx.send(StreamItem::Error(RillError::stream_error("boom")))?;

    // Assert
    assert!(unwrap_stream(&mut lists, 500).await.is_error());

    Ok(())
}
