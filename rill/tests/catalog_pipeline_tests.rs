// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! End-to-end composition: a catalog result stream diffed by score and
//! collected under a lifecycle window, the way a browsing screen wires it.

use rill::{CollectScopedExt, FilterChangedExt, Lifecycle};
use rill_test_utils::media::{entry_blade, entry_cranes, entry_drift};
use rill_test_utils::{test_channel, MediaEntry};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

fn by_score(entry: &MediaEntry) -> u32 {
    entry.score
}

async fn expect_entry(results: &mut mpsc::UnboundedReceiver<MediaEntry>) -> MediaEntry {
    timeout(Duration::from_millis(1000), results.recv())
        .await
        .expect("timed out waiting for a catalog entry")
        .expect("collector channel closed")
}

async fn expect_silence(results: &mut mpsc::UnboundedReceiver<MediaEntry>) {
    assert!(
        timeout(Duration::from_millis(100), results.recv())
            .await
            .is_err(),
        "unexpected catalog entry collected"
    );
}

#[tokio::test]
async fn test_score_changes_reach_the_screen_once() -> anyhow::Result<()> {
    // Arrange: result pages are diffed by score before hitting the screen
    let (pages_tx, pages) = test_channel::<Vec<MediaEntry>>();
    let mut subscriptions = VecDeque::from([pages.filter_changed(by_score)]);
    let lifecycle = Lifecycle::new();
    let (screen_tx, mut screen) = mpsc::unbounded_channel();

    let task = lifecycle.collect_scoped(
        move || subscriptions.pop_front().expect("single activation expected"),
        move |entry| {
            let screen_tx = screen_tx.clone();
            async move {
                screen_tx.send(entry).unwrap();
                Ok::<(), std::io::Error>(())
            }
        },
    );

    lifecycle.set_active(true);

    // Act: first page renders everything
    pages_tx.send(vec![entry_blade(), entry_cranes()])?;
    assert_eq!(expect_entry(&mut screen).await, entry_blade());
    assert_eq!(expect_entry(&mut screen).await, entry_cranes());

    // An unchanged page renders nothing
    pages_tx.send(vec![entry_blade(), entry_cranes()])?;
    expect_silence(&mut screen).await;

    // A score bump re-renders only the changed entry, a new entry appears
    pages_tx.send(vec![
        entry_blade().with_score(90),
        entry_cranes(),
        entry_drift(),
    ])?;
    assert_eq!(expect_entry(&mut screen).await, entry_blade().with_score(90));
    assert_eq!(expect_entry(&mut screen).await, entry_drift());
    expect_silence(&mut screen).await;

    task.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn test_reopened_screen_rerenders_the_full_page() -> anyhow::Result<()> {
    // Arrange: each activation rebuilds the diffing pipeline from scratch
    let (pages1_tx, pages1) = test_channel::<Vec<MediaEntry>>();
    let (pages2_tx, pages2) = test_channel::<Vec<MediaEntry>>();
    let mut subscriptions = VecDeque::from([
        pages1.filter_changed(by_score),
        pages2.filter_changed(by_score),
    ]);
    let lifecycle = Lifecycle::new();
    let (screen_tx, mut screen) = mpsc::unbounded_channel();

    let task = lifecycle.collect_scoped(
        move || subscriptions.pop_front().expect("two activations expected"),
        move |entry| {
            let screen_tx = screen_tx.clone();
            async move {
                screen_tx.send(entry).unwrap();
                Ok::<(), std::io::Error>(())
            }
        },
    );

    lifecycle.set_active(true);
    pages1_tx.send(vec![entry_blade()])?;
    assert_eq!(expect_entry(&mut screen).await, entry_blade());

    // Act: screen goes to the background and comes back
    lifecycle.set_active(false);
    lifecycle.set_active(true);

    // Assert: the same page renders again; no diff state survived
    pages2_tx.send(vec![entry_blade()])?;
    assert_eq!(expect_entry(&mut screen).await, entry_blade());

    task.shutdown().await;
    Ok(())
}
