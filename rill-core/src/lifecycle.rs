// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Externally driven active/inactive window signal.
//!
//! A [`Lifecycle`] models the host component's activity window: subscriptions
//! scoped to it are allowed to run only while the window is active. The owner
//! drives the signal with [`set_active`](Lifecycle::set_active); consumers
//! obtain a [`LifecycleWatcher`] and await transitions.

use std::sync::Arc;
use tokio::sync::watch;

/// An externally owned activity window.
///
/// Starts inactive. Cloning shares the same underlying signal; when every
/// clone is dropped, all watchers observe the window as closed and waiting
/// calls resolve with `false`.
///
/// # Example
///
/// ```
/// use rill_core::Lifecycle;
///
/// # #[tokio::main]
/// # async fn main() {
/// let lifecycle = Lifecycle::new();
/// let mut watcher = lifecycle.watcher();
///
/// lifecycle.set_active(true);
/// assert!(watcher.active().await);
/// assert!(lifecycle.is_active());
///
/// lifecycle.set_active(false);
/// assert!(watcher.inactive().await);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Lifecycle {
    tx: Arc<watch::Sender<bool>>,
}

impl Lifecycle {
    /// Creates a new, inactive window.
    pub fn new() -> Self {
        Self {
            tx: Arc::new(watch::Sender::new(false)),
        }
    }

    /// Opens or closes the window.
    ///
    /// Idempotent: setting the current state again does not wake watchers.
    pub fn set_active(&self, active: bool) {
        self.tx.send_if_modified(|state| {
            if *state == active {
                false
            } else {
                *state = active;
                true
            }
        });
    }

    /// Returns whether the window is currently active.
    pub fn is_active(&self) -> bool {
        *self.tx.borrow()
    }

    /// Creates a watcher observing this window.
    pub fn watcher(&self) -> LifecycleWatcher {
        LifecycleWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of a [`Lifecycle`].
///
/// Each watcher tracks the window independently; waiting resolves
/// immediately when the window is already in the requested state.
#[derive(Debug)]
pub struct LifecycleWatcher {
    rx: watch::Receiver<bool>,
}

impl LifecycleWatcher {
    /// Waits until the window is active.
    ///
    /// Returns `false` if the [`Lifecycle`] was dropped before the window
    /// opened, `true` otherwise.
    pub async fn active(&mut self) -> bool {
        self.rx.wait_for(|active| *active).await.is_ok()
    }

    /// Waits until the window is inactive.
    ///
    /// Returns `false` if the [`Lifecycle`] was dropped, `true` otherwise.
    pub async fn inactive(&mut self) -> bool {
        self.rx.wait_for(|active| !*active).await.is_ok()
    }

    /// Returns the last observed window state.
    pub fn is_active(&self) -> bool {
        *self.rx.borrow()
    }
}
