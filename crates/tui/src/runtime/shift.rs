//! Shift listener task.
//!
//! Responsibilities:
//! - Run a separate task that applies shift press/release events to the
//!   shared [`ShiftState`].
//! - Give the input pump a non-blocking way to forward those events.
//!
//! Does NOT handle:
//! - Reading terminal events (see `runtime::input`).
//! - Interpreting the flag (the app consults it on Enter in CHAT mode).
//!
//! Invariants:
//! - Forwarding never waits: a full channel drops the event.
//! - If the listener is gone the flag keeps its last value.
//! - `join` completes once every sender is dropped.

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

use crate::input::{ShiftEvent, ShiftState};

/// Handle to the running listener task.
pub struct ShiftListener {
    tx: mpsc::Sender<ShiftEvent>,
    handle: JoinHandle<()>,
}

impl ShiftListener {
    /// Spawn the listener writing into `state`.
    pub fn spawn(state: ShiftState, capacity: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<ShiftEvent>(capacity);
        let handle = tokio::spawn(async move {
            tracing::debug!("Shift listener started");
            while let Some(event) = rx.recv().await {
                state.set(event.is_pressed());
            }
            tracing::debug!("Shift listener stopped");
        });
        Self { tx, handle }
    }

    pub fn sender(&self) -> ShiftSender {
        ShiftSender(self.tx.clone())
    }

    /// Close the channel and wait for the task to end.
    ///
    /// Other [`ShiftSender`]s must already be dropped.
    pub async fn join(self) {
        let Self { tx, handle } = self;
        drop(tx);
        if let Err(err) = handle.await {
            tracing::warn!(error = %err, "Shift listener ended abnormally; shift state frozen");
        }
    }
}

/// Non-blocking sender into the listener.
#[derive(Debug, Clone)]
pub struct ShiftSender(mpsc::Sender<ShiftEvent>);

impl ShiftSender {
    /// Wrap an existing channel sender.
    pub fn from_sender(tx: mpsc::Sender<ShiftEvent>) -> Self {
        Self(tx)
    }

    /// Forward `event` without waiting. Returns false once the listener is gone.
    pub fn notify(&self, event: ShiftEvent) -> bool {
        match self.0.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::debug!("Shift channel full, dropping event");
                true
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn wait_for(state: &ShiftState, held: bool) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while state.is_held() != held {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await
        .expect("shift state never changed");
    }

    #[tokio::test]
    async fn test_listener_tracks_press_and_release() {
        let state = ShiftState::new();
        let listener = ShiftListener::spawn(state.clone(), 8);
        let sender = listener.sender();

        assert!(sender.notify(ShiftEvent::Pressed));
        wait_for(&state, true).await;
        assert!(sender.notify(ShiftEvent::Released));
        wait_for(&state, false).await;

        drop(sender);
        listener.join().await;
    }

    #[tokio::test]
    async fn test_flag_frozen_after_listener_stops() {
        let state = ShiftState::new();
        let listener = ShiftListener::spawn(state.clone(), 8);
        let sender = listener.sender();
        sender.notify(ShiftEvent::Pressed);
        wait_for(&state, true).await;

        drop(sender);
        listener.join().await;
        assert!(state.is_held());
    }

    #[tokio::test]
    async fn test_notify_reports_closed_listener() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        assert!(!ShiftSender(tx).notify(ShiftEvent::Pressed));
    }

    #[tokio::test]
    async fn test_full_channel_drops_without_blocking() {
        let (tx, _rx) = mpsc::channel(1);
        let sender = ShiftSender(tx);
        assert!(sender.notify(ShiftEvent::Pressed));
        assert!(sender.notify(ShiftEvent::Released));
    }
}
