//! Input pump: terminal events into actions.
//!
//! Responsibilities:
//! - Read crossterm's `EventStream` on its own task.
//! - Send key presses and resizes over the bounded action channel.
//! - Divert shift transitions to the shift listener.
//!
//! Does NOT handle:
//! - Key interpretation (see `App::handle_input`).
//!
//! Invariants:
//! - Key and resize actions are awaited into the channel, never dropped.
//! - Shift transitions are forwarded with `try_send` and never block the pump.
//! - The pump stops on cancellation, stream end, or a closed action channel.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::action::Action;
use crate::input::ShiftEvent;
use crate::runtime::shift::ShiftSender;

/// Decides what each terminal event becomes.
pub struct EventRouter {
    shift: ShiftSender,
    shift_alive: bool,
}

impl EventRouter {
    pub fn new(shift: ShiftSender) -> Self {
        Self {
            shift,
            shift_alive: true,
        }
    }

    /// Route one event. Returns the action for the main loop, if any.
    pub fn route(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => {
                if let Some(transition) = ShiftEvent::from_key(&key) {
                    self.forward_shift(transition);
                    return None;
                }
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => Some(Action::Input(key)),
                    KeyEventKind::Release => None,
                }
            }
            Event::Resize(cols, rows) => Some(Action::Resize(cols, rows)),
            _ => None,
        }
    }

    pub fn shift_alive(&self) -> bool {
        self.shift_alive
    }

    fn forward_shift(&mut self, transition: ShiftEvent) {
        if self.shift_alive && !self.shift.notify(transition) {
            self.shift_alive = false;
            tracing::warn!("Shift listener is gone; shift state frozen");
        }
    }
}

/// Spawn the pump reading terminal events until `cancel` fires.
pub fn spawn_input_pump(
    tx: Sender<Action>,
    shift: ShiftSender,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut router = EventRouter::new(shift);
        let mut reader = EventStream::new();
        loop {
            let next = tokio::select! {
                _ = cancel.cancelled() => break,
                next = reader.next() => next,
            };
            let event = match next {
                Some(Ok(event)) => event,
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "Terminal event stream failed");
                    break;
                }
                None => break,
            };
            if let Some(action) = router.route(event)
                && tx.send(action).await.is_err()
            {
                break;
            }
        }
        tracing::debug!("Input pump stopped");
    })
}
