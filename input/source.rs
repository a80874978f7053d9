/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Explicit listener registration for the global event stream.
//!
//! The original design wired window-level listeners at module load; here the
//! wiring is explicit so tests can bind a fresh controller to a fresh
//! simulated source, and teardown is just dropping the subscription.

use crossbeam_channel::{Receiver, Sender, unbounded};

use super::UiEvent;

/// Fan-out point for the host surface's pointer/keyboard stream.
#[derive(Default)]
pub struct InputSource {
    listeners: Vec<Sender<UiEvent>>,
}

impl InputSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The subscription stays live until dropped.
    pub fn subscribe(&mut self) -> InputSubscription {
        let (sender, receiver) = unbounded();
        self.listeners.push(sender);
        InputSubscription { receiver }
    }

    /// Deliver one event to every live listener, pruning dropped ones.
    pub fn emit(&mut self, event: UiEvent) {
        self.listeners
            .retain(|listener| listener.send(event.clone()).is_ok());
    }

    /// Live listener count. Dropped subscriptions are pruned on `emit`.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Receiving half held by the controller; drop (or `MenuController::detach`)
/// unregisters on the next `emit`.
pub struct InputSubscription {
    receiver: Receiver<UiEvent>,
}

impl InputSubscription {
    pub fn try_next(&self) -> Option<UiEvent> {
        self.receiver.try_recv().ok()
    }
}
