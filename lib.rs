/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Contextual menu controller for a collaborative graph surface.
//!
//! The graph surface reports a trigger (typically a right-click) through
//! [`MenuController::display_menu`]; the controller picks the concrete menu
//! behavior, renders it into a [`surface::MenuPanel`] at the trigger's screen
//! coordinates, and arbitrates the subsequent pointer/keyboard stream into
//! close / stay-open / delegate decisions. Committed interactions emit
//! [`element::ProducedElement`]s to the injected room-state and broadcast
//! collaborators.
//!
//! Everything beyond that decision engine — hit-testing the graph itself,
//! durable room state, real-time transport, identity — lives behind the
//! traits in [`collab`].

pub mod collab;
pub mod controller;
pub mod element;
pub mod input;
pub mod menu;
pub mod surface;

pub use collab::MenuContext;
pub use controller::MenuController;
pub use element::ProducedElement;
pub use input::{MenuTrigger, UiEvent};
pub use menu::MenuKind;
