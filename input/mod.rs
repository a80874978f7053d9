/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Pointer and keyboard events as seen by the menu controller.
//!
//! The host surface translates its native event stream into [`UiEvent`]s and
//! pushes them through an [`source::InputSource`]; the controller drains its
//! subscription in emission order, which preserves the native down-before-up
//! gesture sequencing the arbitration rules rely on.

pub mod source;

pub use keyboard_types::Key;

pub type ScreenPoint = euclid::default::Point2D<f32>;

/// A pointer interaction at a screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: ScreenPoint,
}

impl PointerInput {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: ScreenPoint::new(x, y),
        }
    }
}

/// Global event stream the controller arbitrates.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    PointerDown(PointerInput),
    PointerUp(PointerInput),
    KeyDown(Key),
}

/// The triggering interaction: screen coordinates plus enough context for
/// the target resolver, and a flag the host surface checks to skip its
/// native context menu once a menu type has claimed the gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTrigger {
    pointer: ScreenPoint,
    default_suppressed: bool,
}

impl MenuTrigger {
    pub fn at(pointer: ScreenPoint) -> Self {
        Self {
            pointer,
            default_suppressed: false,
        }
    }

    pub fn pointer(&self) -> ScreenPoint {
        self.pointer
    }

    pub fn suppress_default(&mut self) {
        self.default_suppressed = true;
    }

    pub fn default_suppressed(&self) -> bool {
        self.default_suppressed
    }
}
