/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The menu's rendering container.
//!
//! [`MenuPanel`] is the one shared surface: the controller positions it and
//! syncs its display state, the active menu type fills it. Content is a
//! heading strip plus a grid of icon cells; hit testing works on the cell
//! rects laid out here, so "clicked inside the panel but missed an icon" is
//! directly observable.

use crate::input::ScreenPoint;

pub type ScreenSize = euclid::default::Size2D<f32>;
pub type ScreenRect = euclid::default::Rect<f32>;

/// One entry of the icon table: glyph name plus its code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGlyph {
    pub name: &'static str,
    pub unicode: char,
}

/// A selectable icon cell with its laid-out screen rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelItem {
    pub rect: ScreenRect,
    pub glyph: IconGlyph,
}

const PADDING: f32 = 8.0;
const HEADING_HEIGHT: f32 = 28.0;
const CELL: f32 = 24.0;
const COLUMNS: usize = 6;
const MIN_WIDTH: f32 = 160.0;

/// The single on-screen menu container.
pub struct MenuPanel {
    origin: ScreenPoint,
    heading: String,
    items: Vec<PanelItem>,
    bounds: ScreenRect,
    shown: bool,
}

impl Default for MenuPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuPanel {
    pub fn new() -> Self {
        Self {
            origin: ScreenPoint::zero(),
            heading: String::new(),
            items: Vec::new(),
            bounds: ScreenRect::zero(),
            shown: false,
        }
    }

    /// Reset content and place the panel at the trigger's screen coordinate.
    /// Previous content is discarded, never carried between menu types.
    pub fn begin(&mut self, origin: ScreenPoint, heading: &str) {
        self.origin = origin;
        self.heading = heading.to_string();
        self.items.clear();
        self.bounds = ScreenRect::new(
            origin,
            ScreenSize::new(MIN_WIDTH, HEADING_HEIGHT + PADDING * 2.0),
        );
    }

    /// Lay the icon table out as a grid below the heading, in table order.
    pub fn lay_out_palette(&mut self, icons: &[IconGlyph]) {
        for (index, glyph) in icons.iter().copied().enumerate() {
            let column = index % COLUMNS;
            let row = index / COLUMNS;
            let rect = ScreenRect::new(
                ScreenPoint::new(
                    self.origin.x + PADDING + column as f32 * CELL,
                    self.origin.y + PADDING + HEADING_HEIGHT + row as f32 * CELL,
                ),
                ScreenSize::new(CELL, CELL),
            );
            self.items.push(PanelItem { rect, glyph });
        }

        let rows = self.items.len().div_ceil(COLUMNS);
        let width = (COLUMNS as f32 * CELL + PADDING * 2.0).max(MIN_WIDTH);
        let height = HEADING_HEIGHT + rows as f32 * CELL + PADDING * 2.0;
        self.bounds = ScreenRect::new(self.origin, ScreenSize::new(width, height));
    }

    /// Whether a screen point lands inside the panel's bounds.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        self.bounds.contains(point)
    }

    /// The icon cell under a screen point, if the point hits one.
    pub fn icon_at(&self, point: ScreenPoint) -> Option<IconGlyph> {
        self.items
            .iter()
            .find(|item| item.rect.contains(point))
            .map(|item| item.glyph)
    }

    /// Sync the display so that hidden is visually absent.
    pub fn set_display(&mut self, shown: bool) {
        self.shown = shown;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn items(&self) -> &[PanelItem] {
        &self.items
    }

    pub fn bounds(&self) -> ScreenRect {
        self.bounds
    }
}
