/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shared icon-selection sub-component.
//!
//! Both menu types render the same glyph palette and commit a selection the
//! same way: mint an icon element anchored to the open-time target and fan it
//! out to the room-state and broadcast sinks. The two sinks receive the same
//! payload with no ordering guarantee between them.

use log::debug;

use crate::collab::MenuContext;
use crate::element::ProducedElement;
use crate::input::PointerInput;
use crate::surface::{IconGlyph, MenuPanel};

/// Fixed reaction glyph table. Order matters only for the palette layout.
pub const REACTION_ICONS: &[IconGlyph] = &[
    IconGlyph {
        name: "smile-o",
        unicode: '\u{f118}',
    },
    IconGlyph {
        name: "meh-o",
        unicode: '\u{f11a}',
    },
    IconGlyph {
        name: "frown-o",
        unicode: '\u{f119}',
    },
    IconGlyph {
        name: "handshake-o",
        unicode: '\u{f2b5}',
    },
    IconGlyph {
        name: "bath",
        unicode: '\u{f2cd}',
    },
    IconGlyph {
        name: "blind",
        unicode: '\u{f29d}',
    },
    IconGlyph {
        name: "copyright",
        unicode: '\u{f1f9}',
    },
    IconGlyph {
        name: "check",
        unicode: '\u{f00c}',
    },
    IconGlyph {
        name: "times",
        unicode: '\u{f00d}',
    },
    IconGlyph {
        name: "ban",
        unicode: '\u{f05e}',
    },
    IconGlyph {
        name: "cube",
        unicode: '\u{f1b2}',
    },
    IconGlyph {
        name: "eye",
        unicode: '\u{f06e}',
    },
];

/// Render the glyph palette into the panel.
pub(crate) fn render(panel: &mut MenuPanel) {
    panel.lay_out_palette(REACTION_ICONS);
}

/// Resolve a pointer-up against the palette. An icon hit mints one icon
/// element for `parent_element_id` and emits it to both sinks; a miss leaves
/// the menu open. Returns the menu's `should_close` signal.
pub(crate) fn select(
    pointer: &PointerInput,
    panel: &MenuPanel,
    parent_element_id: &str,
    ctx: &mut MenuContext<'_>,
) -> bool {
    let Some(glyph) = panel.icon_at(pointer.position) else {
        return false;
    };

    let element = ProducedElement::icon(
        ctx.identity.mint_id("iconNode"),
        ctx.identity.author_id(),
        parent_element_id.to_string(),
        glyph.unicode.to_string(),
    );
    debug!(
        "icon {} selected for element {parent_element_id}",
        glyph.name
    );

    ctx.room.append(element.kind_label(), &element.to_room_json());
    ctx.broadcast.send(element.kind_label(), &element);
    true
}
