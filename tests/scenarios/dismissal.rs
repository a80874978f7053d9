/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use graph_context_menu::MenuKind;
use graph_context_menu::input::{PointerInput, ScreenPoint, UiEvent};

use crate::harness::Harness;

#[test]
fn pointer_down_outside_closes_without_emission() {
    let mut harness = Harness::new(Some("n42"));
    harness.open(MenuKind::Reaction, 200.0, 100.0);

    harness.click(ScreenPoint::new(5.0, 5.0));

    assert!(!harness.controller.is_visible());
    assert!(harness.room.appends.is_empty());
    assert!(harness.broadcast.sends.is_empty());
}

#[test]
fn outside_down_pre_empts_an_inside_up() {
    let mut harness = Harness::new(Some("n42"));
    harness.open(MenuKind::Reaction, 200.0, 100.0);
    let check = harness.icon_center("check");

    // Drag gesture: down outside the panel, released over an icon. The
    // down already closed the menu, so the up over the icon is inert.
    harness.source.emit(UiEvent::PointerDown(PointerInput {
        position: ScreenPoint::new(5.0, 5.0),
    }));
    harness
        .source
        .emit(UiEvent::PointerUp(PointerInput { position: check }));
    harness.pump();

    assert!(!harness.controller.is_visible());
    assert!(harness.room.appends.is_empty());
}

#[test]
fn escape_closes_unconditionally_and_emits_nothing() {
    for kind in [MenuKind::Annotation, MenuKind::Reaction] {
        let mut harness = Harness::new(Some("n9"));
        harness.open(kind, 120.0, 80.0);
        let spawned_at_open = harness.room.appends.len();

        harness.press_escape();

        assert!(!harness.controller.is_visible());
        assert_eq!(harness.room.appends.len(), spawned_at_open);
        assert!(harness.broadcast.sends.is_empty());
    }
}

#[test]
fn escape_wins_even_when_a_gesture_would_keep_the_menu_open() {
    let mut harness = Harness::new(Some("n42"));
    harness.open(MenuKind::Reaction, 200.0, 100.0);

    // In-panel miss keeps the menu open; the follow-up Escape still closes.
    harness.click(harness.heading_point());
    assert!(harness.controller.is_visible());
    harness.press_escape();

    assert!(!harness.controller.is_visible());
}

#[test]
fn display_forces_visible_regardless_of_prior_state() {
    let mut harness = Harness::new(Some("n1"));
    harness.open(MenuKind::Reaction, 0.0, 0.0);
    harness.press_escape();
    assert!(!harness.controller.is_visible());
    assert!(!harness.controller.panel().is_shown());

    harness.open(MenuKind::Annotation, 10.0, 10.0);
    assert!(harness.controller.is_visible());
    assert!(harness.controller.panel().is_shown());
    assert_eq!(harness.controller.active_kind(), Some(MenuKind::Annotation));
}
