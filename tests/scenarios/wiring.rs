/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use graph_context_menu::MenuKind;
use graph_context_menu::input::{Key, ScreenPoint, UiEvent};

use crate::harness::Harness;

#[test]
#[should_panic(expected = "unknown context menu type")]
fn unknown_type_id_is_a_loud_defect() {
    let mut harness = Harness::new(Some("n1"));
    let mut trigger =
        graph_context_menu::input::MenuTrigger::at(ScreenPoint::new(0.0, 0.0));
    let controller = &mut harness.controller;
    controller.display_menu_id(
        "DELETE_NODE",
        &mut trigger,
        &mut graph_context_menu::collab::MenuContext {
            resolver: &harness.resolver,
            room: &mut harness.room,
            broadcast: &mut harness.broadcast,
            identity: &harness.identity,
            diagnostics: &mut harness.diagnostics,
        },
    );
}

#[test]
fn known_type_ids_dispatch_by_name() {
    let mut harness = Harness::new(Some("n3"));
    let mut trigger =
        graph_context_menu::input::MenuTrigger::at(ScreenPoint::new(0.0, 0.0));
    let controller = &mut harness.controller;
    controller.display_menu_id(
        "REACTION",
        &mut trigger,
        &mut graph_context_menu::collab::MenuContext {
            resolver: &harness.resolver,
            room: &mut harness.room,
            broadcast: &mut harness.broadcast,
            identity: &harness.identity,
            diagnostics: &mut harness.diagnostics,
        },
    );
    assert_eq!(harness.controller.active_kind(), Some(MenuKind::Reaction));
    assert!(harness.controller.is_visible());
}

#[test]
fn detached_controller_ignores_the_event_stream() {
    let mut harness = Harness::new(Some("n1"));
    harness.open(MenuKind::Reaction, 0.0, 0.0);

    harness.controller.detach();
    harness.source.emit(UiEvent::KeyDown(Key::Escape));
    harness.pump();

    // Teardown means the Escape was never delivered.
    assert!(harness.controller.is_visible());
}

#[test]
fn dropped_subscriptions_are_pruned_from_the_source() {
    let mut harness = Harness::new(Some("n1"));
    assert_eq!(harness.source.listener_count(), 1);

    harness.controller.detach();
    harness.source.emit(UiEvent::KeyDown(Key::Escape));
    assert_eq!(harness.source.listener_count(), 0);
}
