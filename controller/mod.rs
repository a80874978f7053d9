/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The menu controller: visibility state, the active menu type, and the
//! global pointer/keyboard arbitration.
//!
//! Two states only: hidden (initial) and visible. Hidden becomes visible
//! only through [`MenuController::display_menu`]. Visible becomes hidden on
//! an outside pointer-down, on Escape, or when the active menu reports a
//! completed interaction; an in-menu interaction that matched nothing leaves
//! the menu open for another attempt. There is no terminal state.

use log::debug;

use crate::collab::MenuContext;
use crate::input::source::{InputSource, InputSubscription};
use crate::input::{Key, MenuTrigger, UiEvent};
use crate::menu::{ActiveMenu, MenuKind};
use crate::surface::MenuPanel;

pub struct MenuController {
    visible: bool,
    active: Option<ActiveMenu>,
    panel: MenuPanel,
    events: Option<InputSubscription>,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuController {
    pub fn new() -> Self {
        Self {
            visible: false,
            active: None,
            panel: MenuPanel::new(),
            events: None,
        }
    }

    /// Register on the surface's global event stream. Call once at
    /// construction time; [`detach`](Self::detach) is the teardown path.
    pub fn attach(&mut self, source: &mut InputSource) {
        self.events = Some(source.subscribe());
    }

    /// Unregister from the event stream. Pumping becomes a no-op.
    pub fn detach(&mut self) {
        self.events = None;
    }

    /// Drain the subscription and arbitrate each event, preserving the
    /// source's emission order (native down-before-up sequencing).
    pub fn pump(&mut self, ctx: &mut MenuContext<'_>) {
        let Some(events) = self.events.take() else {
            return;
        };
        while let Some(event) = events.try_next() {
            self.handle_event(event, ctx);
        }
        self.events = Some(events);
    }

    /// Display the menu for `kind` at the trigger's screen coordinates.
    /// Forces visibility regardless of prior state; the previous active
    /// menu's transient state is discarded.
    pub fn display_menu(
        &mut self,
        kind: MenuKind,
        trigger: &mut MenuTrigger,
        ctx: &mut MenuContext<'_>,
    ) {
        debug!("displaying {} menu at {:?}", kind.label(), trigger.pointer());
        let mut menu = ActiveMenu::for_kind(kind);
        menu.behavior().init(trigger, &mut self.panel, ctx);
        self.active = Some(menu);
        self.toggle_visibility(Some(true));
    }

    /// String-id entry point for hosts that dispatch menu types by name.
    ///
    /// # Panics
    /// Panics on an id with no registered menu type: that is a programming
    /// defect at the integration seam, not a condition to recover from.
    pub fn display_menu_id(
        &mut self,
        type_id: &str,
        trigger: &mut MenuTrigger,
        ctx: &mut MenuContext<'_>,
    ) {
        match type_id.parse::<MenuKind>() {
            Ok(kind) => self.display_menu(kind, trigger, ctx),
            Err(err) => panic!("{err}: caller asked for a menu type this controller never registered"),
        }
    }

    /// Explicitly set visibility, or flip it when `explicit` is `None`;
    /// syncs the panel's display so hidden is visually absent.
    pub fn toggle_visibility(&mut self, explicit: Option<bool>) {
        self.visible = explicit.unwrap_or(!self.visible);
        self.panel.set_display(self.visible);
    }

    /// Arbitrate one global event into close / stay-open / delegate.
    pub fn handle_event(&mut self, event: UiEvent, ctx: &mut MenuContext<'_>) {
        match event {
            // A pointer-down outside the panel pre-empts the rest of the
            // gesture: the menu is already closed when its up arrives.
            UiEvent::PointerDown(pointer) => {
                if !self.panel.contains(pointer.position) {
                    self.toggle_visibility(Some(false));
                }
            }
            UiEvent::PointerUp(pointer) => {
                if !self.visible || !self.panel.contains(pointer.position) {
                    return;
                }
                let Some(active) = self.active.as_mut() else {
                    return;
                };
                if active.behavior().handle_interaction(&pointer, &self.panel, ctx) {
                    self.toggle_visibility(Some(false));
                }
            }
            UiEvent::KeyDown(key) => {
                if key == Key::Escape {
                    self.toggle_visibility(Some(false));
                }
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Kind of the currently active menu, if any was ever displayed.
    pub fn active_kind(&self) -> Option<MenuKind> {
        self.active.as_ref().map(ActiveMenu::kind)
    }

    pub fn panel(&self) -> &MenuPanel {
        &self.panel
    }
}
