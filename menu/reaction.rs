/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Reaction-pick menu: choose a glyph to attach to the element under the
//! cursor and broadcast it to collaborators.

use log::warn;

use super::{MenuBehavior, icon_palette};
use crate::collab::MenuContext;
use crate::input::{MenuTrigger, PointerInput};
use crate::surface::MenuPanel;

pub(crate) struct ReactionMenu {
    /// Element resolved at open time; the menu refuses to emit without it.
    target_element: Option<String>,
}

impl ReactionMenu {
    pub(crate) fn new() -> Self {
        Self {
            target_element: None,
        }
    }
}

impl MenuBehavior for ReactionMenu {
    fn init(&mut self, trigger: &mut MenuTrigger, panel: &mut MenuPanel, ctx: &mut MenuContext<'_>) {
        // The gesture belongs to this menu now; the surface must not also
        // open its native context menu.
        trigger.suppress_default();

        self.target_element = ctx.resolver.element_under_cursor(trigger);
        panel.begin(trigger.pointer(), "Add a reaction");

        if self.target_element.is_none() {
            // Cannot proceed without knowing what is being reacted to; the
            // panel keeps no selectable cells, so nothing can be emitted.
            warn!("reaction menu opened with no element under the cursor");
            ctx.warn_user("Nothing under the cursor to react to");
            return;
        }

        icon_palette::render(panel);
    }

    fn handle_interaction(
        &mut self,
        pointer: &PointerInput,
        panel: &MenuPanel,
        ctx: &mut MenuContext<'_>,
    ) -> bool {
        let Some(target) = self.target_element.as_deref() else {
            return false;
        };
        icon_palette::select(pointer, panel, target, ctx)
    }
}
