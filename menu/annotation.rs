/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Annotation-spawn menu: anchors a free-floating annotation node to the
//! element under the cursor at open time, no further interaction required.

use log::{debug, warn};

use super::{MenuBehavior, icon_palette};
use crate::collab::MenuContext;
use crate::element::ProducedElement;
use crate::input::{MenuTrigger, PointerInput};
use crate::surface::MenuPanel;

pub(crate) struct AnnotationMenu {
    target_element: Option<String>,
}

impl AnnotationMenu {
    pub(crate) fn new() -> Self {
        Self {
            target_element: None,
        }
    }
}

impl MenuBehavior for AnnotationMenu {
    fn init(&mut self, trigger: &mut MenuTrigger, panel: &mut MenuPanel, ctx: &mut MenuContext<'_>) {
        self.target_element = ctx.resolver.element_under_cursor(trigger);
        panel.begin(trigger.pointer(), "Annotation");

        let Some(target) = self.target_element.clone() else {
            warn!("annotation menu opened with no element under the cursor");
            ctx.warn_user("Nothing under the cursor to annotate");
            return;
        };

        // Spawn happens synchronously at open time; the annotation node goes
        // to room state only, remote peers pick it up from there.
        let element = ProducedElement::annotation(
            ctx.identity.mint_id("annotationNode"),
            ctx.identity.author_id(),
            target,
        );
        debug!("annotation spawned under {}", element.parent_element_id());
        ctx.room.append(element.kind_label(), &element.to_room_json());

        // The spawned annotation offers the same glyph palette as the
        // reaction menu for an optional follow-up reaction.
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
