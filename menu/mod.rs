/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Concrete menu types and the contract they satisfy.
//!
//! The controller selects a [`MenuKind`], holds exactly one [`ActiveMenu`]
//! variant, and talks to it only through [`MenuBehavior`]. Each variant owns
//! its own transient state (the target element remembered at open time);
//! reassignment on the next `display_menu` discards it.

pub mod annotation;
pub mod icon_palette;
pub mod reaction;

use std::fmt;
use std::str::FromStr;

use crate::collab::MenuContext;
use crate::input::{MenuTrigger, PointerInput};
use crate::surface::MenuPanel;

use annotation::AnnotationMenu;
use reaction::ReactionMenu;

/// Tag identifying which concrete menu type a trigger asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Annotation,
    Reaction,
}

impl MenuKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Annotation => "ANNOTATION",
            Self::Reaction => "REACTION",
        }
    }
}

/// A string id that names no registered menu type. This is an integration
/// defect, not a runtime condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMenuType(pub String);

impl fmt::Display for UnknownMenuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown context menu type {:?}", self.0)
    }
}

impl std::error::Error for UnknownMenuType {}

impl FromStr for MenuKind {
    type Err = UnknownMenuType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANNOTATION" => Ok(Self::Annotation),
            "REACTION" => Ok(Self::Reaction),
            other => Err(UnknownMenuType(other.to_string())),
        }
    }
}

/// Capability set every concrete menu type implements.
pub(crate) trait MenuBehavior {
    /// Resolve the target element, render into the panel, and position it at
    /// the trigger's screen coordinates. On resolution failure this surfaces
    /// a diagnostic and leaves the menu unable to produce an element.
    fn init(&mut self, trigger: &mut MenuTrigger, panel: &mut MenuPanel, ctx: &mut MenuContext<'_>);

    /// React to a pointer-up that landed inside the panel. Returns `true`
    /// when the interaction committed an action and the menu should close.
    fn handle_interaction(
        &mut self,
        pointer: &PointerInput,
        panel: &MenuPanel,
        ctx: &mut MenuContext<'_>,
    ) -> bool;
}

/// The one live menu instance, dispatched through [`MenuBehavior`].
pub(crate) enum ActiveMenu {
    Annotation(AnnotationMenu),
    Reaction(ReactionMenu),
}

impl ActiveMenu {
    pub(crate) fn for_kind(kind: MenuKind) -> Self {
        match kind {
            MenuKind::Annotation => Self::Annotation(AnnotationMenu::new()),
            MenuKind::Reaction => Self::Reaction(ReactionMenu::new()),
        }
    }

    pub(crate) fn kind(&self) -> MenuKind {
        match self {
            Self::Annotation(_) => MenuKind::Annotation,
            Self::Reaction(_) => MenuKind::Reaction,
        }
    }

    pub(crate) fn behavior(&mut self) -> &mut dyn MenuBehavior {
        match self {
            Self::Annotation(menu) => menu,
            Self::Reaction(menu) => menu,
        }
    }
}
