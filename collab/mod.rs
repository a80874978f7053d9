/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Collaborator contracts the menu core depends on.
//!
//! The graph surface, room state, real-time transport, and identity utilities
//! are externally owned; the core only ever sees them through these traits,
//! bundled into a [`MenuContext`] that is threaded through every handler.
//! Both sinks are fire-and-forget from the core's perspective: partial
//! fan-out failure is the collaborators' concern, never detected or rolled
//! back here.

use log::warn;
use time::OffsetDateTime;

use crate::element::ProducedElement;
use crate::input::MenuTrigger;

/// Maps a screen-space trigger to the graph element beneath it.
pub trait TargetResolver {
    fn element_under_cursor(&self, trigger: &MenuTrigger) -> Option<String>;
}

/// Durably records a locally produced element. Assumed to succeed or to
/// handle its own retries; no return value is observed by the core.
pub trait RoomStateSink {
    fn append(&mut self, kind: &str, serialized: &str);
}

/// Pushes an element to real-time collaborators.
pub trait BroadcastSink {
    fn send(&mut self, kind: &str, element: &ProducedElement);
}

/// Identity/clock utilities; no side effects visible to the core beyond the
/// returned values.
pub trait IdentityProvider {
    /// Mint a fresh element id. `tag` names the element flavor so ids minted
    /// within the same clock tick stay distinguishable.
    fn mint_id(&self, tag: &str) -> String;
    fn author_id(&self) -> String;
}

/// Surfaces a blocking diagnostic to the user.
pub trait DiagnosticSink {
    fn user_warning(&mut self, message: &str);
}

/// Injected collaborator bundle threaded through menu init and interaction
/// handling.
pub struct MenuContext<'a> {
    pub resolver: &'a dyn TargetResolver,
    pub room: &'a mut dyn RoomStateSink,
    pub broadcast: &'a mut dyn BroadcastSink,
    pub identity: &'a dyn IdentityProvider,
    pub diagnostics: &'a mut dyn DiagnosticSink,
}

impl MenuContext<'_> {
    pub(crate) fn warn_user(&mut self, message: &str) {
        self.diagnostics.user_warning(message);
    }
}

/// Production identity source: ids are `<unix-seconds>_<author><tag>`.
pub struct WallClockIdentity {
    author: String,
}

impl WallClockIdentity {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }
}

impl IdentityProvider for WallClockIdentity {
    fn mint_id(&self, tag: &str) -> String {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        format!("{now}_{}{tag}", self.author)
    }

    fn author_id(&self) -> String {
        self.author.clone()
    }
}

/// Default diagnostic sink: routes user warnings to the log.
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn user_warning(&mut self, message: &str) {
        warn!("context menu: {message}");
    }
}
