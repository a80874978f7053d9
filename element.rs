/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Elements produced by a committed menu interaction.
//!
//! A [`ProducedElement`] is handed to the room-state and broadcast
//! collaborators at the moment of emission; this crate keeps no ownership of
//! it afterwards. The wire form uses camelCase field names, and only the
//! icon flavor carries an explicit `type` tag.

use serde::Serialize;

/// A free-floating annotation node anchored to a graph element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationElement {
    pub id: String,
    pub author: String,
    pub parent_element_id: String,
}

/// A reaction glyph attached to a graph element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconElement {
    pub id: String,
    /// Always `"icon"` on the wire.
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub author: String,
    pub parent_element_id: String,
    pub unicode: String,
}

/// Record emitted as the side effect of a completed menu interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProducedElement {
    Annotation(AnnotationElement),
    Icon(IconElement),
}

impl ProducedElement {
    pub fn annotation(id: String, author: String, parent_element_id: String) -> Self {
        Self::Annotation(AnnotationElement {
            id,
            author,
            parent_element_id,
        })
    }

    pub fn icon(id: String, author: String, parent_element_id: String, unicode: String) -> Self {
        Self::Icon(IconElement {
            id,
            kind: "icon",
            author,
            parent_element_id,
            unicode,
        })
    }

    /// Kind label used by the room-state append (`"annotation"` / `"icon"`).
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Annotation(_) => "annotation",
            Self::Icon(_) => "icon",
        }
    }

    pub fn parent_element_id(&self) -> &str {
        match self {
            Self::Annotation(el) => &el.parent_element_id,
            Self::Icon(el) => &el.parent_element_id,
        }
    }

    /// Room-state wire form. Serialization of these plain string records
    /// cannot fail.
    pub fn to_room_json(&self) -> String {
        serde_json::to_string(self).expect("ProducedElement serializes infallibly")
    }
}
