use crate::{
    model::FieldKind,
    traits::WireField,
    wire::WireNode,
    write::{self, WriteError},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Media
///
/// Reference to an uploaded file.
///
/// Read responses carry the whole record; on write only the numeric `id`
/// is ever sent, and a missing or non-positive id writes as `null`.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Media {
    pub id: Option<i64>,
    pub document_id: Option<String>,
    pub name: Option<String>,
    pub alternative_text: Option<String>,
    pub caption: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub formats: Option<BTreeMap<String, MediaFormat>>,
    pub hash: Option<String>,
    pub ext: Option<String>,
    pub mime: Option<String>,
    /// Size in kilobytes, as reported by the server.
    pub size: Option<f64>,
    pub url: Option<String>,
    pub preview_url: Option<String>,
    pub provider: Option<String>,
}

impl Media {
    /// Reference an existing upload by id.
    #[must_use]
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// The id to send on write, if it identifies an upload.
    #[must_use]
    pub fn wire_id(&self) -> Option<i64> {
        self.id.filter(|id| *id > 0)
    }
}

impl WireField for Media {
    fn kind() -> FieldKind {
        FieldKind::Media
    }

    fn to_wire(&self) -> Result<WireNode, WriteError> {
        Ok(write::media_id(self))
    }
}

///
/// MediaFormat
/// One server-generated rendition of an image (thumbnail, small, ...).
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaFormat {
    pub name: Option<String>,
    pub hash: Option<String>,
    pub ext: Option<String>,
    pub mime: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size: Option<f64>,
    pub url: Option<String>,
}

///
/// TESTS
///
