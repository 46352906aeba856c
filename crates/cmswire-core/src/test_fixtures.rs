//! Content types shared by the unit tests.

use crate::types::Media;
use cmswire_derive::{ComponentUnion, Content};
use serde::{Deserialize, Serialize};

#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[content(collection = "articles")]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Article {
    pub(crate) id: Option<i64>,
    pub(crate) document_id: Option<String>,
    pub(crate) title: String,
    pub(crate) cover: Option<Media>,
    pub(crate) author: Option<Author>,
    pub(crate) blocks: Vec<Block>,
    pub(crate) created_at: Option<String>,
}

#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[content(collection = "authors")]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Author {
    pub(crate) document_id: Option<String>,
    pub(crate) name: String,
    pub(crate) avatar: Option<Media>,
    pub(crate) articles: Vec<Article>,
}

#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[content(collection = "categories")]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Category {
    pub(crate) document_id: Option<String>,
    pub(crate) name: String,
    pub(crate) parent: Option<Box<Category>>,
    pub(crate) audit: Option<Audit>,
}

#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[content(single = "homepage")]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Homepage {
    pub(crate) document_id: Option<String>,
    pub(crate) title: String,
    pub(crate) featured: Vec<Article>,
    pub(crate) seo: Option<Seo>,
}

#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[content(component = "rich-text")]
#[serde(default)]
pub(crate) struct RichText {
    pub(crate) id: Option<i64>,
    pub(crate) body: String,
}

#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[content(component = "quote")]
#[serde(default)]
pub(crate) struct Quote {
    pub(crate) id: Option<i64>,
    pub(crate) title: String,
    pub(crate) body: String,
}

#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[content(component = "media")]
#[serde(default)]
pub(crate) struct MediaBlock {
    pub(crate) file: Option<Media>,
}

#[derive(Clone, ComponentUnion, Debug, PartialEq)]
pub(crate) enum Block {
    RichText(RichText),
    Quote(Quote),
    MediaBlock(MediaBlock),
}

/// Opaque object reaching a media field.
#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Seo {
    pub(crate) meta_title: String,
    pub(crate) share_image: Option<Media>,
}

/// Opaque object with scalars only.
#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct Audit {
    pub(crate) note: String,
}

#[derive(Clone, Content, Debug, Default, Deserialize, PartialEq)]
#[content(collection = "posts")]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Post {
    pub(crate) document_id: Option<String>,
    pub(crate) title: String,
    pub(crate) author: Option<Author>,
    pub(crate) category: Option<Category>,
    pub(crate) cover: Option<Media>,
    #[content(skip_populate)]
    pub(crate) related: Vec<Post>,
    pub(crate) status: Status,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Status {
    #[default]
    Draft,
    Published,
}

impl_wire_scalar!(Status => Enum);
