//! Page renderer
//!
//! Turns [`PageContent`] into a [`RenderTree`]: a document head metadata
//! block plus a body made of a heading and a content region with main and
//! aside subsections. Rendering is a single synchronous pass with no
//! conditional branches on input, so every call yields the same tree.

use serde::Serialize;

use crate::content::{PageContent, Placement, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaAttribute {
    Name,
    Property,
}

impl MetaAttribute {
    /// HTML attribute carrying the meta key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAttribute::Name => "name",
            MetaAttribute::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub attribute: MetaAttribute,
    pub key: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentHead {
    pub title: String,
    pub meta: Vec<MetaTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageBody {
    pub heading: String,
    pub main: Vec<Section>,
    pub aside: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    pub head: DocumentHead,
    pub body: PageBody,
}

/// Stateless renderer for static informational pages.
pub struct PageRenderer;

impl PageRenderer {
    pub fn render(content: &PageContent) -> RenderTree {
        let head = DocumentHead {
            title: content.title.clone(),
            meta: vec![
                MetaTag {
                    attribute: MetaAttribute::Name,
                    key: "description".to_string(),
                    content: content.meta_description.clone(),
                },
                MetaTag {
                    attribute: MetaAttribute::Property,
                    key: "og:title".to_string(),
                    content: content.title.clone(),
                },
            ],
        };

        let body = PageBody {
            heading: content.heading.clone(),
            main: content.sections_in(Placement::Main).cloned().collect(),
            aside: content.sections_in(Placement::Aside).cloned().collect(),
        };

        RenderTree { head, body }
    }
}

impl RenderTree {
    /// Number of subsections in the content region.
    pub fn subsection_count(&self) -> usize {
        self.body.main.len() + self.body.aside.len()
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.head
            .meta
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.content.as_str())
    }
}
