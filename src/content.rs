// Page content for the About page
//
// Purpose: Keep page text, links and metadata apart from markup so the
// content can be swapped or localized without touching templates.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

// ============================================================================
// Types
// ============================================================================

/// Where a section is placed inside the page's content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Main,
    Aside,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// A paragraph of text, optionally followed by a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl Paragraph {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn with_link(text: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(Link {
                label: label.into(),
                href: href.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub placement: Placement,
    pub subtitle: String,
    pub paragraphs: Vec<Paragraph>,
}

/// Complete content of a static informational page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Document `<title>`, also emitted as `og:title`
    pub title: String,
    pub meta_description: String,
    pub heading: String,
    pub sections: Vec<Section>,
}

// ============================================================================
// Built-in content
// ============================================================================

const PLACEHOLDER_HREF: &str = "#";

impl PageContent {
    /// The Foodgram "About the project" page.
    pub fn about() -> Self {
        Self {
            title: "О проекте".to_string(),
            meta_description: "Фудграм - О проекте".to_string(),
            heading: "Привет!".to_string(),
            sections: vec![
                Section {
                    placement: Placement::Main,
                    subtitle: "Что это за сайт?".to_string(),
                    paragraphs: vec![
                        Paragraph::text(
                            "Это выпускной проект Яндекс Практикума. Хоть он и являлся частью курса, \
                             создавался он без какой‑либо помощи.",
                        ),
                        Paragraph::text(
                            "Сутью проекта является создание и хранение рецептов на портале. \
                             Дополнительно можно скачать список продуотов для покупки, следить за \
                             рецептами друзей и сохранять рецепты в список любимых.",
                        ),
                        Paragraph::text(
                            "Создавайте аккаунт, хоть там и требуется почта, можете написать какой \
                             хотите, проверки не будет:) Кликайте кнопки, заливайте свои рецепты",
                        ),
                    ],
                },
                Section {
                    placement: Placement::Aside,
                    subtitle: "Ссылки".to_string(),
                    paragraphs: vec![
                        Paragraph::with_link(
                            "Код проекта находится вот тут",
                            "https://gitgub.com/Contrigra/foodgram-project",
                            PLACEHOLDER_HREF,
                        ),
                        Paragraph::with_link("И подписывайтесь на мой", "гитхаб", PLACEHOLDER_HREF),
                    ],
                },
            ],
        }
    }

    /// Load content from a JSON file with the same shape as [`PageContent`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content: Self = serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            "Loaded page content from {} ({} sections)",
            path.display(),
            content.sections.len()
        );
        Ok(content)
    }

    /// All links in section order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.sections
            .iter()
            .flat_map(|s| s.paragraphs.iter())
            .filter_map(|p| p.link.as_ref())
    }

    pub fn sections_in(&self, placement: Placement) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.placement == placement)
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self::about()
    }
}
