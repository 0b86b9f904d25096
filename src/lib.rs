//! Foodgram Pages
//!
//! Static informational pages for the Foodgram recipe site.
//!
//! - `content`: the page content data set (text, links, metadata)
//! - `render`: turns content into a render tree (head metadata + body)
//! - `web/`: Askama HTML view over the render tree (feature `api`)
//! - `api_server`: Axum router, state and error mapping (feature `api`)

pub mod config;
pub mod content;
pub mod error;
pub mod render;

#[cfg(feature = "api")]
pub mod web;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::ServerConfig;
pub use content::{Link, PageContent, Paragraph, Placement, Section};
pub use error::{ConfigError, ContentError};
pub use render::{DocumentHead, MetaAttribute, MetaTag, PageBody, PageRenderer, RenderTree};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
