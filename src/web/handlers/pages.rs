// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::api_server::{AppError, AppState};
use crate::content::PageContent;
use crate::render::{PageRenderer, RenderTree};

// ============================================================================
// About Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub page: RenderTree,
}

/// Render content into a complete HTML document.
pub fn render_html(content: &PageContent) -> Result<String, askama::Error> {
    AboutTemplate {
        page: PageRenderer::render(content),
    }
    .render()
}

/// GET /about: render the About page as HTML.
pub async fn about_page(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let html = render_html(&state.content).map_err(|e| {
        tracing::error!("Template error: {}", e);
        AppError::Template(e.to_string())
    })?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html as Document, Selector};

    fn select<'a>(doc: &'a Document, css: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector).collect()
    }

    fn text_of(el: &scraper::ElementRef) -> String {
        el.text().collect::<String>().trim().to_string()
    }

    #[test]
    fn renders_head_metadata() {
        let html = render_html(&PageContent::about()).unwrap();
        let doc = Document::parse_document(&html);

        let titles = select(&doc, "head > title");
        assert_eq!(titles.len(), 1);
        assert_eq!(text_of(&titles[0]), "О проекте");

        let description = select(&doc, r#"meta[name="description"]"#);
        assert_eq!(description.len(), 1);
        assert_eq!(description[0].value().attr("content"), Some("Фудграм - О проекте"));

        let og_title = select(&doc, r#"meta[property="og:title"]"#);
        assert_eq!(og_title.len(), 1);
        assert_eq!(og_title[0].value().attr("content"), Some("О проекте"));
    }

    #[test]
    fn renders_markup_contract() {
        let html = render_html(&PageContent::about()).unwrap();
        let doc = Document::parse_document(&html);

        let headings = select(&doc, "h1");
        assert_eq!(headings.len(), 1);
        assert_eq!(text_of(&headings[0]), "Привет!");

        assert_eq!(select(&doc, ".content > div").len(), 1);
        assert_eq!(select(&doc, ".content > aside").len(), 1);
        assert_eq!(select(&doc, ".content > div p").len(), 3);
        assert_eq!(select(&doc, ".content > aside p").len(), 2);

        let anchors = select(&doc, ".content > aside a");
        assert_eq!(anchors.len(), 2);
        assert!(anchors.iter().all(|a| a.value().attr("href") == Some("#")));
        assert_eq!(text_of(&anchors[1]), "гитхаб");
        assert_eq!(select(&doc, "a").len(), 2);
    }

    #[test]
    fn escapes_content() {
        let mut content = PageContent::about();
        content.heading = "<script>alert(1)</script>".to_string();

        let html = render_html(&content).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn html_is_identical_across_renders() {
        let content = PageContent::about();
        assert_eq!(render_html(&content).unwrap(), render_html(&content).unwrap());
    }
}
