pub mod pages;

pub use pages::{about_page, render_html, AboutTemplate};
