//! Markdown content pages served from `/content`.

mod content;

pub use content::{content_path, BlogPage, DocsPage, LOAD_FAILURE_MARKDOWN};
