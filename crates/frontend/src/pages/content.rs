use crate::shared::api_utils::{api_url, get_text};
use crate::shared::markdown::render_markdown;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CONTENT;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Shown in place of a document that could not be fetched
pub const LOAD_FAILURE_MARKDOWN: &str = "# Error\n\nFailed to load documentation.";

pub fn content_path(name: &str) -> String {
    format!("/content/{}", urlencoding::encode(name))
}

#[component]
pub fn DocsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="docs--content" category=PAGE_CAT_CONTENT>
            <MarkdownDocument name="README.md" />
        </PageFrame>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <PageFrame page_id="blog--content" category=PAGE_CAT_CONTENT>
            <MarkdownDocument name="blog.md" />
        </PageFrame>
    }
}

/// Fetches `/content/{name}` once and renders it as HTML
#[component]
fn MarkdownDocument(name: &'static str) -> impl IntoView {
    let html = RwSignal::new(None::<String>);

    spawn_local(async move {
        let source = match get_text(&api_url(&content_path(name))).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("Failed to load {}: {}", name, e);
                LOAD_FAILURE_MARKDOWN.to_string()
            }
        };
        let rendered = render_markdown(&source, &api_url("/content"));
        html.try_set(Some(rendered));
    });

    view! {
        {move || match html.get() {
            Some(body) => view! { <article class="markdown-body" inner_html=body></article> }.into_any(),
            None => view! { <div class="page__placeholder">"Loading..."</div> }.into_any(),
        }}
    }
}
