//! Markdown to HTML for the documentation pages.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Render markdown to HTML. Relative image sources are resolved against
/// `asset_base` (the backend content directory). Raw HTML in the source is
/// emitted as escaped text.
pub fn render_markdown(source: &str, asset_base: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: resolve_asset(dest_url, asset_base),
            title,
            id,
        }),
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn resolve_asset<'a>(src: CowStr<'a>, asset_base: &str) -> CowStr<'a> {
    if src.starts_with("data:") || src.starts_with("http://") || src.starts_with("https://") {
        return src;
    }
    CowStr::from(format!(
        "{}/{}",
        asset_base.trim_end_matches('/'),
        src.trim_start_matches("./")
    ))
}
