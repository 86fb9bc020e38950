//! Markdown to safe inline HTML.
//!
//! Raw HTML written in content files is escaped rather than passed through,
//! and links or images pointing at script-capable URL schemes are neutered.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:", "file:"];

pub fn markdown_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_SMART_PUNCTUATION
}

/// True for relative URLs and URLs whose scheme cannot execute script.
pub fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();
    !UNSAFE_SCHEMES.iter().any(|s| normalized.starts_with(s))
}

fn neuter(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: neuter(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: neuter(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

/// Render markdown to HTML that is safe to embed in a page.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options()).map(sanitize);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_formatting() {
        let html = render_html("Hello **world**\n\n- one\n- two\n");
        assert!(html.contains("<strong>world</strong>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_html("before <script>alert(1)</script> after");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn script_links_are_neutered() {
        let html = render_html("[click](javascript:alert(1)) and [ok](https://example.com)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("href=\"https://example.com\""));
    }

    #[test]
    fn url_safety() {
        assert!(is_safe_url("/photos/me.jpg"));
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("mailto:me@example.com"));
        assert!(!is_safe_url(" JavaScript:alert(1)"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
        assert!(!is_safe_url("data:text/html;base64,xx"));
    }
}
