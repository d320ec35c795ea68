//! Post Content Markdown
//!
//! Renders post bodies with pulldown-cmark. Raw HTML in a post is shown as
//! text rather than injected into the page.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render post content to HTML
pub fn render_post_content(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(render_post_content("Hello there."), "<p>Hello there.</p>\n");
    }

    #[test]
    fn test_emphasis_and_code() {
        let html = render_post_content("**bold** and `wasm32`");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<code>wasm32</code>"));
    }

    #[test]
    fn test_inline_html_is_escaped() {
        let html = render_post_content("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_block_html_is_escaped() {
        let html = render_post_content("<div onclick=\"x()\">boo</div>\n");
        assert!(!html.contains("<div"));
    }

    #[test]
    fn test_strikethrough() {
        assert!(render_post_content("~~old~~").contains("<del>old</del>"));
    }
}
