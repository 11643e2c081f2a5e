//! Markdown-to-HTML conversion by regex substitution.
//!
//! Deliberately not a real parser: the blog renders author-written content,
//! and a fixed substitution list is all it needs. Line-anchored rules run
//! before the newline conversion so they can still see line boundaries.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref H6: Regex = Regex::new(r"(?m)^#{6}\s+(.*)$").unwrap();
    static ref H5: Regex = Regex::new(r"(?m)^#{5}\s+(.*)$").unwrap();
    static ref H4: Regex = Regex::new(r"(?m)^#{4}\s+(.*)$").unwrap();
    static ref H3: Regex = Regex::new(r"(?m)^#{3}\s+(.*)$").unwrap();
    static ref H2: Regex = Regex::new(r"(?m)^#{2}\s+(.*)$").unwrap();
    static ref H1: Regex = Regex::new(r"(?m)^#\s+(.*)$").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*(.*?)\*").unwrap();
    static ref CODE: Regex = Regex::new(r"`(.*?)`").unwrap();
    static ref LINK: Regex = Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"(?m)^- (.*)$").unwrap();
}

/// Convert a post's markdown source into display HTML.
pub fn render_markdown(content: &str) -> String {
    let mut html = content.to_string();

    html = H6
        .replace_all(
            &html,
            r#"<h6 class="text-base font-bold text-gray-900 dark:text-white mt-4 mb-2">$1</h6>"#,
        )
        .to_string();
    html = H5
        .replace_all(
            &html,
            r#"<h5 class="text-lg font-bold text-gray-900 dark:text-white mt-4 mb-2">$1</h5>"#,
        )
        .to_string();
    html = H4
        .replace_all(
            &html,
            r#"<h4 class="text-xl font-bold text-gray-900 dark:text-white mt-4 mb-2">$1</h4>"#,
        )
        .to_string();
    html = H3
        .replace_all(
            &html,
            r#"<h3 class="text-2xl font-bold text-gray-900 dark:text-white mt-6 mb-3">$1</h3>"#,
        )
        .to_string();
    html = H2
        .replace_all(
            &html,
            r#"<h2 class="text-3xl font-bold text-gray-900 dark:text-white mt-8 mb-4">$1</h2>"#,
        )
        .to_string();
    html = H1
        .replace_all(
            &html,
            r#"<h1 class="text-4xl font-bold text-gray-900 dark:text-white mt-8 mb-4">$1</h1>"#,
        )
        .to_string();
    html = BOLD
        .replace_all(&html, r#"<strong class="font-bold">$1</strong>"#)
        .to_string();
    html = ITALIC
        .replace_all(&html, r#"<em class="italic">$1</em>"#)
        .to_string();
    html = CODE
        .replace_all(
            &html,
            r#"<code class="bg-gray-100 dark:bg-gray-700 px-2 py-1 rounded text-sm">$1</code>"#,
        )
        .to_string();
    html = LINK
        .replace_all(
            &html,
            r#"<a href="$2" class="text-blue-600 dark:text-blue-400 hover:underline">$1</a>"#,
        )
        .to_string();
    html = LIST_ITEM
        .replace_all(&html, r#"<li class="ml-4">• $1</li>"#)
        .to_string();

    html.replace('\n', "<br />")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_by_level() {
        let html = render_markdown("# Top\n## Section\n###### Fine print");
        assert!(html.contains(">Top</h1>"));
        assert!(html.contains(">Section</h2>"));
        assert!(html.contains(">Fine print</h6>"));
    }

    #[test]
    fn heading_stops_at_the_end_of_its_line() {
        let html = render_markdown("# Title\nBody text");
        assert!(html.contains(">Title</h1>"));
        assert!(!html.contains("Body text</h1>"));
    }

    #[test]
    fn renders_inline_styles() {
        let html = render_markdown("**bold** and *italic* and `code`");
        assert!(html.contains(r#"<strong class="font-bold">bold</strong>"#));
        assert!(html.contains(r#"<em class="italic">italic</em>"#));
        assert!(html.contains(">code</code>"));
    }

    #[test]
    fn renders_links() {
        let html = render_markdown("[the docs](https://example.com/docs)");
        assert!(html.contains(r#"href="https://example.com/docs""#));
        assert!(html.contains(">the docs</a>"));
    }

    #[test]
    fn renders_list_items_with_bullets() {
        let html = render_markdown("- first\n- second");
        assert!(html.contains(r#"<li class="ml-4">• first</li>"#));
        assert!(html.contains(r#"<li class="ml-4">• second</li>"#));
    }

    #[test]
    fn converts_newlines_to_breaks() {
        let html = render_markdown("one\ntwo");
        assert_eq!(html, "one<br />two");
    }
}
