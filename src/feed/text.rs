//! Post body formatting: excerpts, paragraphs, and URL linkification.

/// Truncate at a word boundary and append an ellipsis when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(pos) if pos > 0 => format!("{}...", &cut[..pos]),
        _ => format!("{}...", cut),
    }
}

/// Render a post body as HTML: blank-line-delimited paragraphs, embedded
/// URLs turned into anchors, everything else escaped.
pub fn body_html(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", linkify(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape a paragraph and wrap http(s) URLs in anchor tags.
fn linkify(paragraph: &str) -> String {
    let mut out = String::with_capacity(paragraph.len());
    let mut rest = paragraph;

    while let Some(start) = find_url_start(rest) {
        out.push_str(&escape(&rest[..start]));
        let tail = &rest[start..];
        let end = tail
            .find(char::is_whitespace)
            .unwrap_or(tail.len());
        let url = &tail[..end];
        out.push_str(&format!(
            "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>",
            href = escape(url),
            label = escape(url)
        ));
        rest = &tail[end..];
    }
    out.push_str(&escape(rest));
    out
}

fn find_url_start(text: &str) -> Option<usize> {
    let http = text.find("http://");
    let https = text.find("https://");
    match (http, https) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("hello world", 120), "hello world");
    }

    #[test]
    fn truncation_prefers_word_boundaries() {
        assert_eq!(truncate("the quick brown fox", 12), "the quick...");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // Cyrillic text would panic on a byte slice at an odd index.
        let text = "Грантові можливості для громади та партнерів";
        let cut = truncate(text, 20);
        assert!(cut.ends_with("..."));
        assert!(cut.chars().count() <= 23);
    }

    #[test]
    fn body_splits_on_blank_lines() {
        let html = body_html("first para\n\nsecond para");
        assert_eq!(html, "<p>first para</p>\n<p>second para</p>");
    }

    #[test]
    fn body_skips_empty_paragraphs() {
        let html = body_html("one\n\n\n\n  \n\ntwo");
        assert_eq!(html, "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn urls_become_anchors() {
        let html = body_html("see https://example.org/x for details");
        assert!(html.contains("<a href=\"https://example.org/x\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn markup_in_posts_is_escaped() {
        let html = body_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
