//! Conversion of server-rendered post HTML into terminal text.
//!
//! Post bodies come from the single configured forum and are trusted
//! markup. A terminal cannot show markup, so block boundaries become line
//! breaks, all tags are dropped and entities are decoded.

use std::collections::HashSet;

/// Tags after which a line break is inserted.
const LINE_BREAKS: &[(&str, &str)] = &[
    ("</p>", "</p>\n\n"),
    ("<br>", "<br>\n"),
    ("<br/>", "<br/>\n"),
    ("<br />", "<br />\n"),
    ("</li>", "</li>\n"),
    ("<li>", "<li>• "),
    ("</h1>", "</h1>\n\n"),
    ("</h2>", "</h2>\n\n"),
    ("</h3>", "</h3>\n\n"),
    ("</h4>", "</h4>\n\n"),
    ("</blockquote>", "</blockquote>\n\n"),
    ("</pre>", "</pre>\n\n"),
    ("</div>", "</div>\n"),
    ("<hr>", "<hr>\n"),
];

/// Plain text rendition of a post body.
pub fn to_terminal_text(html: &str) -> String {
    let mut marked = html.to_string();
    for (tag, replacement) in LINE_BREAKS {
        marked = marked.replace(tag, replacement);
    }

    let stripped = ammonia::Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(&marked)
        .to_string();
    let decoded = html_escape::decode_html_entities(&stripped);

    collapse_blank_lines(&decoded)
}

/// Trailing whitespace removed per line, at most one blank line in a row.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_blank_line_separated() {
        let text = to_terminal_text("<p>Hello</p><p>World</p>");
        assert_eq!(text, "Hello\n\nWorld");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(to_terminal_text("<p>a &lt; b &amp;&amp; c</p>"), "a < b && c");
    }

    #[test]
    fn test_links_keep_their_text() {
        let text = to_terminal_text(r#"<p>See <a href="https://example.org">the docs</a>.</p>"#);
        assert_eq!(text, "See the docs.");
    }

    #[test]
    fn test_list_items_are_bulleted() {
        let text = to_terminal_text("<ul><li>one</li><li>two</li></ul>");
        assert_eq!(text, "• one\n• two");
    }

    #[test]
    fn test_script_content_dropped() {
        let text = to_terminal_text("<p>ok</p><script>alert(1)</script>");
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(to_terminal_text(""), "");
    }
}
