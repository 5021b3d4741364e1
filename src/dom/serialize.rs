//! `innerHTML`-style serialization of arena subtrees.

use std::fmt::Write;

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};

/// Elements that never have an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children are emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style",
    "script",
    "xmp",
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
];

/// Serialize the children of `id`, like reading `element.innerHTML`.
pub fn inner_html(dom: &ArenaDom, id: ArenaNodeId) -> String {
    let mut out = String::new();
    let raw = dom.tag_name(id).is_some_and(|t| RAW_TEXT_ELEMENTS.contains(&t));
    for &child in dom.children(id) {
        write_node(dom, child, raw, &mut out);
    }
    out
}

fn write_node(dom: &ArenaDom, id: ArenaNodeId, raw_text: bool, out: &mut String) {
    let Some(node) = dom.get(id) else {
        return;
    };

    match &node.data {
        ArenaNodeData::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                out.push_str(&escape_text(text));
            }
        }
        ArenaNodeData::Comment(text) => {
            write!(out, "<!--{text}-->").unwrap();
        }
        ArenaNodeData::Element { name, attrs } => {
            let tag: &str = &name.local;
            out.push('<');
            out.push_str(tag);
            for attr in attrs {
                out.push(' ');
                if let Some(prefix) = &attr.name.prefix {
                    write!(out, "{}:", &**prefix).unwrap();
                }
                write!(out, "{}=\"{}\"", &*attr.name.local, escape_attr(&attr.value)).unwrap();
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }

            // The parser drops one newline right after these start tags, so a
            // leading newline in the content has to be doubled to survive.
            if matches!(tag, "pre" | "textarea" | "listing")
                && node
                    .children
                    .first()
                    .and_then(|&c| dom.text_content(c))
                    .is_some_and(|t| t.starts_with('\n'))
            {
                out.push('\n');
            }

            out.push_str(&inner_html(dom, id));
            write!(out, "</{tag}>").unwrap();
        }
        ArenaNodeData::Document | ArenaNodeData::Doctype => {
            for &child in &node.children {
                write_node(dom, child, false, out);
            }
        }
    }
}

/// Escape text content (`&`, `<`, `>`, no-break space).
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a double-quoted attribute value (`&`, `"`, no-break space).
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::super::parse_html;
    use super::*;

    fn body_html(html: &str) -> String {
        let dom = parse_html(html);
        inner_html(&dom, dom.body().unwrap())
    }

    #[test]
    fn test_void_elements_have_no_end_tag() {
        assert_eq!(
            body_html(r#"<p>a<br/>b</p><img src="x.png" alt="y"/>"#),
            r#"<p>a<br>b</p><img src="x.png" alt="y">"#
        );
    }

    #[test]
    fn test_text_and_attr_escaping() {
        assert_eq!(
            body_html(r#"<a href="?a=1&amp;b=&quot;2&quot;">1 &lt; 2 &amp; 3</a>"#),
            r#"<a href="?a=1&amp;b=&quot;2&quot;">1 &lt; 2 &amp; 3</a>"#
        );
    }

    #[test]
    fn test_pre_leading_newline_survives() {
        let once = body_html("<pre>\n\nx</pre>");
        assert_eq!(once, "<pre>\n\nx</pre>");
        assert_eq!(body_html(&once), once);
    }

    #[test]
    fn test_iframe_content_is_raw() {
        assert_eq!(
            body_html(r#"<iframe src="s">a&amp;b</iframe>"#),
            r#"<iframe src="s">a&amp;b</iframe>"#
        );
    }

    #[test]
    fn test_comments_round_trip() {
        assert_eq!(body_html("<p><!-- hi -->x</p>"), "<p><!-- hi -->x</p>");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Hello"), "Hello");
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
        assert_eq!(escape_text("a & b"), "a &amp; b");
        assert_eq!(escape_text(r#"Say "hi""#), r#"Say "hi""#);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"Say "hi""#), "Say &quot;hi&quot;");
        assert_eq!(escape_attr("<b>"), "<b>");
    }
}
