//! Normalizer tests.
//!
//! Each pass on realistic pasted markup, plus the pipeline as a whole.

use slate_html::{Diagnostics, Warning, normalize, normalize_with};

fn normalize_collect(html: &str) -> (String, Vec<Warning>) {
    let mut diag = Diagnostics::new();
    let out = normalize_with(html, &mut diag);
    (out, diag.take())
}

// ============================================================================
// Newlines
// ============================================================================

#[test]
fn test_newlines_kept_only_in_pre() {
    // The parser drops the newline directly after <pre>, as browsers do.
    assert_eq!(
        normalize("<p>\n</p><pre>\nline1\nline2\n</pre>"),
        "<p></p><pre>line1\nline2\n</pre>"
    );
}

#[test]
fn test_nested_pre_newlines() {
    let (out, warnings) = normalize_collect("<pre>a\n<pre>b\nc</pre>\nd</pre>\n<p>\ne</p>");
    assert!(warnings.is_empty());
    assert!(out.ends_with("<p>e</p>"), "{out}");
    assert!(out.contains("b\nc"), "{out}");
}

#[test]
fn test_unbalanced_pre_warns_and_keeps_newlines() {
    let (out, warnings) = normalize_collect("<p>a\nb</p><pre>x");
    assert_eq!(warnings, [Warning::UnbalancedPre]);
    assert!(out.starts_with("<p>a\nb</p>"), "{out}");
}

// ============================================================================
// Trailing <br>, empty paragraphs, spaces
// ============================================================================

#[test]
fn test_trailing_br_removed() {
    assert_eq!(normalize("<p>line<br></p>"), "<p>line</p>");
    assert_eq!(normalize("<p><br></p>"), "<p><br></p>");
}

#[test]
fn test_three_empty_paragraphs_collapse() {
    assert_eq!(normalize("<p></p><p></p><p></p>"), "<p></p>");
}

#[test]
fn test_trailing_empty_paragraph_run_collapses() {
    assert_eq!(normalize("<p>a</p><p></p><p></p>"), "<p>a</p><p></p>");
}

#[test]
fn test_space_only_text_removed_from_blocks() {
    assert_eq!(
        normalize("<ul> <li>a</li>  <li>b</li> </ul>"),
        "<ul><li>a</li><li>b</li></ul>"
    );
    assert_eq!(normalize("<p>a <b>b</b></p>"), "<p>a <b>b</b></p>");
}

// ============================================================================
// Hoisting and wrapping
// ============================================================================

#[test]
fn test_block_hoisted_out_of_link() {
    assert_eq!(
        normalize(r#"<a href="x">before<img src="y"/>after</a>"#),
        r#"<a href="x">before</a><img src="y"><a href="x">after</a>"#
    );
}

#[test]
fn test_hoisted_link_keeps_all_attributes() {
    assert_eq!(
        normalize(r#"<p><a href="x" target="_blank">t<img src="y"></a></p>"#),
        r#"<p><a href="x" target="_blank">t</a></p><img src="y">"#
    );
}

#[test]
fn test_list_item_split() {
    assert_eq!(
        normalize("<ul><li><a>123</a>234<blockquote>345</blockquote></li></ul>"),
        "<ul><li><a>123</a>234</li><blockquote>345</blockquote></ul>"
    );
}

#[test]
fn test_blockquote_split() {
    assert_eq!(
        normalize(r#"<blockquote><img src="x">quote<img src="y">more</blockquote>"#),
        r#"<blockquote><img src="x"></blockquote><p>quote</p><img src="y"><p>more</p>"#
    );
}

#[test]
fn test_heading_split() {
    assert_eq!(
        normalize(r#"<h4>intro<img src="x">title</h4>"#),
        r#"<p>intro</p><img src="x"><h4>title</h4>"#
    );
}

#[test]
fn test_list_item_split_drops_mark_around_quote() {
    assert_eq!(
        normalize(r#"<ul><li><img src="x"><b><blockquote>q</blockquote></b></li></ul>"#),
        r#"<ul><li><img src="x"></li><blockquote>q</blockquote></ul>"#
    );
}

#[test]
fn test_paragraph_split_through_marks() {
    assert_eq!(
        normalize(r#"<p><b>bold</b><i><img src="x"></i>tail</p>"#),
        r#"<p><b>bold</b></p><img src="x"><p>tail</p>"#
    );
}

#[test]
fn test_mixed_mark_warns() {
    let html = r#"<p>a<i>b<img src="x"></i></p>"#;
    let (out, warnings) = normalize_collect(html);
    assert_eq!(out, html);
    assert_eq!(warnings, [Warning::MixedMarkContent { tag: "i".into() }]);
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_pasted_document() {
    // Indentation between the <div> children is not inside a block, so it
    // stays, and it also keeps the two empty paragraphs from being adjacent.
    let html = "<div>\n  <p>Hello <b>world</b><br></p>\n  <p></p>\n  <p></p>\n  \
                <ul>\n    <li>one</li>\n    <li>two<img src=\"i\"></li>\n  </ul>\n</div>";
    assert_eq!(
        normalize(html),
        concat!(
            "<div>  <p>Hello <b>world</b></p>  <p></p>  <p></p>  ",
            r#"<ul><li>one</li><li>two</li><img src="i"></ul></div>"#
        )
    );
}

#[test]
fn test_idempotent_on_examples() {
    for html in [
        "<p>\n</p><pre>\nline1\nline2\n</pre>",
        "<p></p><p></p><p></p>",
        r#"<a href="x">before<img src="y"/>after</a>"#,
        "<ul><li><a>123</a>234<blockquote>345</blockquote></li></ul>",
        r#"<h4>intro<img src="x">title</h4>"#,
        r#"<p><b>bold</b><i><img src="x"></i>tail</p>"#,
        r#"<p>a<i>b<img src="x"></i></p>"#,
    ] {
        let once = normalize(html);
        assert_eq!(normalize(&once), once, "input: {html}");
    }
}

#[test]
fn test_never_panics_on_garbage() {
    for html in ["<", "</p></p></pre>", "<a><a><a>", "<<<>>>", "<pre", "\u{0}"] {
        let _ = normalize(html);
    }
}
