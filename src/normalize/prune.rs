//! Passes 2 and 3: drop a trailing `<br>` and collapse runs of empty `<p>`.

use crate::dom::{ArenaDom, ArenaNodeId};

/// Remove the last child of `id` if it is a `<br>` and `id` has at least two
/// children.
///
/// Returns whether a `<br>` was removed.
pub fn drop_trailing_br(dom: &mut ArenaDom, id: ArenaNodeId) -> bool {
    let children = dom.children(id);
    if children.len() < 2 {
        return false;
    }
    let last = children[children.len() - 1];
    if dom.tag_name(last) != Some("br") {
        return false;
    }
    dom.detach(last);
    true
}

/// An empty paragraph: no children, or a single empty text child.
fn is_empty_paragraph(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    if dom.tag_name(id) != Some("p") {
        return false;
    }
    match dom.children(id) {
        [] => true,
        [only] => dom.text_content(*only) == Some(""),
        _ => false,
    }
}

/// In every run of two or more consecutive empty `<p>` children of `id`,
/// remove all but the last one.
///
/// Returns how many paragraphs were removed.
pub fn collapse_empty_paragraphs(dom: &mut ArenaDom, id: ArenaNodeId) -> usize {
    let doomed: Vec<ArenaNodeId> = dom
        .children(id)
        .windows(2)
        .filter(|pair| is_empty_paragraph(dom, pair[0]) && is_empty_paragraph(dom, pair[1]))
        .map(|pair| pair[0])
        .collect();

    for &node in &doomed {
        dom.detach(node);
    }
    doomed.len()
}
