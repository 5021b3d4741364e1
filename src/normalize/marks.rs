//! Pass 8: split `p`/`pre` elements that mix blocks and text, looking through
//! `b`/`i` marks.
//!
//! A mark around block content is dissolved; the non-block runs on either
//! side are re-wrapped in `p` and in the marks they were found under.
//! `<p>a<b><img></b>c</p>` becomes `<p>a</p><img><p>c</p>`.
//!
//! A `p` built by the wrapping passes can also hold a mark around a block
//! such as `blockquote`, which would close the `p` when parsed again. That
//! mark is dissolved the same way even though nothing is mixed.
//!
//! A mark holding both text and blocks (`<p>a<b>b<img></b></p>`) is not
//! supported: the element is left as is and [`Warning::MixedMarkContent`]
//! is raised.

use crate::diagnostics::{Diagnostics, Warning};
use crate::dom::{ArenaDom, ArenaNodeId};

use super::pass::{Visit, wrap};
use super::predicates::{count_skipping_marks, is_block, is_mark};

const MARK_AWARE_TAGS: &[&str] = &["p", "pre"];

/// Blocks that may sit inside a `p` in parsed HTML.
const PHRASING_BLOCK_TAGS: &[&str] = &["img", "iframe"];

fn is_flow_block(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    is_block(dom, id) && !dom.tag_name(id).is_some_and(|t| PHRASING_BLOCK_TAGS.contains(&t))
}

/// Some mark child of `id` holds, marks looked through, a block that ends a
/// `p` when parsed.
fn marks_hold_flow_block(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.children(id).iter().any(|&child| {
        is_mark(dom, child)
            && (dom.children(child).iter().any(|&inner| is_flow_block(dom, inner))
                || marks_hold_flow_block(dom, child))
    })
}

/// First child mark of `id` whose content, marks looked through, is both
/// block and non-block.
///
/// Counts include nested marks, so an unmixed mark never holds a mixed one
/// and direct children are enough.
fn find_mixed_mark(dom: &ArenaDom, id: ArenaNodeId) -> Option<ArenaNodeId> {
    dom.children(id)
        .iter()
        .copied()
        .find(|&child| is_mark(dom, child) && count_skipping_marks(dom, child).is_mixed())
}

/// Rewrite a mixed `p`/`pre` into a list of unmixed siblings.
///
/// Leaves the element alone and records a warning when one of its marks
/// holds mixed content itself.
pub fn wrap_marked(dom: &mut ArenaDom, id: ArenaNodeId, diag: &mut Diagnostics) -> Visit {
    let Some(tag) = dom.tag_name(id) else {
        return Visit::Kept;
    };
    if !MARK_AWARE_TAGS.contains(&tag) {
        return Visit::Kept;
    }
    let breaks_paragraph = tag == "p" && marks_hold_flow_block(dom, id);
    if !breaks_paragraph && !count_skipping_marks(dom, id).is_mixed() {
        return Visit::Kept;
    }

    if let Some(mark) = find_mixed_mark(dom, id) {
        let tag = dom.tag_name(mark).unwrap_or_default().to_string();
        diag.warn(Warning::MixedMarkContent { tag });
        return Visit::Kept;
    }

    let children = dom.take_children(id);
    let mut splitter = Splitter::default();
    splitter.split(dom, children);
    splitter.flush(dom);

    dom.replace(id, splitter.out);
    Visit::Replaced
}

#[derive(Default)]
struct Splitter {
    /// Tags of the dissolved marks enclosing the current position, outermost first.
    marks: Vec<String>,
    run: Vec<ArenaNodeId>,
    out: Vec<ArenaNodeId>,
}

impl Splitter {
    fn split(&mut self, dom: &mut ArenaDom, nodes: Vec<ArenaNodeId>) {
        for node in nodes {
            if is_block(dom, node) {
                self.flush(dom);
                self.out.push(node);
            } else if is_mark(dom, node) && count_skipping_marks(dom, node).blocks > 0 {
                self.flush(dom);
                let tag = dom.tag_name(node).unwrap_or_default().to_string();
                self.marks.push(tag);
                let inner = dom.take_children(node);
                self.split(dom, inner);
                self.flush(dom);
                self.marks.pop();
            } else {
                self.run.push(node);
            }
        }
    }

    /// Close the current run: `p`, then the enclosing marks, around it.
    fn flush(&mut self, dom: &mut ArenaDom) {
        if self.run.is_empty() {
            return;
        }
        let mut content = std::mem::take(&mut self.run);
        for tag in self.marks.iter().rev() {
            content = vec![wrap(dom, tag, vec![], content)];
        }
        let paragraph = wrap(dom, "p", vec![], content);
        self.out.push(paragraph);
    }
}
