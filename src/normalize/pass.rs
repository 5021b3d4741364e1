//! Tree traversal shared by the normalization passes.

use crate::dom::{ArenaDom, ArenaNodeId, Attribute};

use super::predicates::is_block;

/// What a pass did to the node it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The node is still in place; the walker descends into its children.
    Kept,
    /// The node was removed from the tree, possibly with new nodes spliced in
    /// at its position.
    Replaced,
}

/// Walk the tree pre-order, calling `pass` on every node.
///
/// A replaced node is not descended into. The walker stays at the same child
/// index afterwards, so whatever was spliced into that slot is visited next.
pub fn walk_pre_order<F>(dom: &mut ArenaDom, root: ArenaNodeId, pass: &mut F) -> Visit
where
    F: FnMut(&mut ArenaDom, ArenaNodeId) -> Visit,
{
    if pass(dom, root) == Visit::Replaced {
        return Visit::Replaced;
    }

    let mut index = 0;
    while let Some(&child) = dom.children(root).get(index) {
        if walk_pre_order(dom, child, pass) == Visit::Kept {
            index += 1;
        }
    }
    Visit::Kept
}

/// Create `tag` with `attrs` and move `nodes` into it.
pub fn wrap(
    dom: &mut ArenaDom,
    tag: &str,
    attrs: Vec<Attribute>,
    nodes: impl IntoIterator<Item = ArenaNodeId>,
) -> ArenaNodeId {
    let wrapper = dom.create_html_element(tag, attrs);
    for node in nodes {
        dom.append(wrapper, node);
    }
    wrapper
}

/// A slice of a child list: a maximal run of non-block nodes, or one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Run(Vec<ArenaNodeId>),
    Block(ArenaNodeId),
}

/// Split `nodes` into [`Segment`]s, in order.
pub fn segments(dom: &ArenaDom, nodes: Vec<ArenaNodeId>) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut run = Vec::new();
    for node in nodes {
        if is_block(dom, node) {
            if !run.is_empty() {
                out.push(Segment::Run(std::mem::take(&mut run)));
            }
            out.push(Segment::Block(node));
        } else {
            run.push(node);
        }
    }
    if !run.is_empty() {
        out.push(Segment::Run(run));
    }
    out
}
