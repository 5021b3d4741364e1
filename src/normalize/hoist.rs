//! Pass 5: move block elements out of links.

use crate::dom::{ArenaDom, ArenaNodeId};

use super::pass::{Segment, Visit, segments, wrap};
use super::predicates::{is_block, is_inline};

/// Replace an `<a>` that has a direct block child with its content, split
/// into runs: non-block runs go back into a copy of the `<a>` (same
/// attributes), blocks are left bare in between.
///
/// `<a href="x">1<p>2</p>3</a>` becomes
/// `<a href="x">1</a><p>2</p><a href="x">3</a>`.
pub fn hoist_blocks_from_inline(dom: &mut ArenaDom, id: ArenaNodeId) -> Visit {
    if !is_inline(dom, id) || !dom.children(id).iter().any(|&c| is_block(dom, c)) {
        return Visit::Kept;
    }

    let tag = dom.tag_name(id).unwrap_or("a").to_string();
    let attrs = dom.attrs(id).to_vec();
    let children = dom.take_children(id);

    let replacements = segments(dom, children)
        .into_iter()
        .map(|segment| match segment {
            Segment::Run(run) => wrap(dom, &tag, attrs.clone(), run),
            Segment::Block(block) => block,
        })
        .collect();

    dom.replace(id, replacements);
    Visit::Replaced
}
