//! Node classification helpers for the passes.

use crate::dom::{ArenaDom, ArenaNodeId};
use crate::schema::{is_block_tag, is_inline_tag, is_mark_tag};

pub fn is_block(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.tag_name(id).is_some_and(is_block_tag)
}

pub fn is_inline(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.tag_name(id).is_some_and(is_inline_tag)
}

pub fn is_mark(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.tag_name(id).is_some_and(is_mark_tag)
}

/// Block / non-block tallies of a node's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub blocks: usize,
    pub non_blocks: usize,
}

impl Counts {
    /// Both kinds present.
    pub fn is_mixed(&self) -> bool {
        self.blocks > 0 && self.non_blocks > 0
    }

    fn add(&mut self, other: Counts) {
        self.blocks += other.blocks;
        self.non_blocks += other.non_blocks;
    }
}

/// Count direct children. Text, comments and unknown tags are non-block.
pub fn count_children(dom: &ArenaDom, id: ArenaNodeId) -> Counts {
    let mut counts = Counts::default();
    for &child in dom.children(id) {
        if is_block(dom, child) {
            counts.blocks += 1;
        } else {
            counts.non_blocks += 1;
        }
    }
    counts
}

/// Count children with marks made transparent: a mark is not counted itself,
/// its content is counted in its place, recursively.
pub fn count_skipping_marks(dom: &ArenaDom, id: ArenaNodeId) -> Counts {
    let mut counts = Counts::default();
    for &child in dom.children(id) {
        if is_mark(dom, child) {
            counts.add(count_skipping_marks(dom, child));
        } else if is_block(dom, child) {
            counts.blocks += 1;
        } else {
            counts.non_blocks += 1;
        }
    }
    counts
}
