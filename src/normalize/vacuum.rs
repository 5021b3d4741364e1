//! Pass 4: remove space-only text from block elements.

use crate::dom::{ArenaDom, ArenaNodeId};

use super::predicates::is_block;

/// Text made only of U+0020. Tabs and other whitespace do not count.
fn is_spaces(text: &str) -> bool {
    text.bytes().all(|b| b == b' ')
}

/// If `id` is a block, remove every direct text child that is empty or holds
/// only spaces. Returns how many were removed.
pub fn vacuum_block(dom: &mut ArenaDom, id: ArenaNodeId) -> usize {
    if !is_block(dom, id) {
        return 0;
    }
    let doomed: Vec<ArenaNodeId> = dom
        .children(id)
        .iter()
        .copied()
        .filter(|&child| dom.text_content(child).is_some_and(is_spaces))
        .collect();

    for &node in &doomed {
        dom.detach(node);
    }
    doomed.len()
}
