//! HTML normalization for pasted or stored markup.
//!
//! Rewrites arbitrary HTML into a shape the deserializer maps cleanly onto
//! the document model: no stray newlines, no block elements inside links,
//! and no element that mixes block and non-block children where the
//! document model cannot represent that.
//!
//! ## Pipeline Order
//!
//! 1. **Newlines** - Strip `\n` outside `<pre>` (string level)
//! 2. **Trailing `<br>`** - Drop a `<br>` closing a node with other content
//! 3. **Empty paragraphs** - Collapse runs of empty `<p>` to one
//! 4. **Vacuum** - Remove space-only text from blocks
//! 5. **Hoist** - Move blocks out of `<a>`
//! 6. **Wrap first** - Split mixed `<li>`/`<blockquote>`
//! 7. **Wrap last** - Split mixed `<h4>`
//! 8. **Marks** - Split mixed `<p>`/`<pre>`, looking through `<b>`/`<i>`
//!
//! Passes 2 to 8 each walk the whole `<body>` once, pre-order.

mod hoist;
mod marks;
mod newlines;
mod pass;
mod predicates;
mod prune;
mod vacuum;
mod wrap;

pub use newlines::strip_newlines;
pub use pass::{Visit, walk_pre_order};
pub use predicates::{Counts, count_children, count_skipping_marks};

use crate::diagnostics::Diagnostics;
use crate::dom::{ArenaDom, ArenaNodeId, inner_html, parse_html};

/// Normalize an HTML string. Warnings are only logged.
///
/// ```
/// use slate_html::normalize;
///
/// assert_eq!(normalize("<p></p><p></p><p></p>"), "<p></p>");
/// ```
pub fn normalize(html: &str) -> String {
    normalize_with(html, &mut Diagnostics::new())
}

/// Normalize an HTML string, collecting warnings into `diag`.
pub fn normalize_with(html: &str, diag: &mut Diagnostics) -> String {
    let html = strip_newlines(html, diag);
    let mut dom = parse_html(&html);
    let Some(body) = dom.body() else {
        return String::new();
    };

    let removed = run_kept(&mut dom, body, |dom, id| {
        usize::from(prune::drop_trailing_br(dom, id))
    });
    tracing::debug!(target: "slate_html", removed, "trailing <br> pass");

    let removed = run_kept(&mut dom, body, prune::collapse_empty_paragraphs);
    tracing::debug!(target: "slate_html", removed, "empty paragraph pass");

    let removed = run_kept(&mut dom, body, vacuum::vacuum_block);
    tracing::debug!(target: "slate_html", removed, "space-only text pass");

    let rewritten = run_replacing(&mut dom, body, hoist::hoist_blocks_from_inline);
    tracing::debug!(target: "slate_html", rewritten, "hoist pass");

    let rewritten = run_replacing(&mut dom, body, wrap::wrap_first);
    tracing::debug!(target: "slate_html", rewritten, "wrap-first pass");

    let rewritten = run_replacing(&mut dom, body, wrap::wrap_last);
    tracing::debug!(target: "slate_html", rewritten, "wrap-last pass");

    let rewritten = run_replacing(&mut dom, body, |dom, id| marks::wrap_marked(dom, id, diag));
    tracing::debug!(target: "slate_html", rewritten, "mark-aware wrap pass");

    inner_html(&dom, body)
}

/// Walk with a pass that edits a node's children but never the node itself.
fn run_kept<F>(dom: &mut ArenaDom, root: ArenaNodeId, mut pass: F) -> usize
where
    F: FnMut(&mut ArenaDom, ArenaNodeId) -> usize,
{
    let mut total = 0;
    walk_pre_order(dom, root, &mut |dom, id| {
        total += pass(dom, id);
        Visit::Kept
    });
    total
}

/// Walk with a pass that may replace the visited node.
fn run_replacing<F>(dom: &mut ArenaDom, root: ArenaNodeId, mut pass: F) -> usize
where
    F: FnMut(&mut ArenaDom, ArenaNodeId) -> Visit,
{
    let mut total = 0;
    walk_pre_order(dom, root, &mut |dom, id| {
        let visit = pass(dom, id);
        if visit == Visit::Replaced {
            total += 1;
        }
        visit
    });
    total
}
