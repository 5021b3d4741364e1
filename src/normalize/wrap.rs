//! Passes 6 and 7: split `li`/`blockquote` and `h4` elements that mix block
//! and non-block children.
//!
//! Both produce siblings that each hold one kind of content. They differ in
//! which piece keeps the original tag: the first one for list items and
//! quotes, the last one for headings.

use crate::dom::{ArenaDom, ArenaNodeId};

use super::pass::{Segment, Visit, segments, wrap};
use super::predicates::count_children;

const WRAP_FIRST_TAGS: &[&str] = &["li", "blockquote"];
const WRAP_LAST_TAGS: &[&str] = &["h4"];

fn mixed_with_tag<'a>(dom: &'a ArenaDom, id: ArenaNodeId, tags: &[&str]) -> Option<&'a str> {
    let tag = dom.tag_name(id)?;
    (tags.contains(&tag) && count_children(dom, id).is_mixed()).then_some(tag)
}

/// Split a mixed `li` or `blockquote`.
///
/// The first segment goes into the element's own tag (attributes kept), later
/// non-block runs into `p`, later blocks are hoisted bare.
///
/// `<li><a>1</a>2<blockquote>3</blockquote></li>` becomes
/// `<li><a>1</a>2</li><blockquote>3</blockquote>`.
pub fn wrap_first(dom: &mut ArenaDom, id: ArenaNodeId) -> Visit {
    let Some(tag) = mixed_with_tag(dom, id, WRAP_FIRST_TAGS).map(str::to_owned) else {
        return Visit::Kept;
    };
    let attrs = dom.attrs(id).to_vec();
    let children = dom.take_children(id);

    let mut replacements = Vec::new();
    for (index, segment) in segments(dom, children).into_iter().enumerate() {
        let node = match segment {
            Segment::Run(run) if index == 0 => wrap(dom, &tag, attrs.clone(), run),
            Segment::Block(block) if index == 0 => wrap(dom, &tag, attrs.clone(), [block]),
            Segment::Run(run) => wrap(dom, "p", vec![], run),
            Segment::Block(block) => block,
        };
        replacements.push(node);
    }

    dom.replace(id, replacements);
    Visit::Replaced
}

/// Split a mixed `h4`.
///
/// The last segment goes into `h4` (attributes kept), earlier non-block runs
/// into `p`, earlier blocks are hoisted bare.
///
/// `<h4><img>text</h4>` becomes `<img><h4>text</h4>`.
pub fn wrap_last(dom: &mut ArenaDom, id: ArenaNodeId) -> Visit {
    let Some(tag) = mixed_with_tag(dom, id, WRAP_LAST_TAGS).map(str::to_owned) else {
        return Visit::Kept;
    };
    let attrs = dom.attrs(id).to_vec();
    let children = dom.take_children(id);

    let segments = segments(dom, children);
    let last = segments.len().saturating_sub(1);
    let mut replacements = Vec::with_capacity(segments.len());
    for (index, segment) in segments.into_iter().enumerate() {
        let node = match segment {
            Segment::Run(run) if index == last => wrap(dom, &tag, attrs.clone(), run),
            Segment::Block(block) if index == last => wrap(dom, &tag, attrs.clone(), [block]),
            Segment::Run(run) => wrap(dom, "p", vec![], run),
            Segment::Block(block) => block,
        };
        replacements.push(node);
    }

    dom.replace(id, replacements);
    Visit::Replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{inner_html, parse_html};
    use crate::normalize::pass::walk_pre_order;

    fn run(html: &str, pass: fn(&mut ArenaDom, ArenaNodeId) -> Visit) -> String {
        let mut dom = parse_html(html);
        let body = dom.body().unwrap();
        walk_pre_order(&mut dom, body, &mut |dom, id| pass(dom, id));
        inner_html(&dom, body)
    }

    #[test]
    fn test_list_item_run_first() {
        assert_eq!(
            run(
                "<ul><li><a>1</a>2<blockquote>3</blockquote></li></ul>",
                wrap_first
            ),
            "<ul><li><a>1</a>2</li><blockquote>3</blockquote></ul>"
        );
    }

    #[test]
    fn test_list_item_block_first() {
        assert_eq!(
            run(r#"<ul><li class="c"><img src="x">a<img src="y">b</li></ul>"#, wrap_first),
            r#"<ul><li class="c"><img src="x"></li><p>a</p><img src="y"><p>b</p></ul>"#
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            run("<blockquote>quote<p>para</p>tail</blockquote>", wrap_first),
            "<blockquote>quote</blockquote><p>para</p><p>tail</p>"
        );
    }

    #[test]
    fn test_unmixed_untouched() {
        let html = "<ul><li>a<b>b</b></li><li><p>x</p><p>y</p></li></ul>";
        assert_eq!(run(html, wrap_first), html);
    }

    #[test]
    fn test_heading_trailing_run() {
        assert_eq!(
            run(r#"<h4 id="h"><img src="x">text</h4>"#, wrap_last),
            r#"<img src="x"><h4 id="h">text</h4>"#
        );
    }

    #[test]
    fn test_heading_trailing_block() {
        assert_eq!(
            run(r#"<h4>a<img src="x">b<img src="y"></h4>"#, wrap_last),
            r#"<p>a</p><img src="x"><p>b</p><h4><img src="y"></h4>"#
        );
    }

    #[test]
    fn test_other_tags_untouched() {
        let html = r#"<p>a<img src="x"></p>"#;
        assert_eq!(run(html, wrap_last), html);
        assert_eq!(run(html, wrap_first), html);
    }
}
