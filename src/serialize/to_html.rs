//! [`Document`] to HTML.

use std::fmt::Write;

use crate::dom::{escape_attr, escape_text};
use crate::model::{Block, BlockType, Document, Inline, InlineType, Mark, Node};
use crate::schema::keys;

const LINK_REL: &str = "noopener noreferrer";

/// Render a document as an HTML string.
pub fn serialize_document(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.nodes {
        write_node(&mut out, node);
    }
    tracing::debug!(target: "slate_html", bytes = out.len(), "serialized");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Block(block) => write_block(out, block),
        Node::Inline(inline) => write_inline(out, inline),
        Node::Mark(mark) => write_mark(out, mark),
        Node::Text(text) => write_text(out, &text.text),
    }
}

fn write_children(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        write_node(out, node);
    }
}

fn write_block(out: &mut String, block: &Block) {
    let tag = match block.kind {
        BlockType::Paragraph => "p",
        BlockType::HeadingFour => "h4",
        BlockType::ListItem => "li",
        BlockType::NumberedList => "ol",
        BlockType::BulletedList => "ul",
        BlockType::BlockQuote => "blockquote",
        BlockType::Pre => "pre",
        BlockType::Image => return write_image(out, block),
        BlockType::Audio | BlockType::Video => {
            out.push_str("<iframe");
            write_attr(out, "src", block.data(keys::SRC));
            out.push_str("></iframe>");
            return;
        }
        BlockType::Test => {
            out.push_str("<test");
            write_attr(out, "class", block.data(keys::CLASS_NAME));
            out.push_str("></test>");
            return;
        }
    };
    let _ = write!(out, "<{tag}>");
    write_children(out, &block.nodes);
    let _ = write!(out, "</{tag}>");
}

/// `<img>`, inside an `<a>` when the image carries a link.
fn write_image(out: &mut String, block: &Block) {
    let href = block.data(keys::HREF);
    if href.is_some() {
        write_anchor_open(out, href, block.data(keys::TARGET));
    }
    out.push_str("<img");
    write_attr(out, "src", block.data(keys::SRC));
    write_attr(out, "alt", block.data(keys::ALT));
    out.push('>');
    if href.is_some() {
        out.push_str("</a>");
    }
}

fn write_inline(out: &mut String, inline: &Inline) {
    match inline.kind {
        InlineType::Link => {
            write_anchor_open(out, inline.data(keys::HREF), inline.data(keys::TARGET));
            write_children(out, &inline.nodes);
            out.push_str("</a>");
        }
    }
}

fn write_mark(out: &mut String, mark: &Mark) {
    let tag = mark.kind.tag();
    let _ = write!(out, "<{tag}>");
    write_children(out, &mark.nodes);
    let _ = write!(out, "</{tag}>");
}

/// Escaped text; each `\n` becomes `<br>`.
fn write_text(out: &mut String, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        out.push_str(&escape_text(line));
    }
}

/// `<a href target rel>`; `rel` only goes with a target.
fn write_anchor_open(out: &mut String, href: Option<&str>, target: Option<&str>) {
    out.push_str("<a");
    write_attr(out, "href", href);
    if target.is_some() {
        write_attr(out, "target", target);
        write_attr(out, "rel", Some(LINK_REL));
    }
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
    }
}
