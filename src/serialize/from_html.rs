//! HTML to [`Document`].

use crate::diagnostics::{Diagnostics, Warning};
use crate::dom::{ArenaDom, ArenaNodeData, ArenaNodeId, parse_html};
use crate::embed::classify_src;
use crate::model::{Block, BlockType, Data, Document, Inline, InlineType, Mark, MarkType, Node};
use crate::schema::keys;

/// Parse `html` and map the body content onto document nodes.
pub fn deserialize_html(html: &str, diag: &mut Diagnostics) -> Document {
    let dom = parse_html(html);
    let Some(body) = dom.body() else {
        return Document::empty_paragraph();
    };

    let nodes = Reader { dom: &dom, diag }.children(body);
    let nodes = wrap_top_level(nodes);
    if nodes.is_empty() {
        return Document::empty_paragraph();
    }
    let doc = Document::new(nodes);
    tracing::debug!(
        target: "slate_html",
        top_level = doc.nodes.len(),
        blocks = doc.blocks().count(),
        "deserialized"
    );
    doc
}

/// Runs of text, marks and links at the top level go into paragraphs, the
/// way the editor stores them. A mark or link that holds a block stays
/// unwrapped: a `<p>` around it would be closed early by the parser.
fn wrap_top_level(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut run = Vec::new();
    for node in nodes {
        if matches!(node, Node::Block(_)) || holds_block(&node) {
            if !run.is_empty() {
                out.push(paragraph(std::mem::take(&mut run)));
            }
            out.push(node);
        } else {
            run.push(node);
        }
    }
    if !run.is_empty() {
        out.push(paragraph(run));
    }
    out
}

fn holds_block(node: &Node) -> bool {
    node.children()
        .iter()
        .any(|child| matches!(child, Node::Block(_)) || holds_block(child))
}

fn paragraph(nodes: Vec<Node>) -> Node {
    Node::Block(Block::with_nodes(BlockType::Paragraph, nodes))
}

struct Reader<'a> {
    dom: &'a ArenaDom,
    diag: &'a mut Diagnostics,
}

impl Reader<'_> {
    /// Deserialize the children of `id`, merging adjacent text.
    fn children(&mut self, id: ArenaNodeId) -> Vec<Node> {
        let dom = self.dom;
        let mut out = Vec::new();
        for &child in dom.children(id) {
            self.node(child, &mut out);
        }
        merge_text(out)
    }

    /// Deserialize one DOM node into zero or more document nodes.
    fn node(&mut self, id: ArenaNodeId, out: &mut Vec<Node>) {
        let dom = self.dom;
        let Some(node) = dom.get(id) else {
            return;
        };
        match &node.data {
            ArenaNodeData::Text(text) => out.push(Node::text(text.as_str())),
            ArenaNodeData::Element { name, .. } => self.element(id, &name.local, out),
            ArenaNodeData::Comment(_) | ArenaNodeData::Doctype | ArenaNodeData::Document => {}
        }
    }

    fn element(&mut self, id: ArenaNodeId, tag: &str, out: &mut Vec<Node>) {
        if let Some(kind) = MarkType::from_tag(tag) {
            out.push(Node::Mark(Mark::new(kind, self.children(id))));
            return;
        }

        match tag {
            "br" => out.push(Node::text("\n")),
            "a" => out.push(self.link(id)),
            "img" => out.push(Node::Block(self.image(id, Block::new(BlockType::Image)))),
            "iframe" => {
                if let Some(block) = self.iframe(id) {
                    out.push(Node::Block(block));
                }
            }
            "test" => {
                let mut block = Block::with_nodes(BlockType::Test, self.children(id));
                if let Some(class) = self.dom.get_attr(id, "class") {
                    block = block.with_data(keys::CLASS_NAME, class);
                }
                out.push(Node::Block(block));
            }
            _ => match BlockType::from_tag(tag) {
                Some(kind) => out.push(Node::Block(Block::with_nodes(kind, self.children(id)))),
                // Unknown element: keep its content in place.
                None => {
                    let dom = self.dom;
                    for &child in dom.children(id) {
                        self.node(child, out);
                    }
                }
            },
        }
    }

    /// Copy `src` and `alt` from an `<img>` onto `block`, if present.
    fn image(&self, id: ArenaNodeId, mut block: Block) -> Block {
        for key in [keys::SRC, keys::ALT] {
            if let Some(value) = self.dom.get_attr(id, key) {
                block = block.with_data(key, value);
            }
        }
        block
    }

    /// A link, or an image block when the link holds nothing but an image.
    fn link(&mut self, id: ArenaNodeId) -> Node {
        let mut data = Data::new();
        for key in [keys::HREF, keys::TARGET] {
            if let Some(value) = self.dom.get_attr(id, key) {
                data.insert(key.to_string(), value.to_string());
            }
        }

        if let [only] = self.dom.children(id)
            && self.dom.tag_name(*only) == Some("img")
        {
            let block = Block {
                data,
                ..Block::new(BlockType::Image)
            };
            return Node::Block(self.image(*only, block));
        }

        Node::Inline(Inline {
            kind: InlineType::Link,
            nodes: self.children(id),
            data,
        })
    }

    fn iframe(&mut self, id: ArenaNodeId) -> Option<Block> {
        let src = self.dom.get_attr(id, keys::SRC).unwrap_or_default();
        match classify_src(src) {
            Some(kind) => Some(Block::embed(kind, src)),
            None => {
                self.diag.warn(Warning::UnknownEmbed {
                    src: src.to_string(),
                });
                None
            }
        }
    }
}

/// Merge adjacent text leaves.
fn merge_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Node::Text(next) = &node
            && let Some(Node::Text(prev)) = out.last_mut()
        {
            prev.text.push_str(&next.text);
            continue;
        }
        out.push(node);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn de(html: &str) -> Document {
        deserialize_html(html, &mut Diagnostics::new())
    }

    #[test]
    fn test_empty_input_is_empty_paragraph() {
        assert_eq!(de(""), Document::empty_paragraph());
        assert_eq!(de("<!-- nothing -->"), Document::empty_paragraph());
    }

    #[test]
    fn test_br_becomes_newline_and_merges() {
        let doc = de("<p>a<br>b</p>");
        assert_eq!(doc.nodes, [paragraph(vec![Node::text("a\nb")])]);
    }

    #[test]
    fn test_unknown_tags_are_transparent() {
        let doc = de("<div><p>a<span>b</span></p></div>");
        assert_eq!(doc.nodes, [paragraph(vec![Node::text("ab")])]);
    }

    #[test]
    fn test_top_level_text_wrapped() {
        let doc = de("a<b>b</b><p>c</p>d");
        assert_eq!(
            doc.nodes,
            [
                paragraph(vec![
                    Node::text("a"),
                    Node::Mark(Mark::new(MarkType::Bold, vec![Node::text("b")])),
                ]),
                paragraph(vec![Node::text("c")]),
                paragraph(vec![Node::text("d")]),
            ]
        );
    }

    #[test]
    fn test_top_level_mark_around_block_not_wrapped() {
        let bold = |nodes| Node::Mark(Mark::new(MarkType::Bold, nodes));
        let doc = de("a<b><p>x</p></b><b>y</b>");
        assert_eq!(
            doc.nodes,
            [
                paragraph(vec![Node::text("a")]),
                bold(vec![paragraph(vec![Node::text("x")])]),
                paragraph(vec![bold(vec![Node::text("y")])]),
            ]
        );
    }

    #[test]
    fn test_image_attributes_only_when_present() {
        let doc = de(r#"<img src="x">"#);
        let Node::Block(block) = &doc.nodes[0] else {
            panic!("expected block");
        };
        assert_eq!(block.kind, BlockType::Image);
        assert!(block.is_void);
        assert_eq!(block.data(keys::SRC), Some("x"));
        assert_eq!(block.data(keys::ALT), None);
    }

    #[test]
    fn test_link_with_text_and_image_stays_link() {
        let doc = de(r#"<p><a href="h">t<img src="x"></a></p>"#);
        let Node::Block(p) = &doc.nodes[0] else {
            panic!("expected block");
        };
        let Node::Inline(link) = &p.nodes[0] else {
            panic!("expected inline, got {:?}", p.nodes[0]);
        };
        assert_eq!(link.data(keys::HREF), Some("h"));
        assert_eq!(link.data(keys::TARGET), None);
        assert_eq!(link.nodes.len(), 2);
    }

    #[test]
    fn test_test_block_class() {
        let doc = de(r#"<test class="foo"></test>"#);
        let Node::Block(block) = &doc.nodes[0] else {
            panic!("expected block");
        };
        assert_eq!(block.kind, BlockType::Test);
        assert_eq!(block.data(keys::CLASS_NAME), Some("foo"));
        assert!(!block.is_void);
    }

    #[test]
    fn test_merge_text() {
        let merged = merge_text(vec![
            Node::text("a"),
            Node::text("b"),
            Node::Mark(Mark::new(MarkType::Italic, vec![])),
            Node::text("c"),
        ]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0], Node::text("ab"));
    }
}
