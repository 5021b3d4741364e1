//! Document tree consumed by the editor.
//!
//! A [`Document`] is a list of [`Node`]s. Node kinds form a closed enum so
//! serialization and deserialization can match exhaustively. With the `serde`
//! feature the tree maps to Slate-style JSON (`object`, `type`, `nodes`,
//! `data`, `isVoid`).

use std::collections::BTreeMap;

use crate::embed::EmbedKind;
use crate::schema::keys;

/// Attribute map of a block or inline node. Keys are unique; order carries no
/// meaning, the sorted map just keeps equality and output deterministic.
pub type Data = BTreeMap<String, String>;

/// Root of a deserialized document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// The document the editor starts from: one empty paragraph.
    pub fn empty_paragraph() -> Self {
        Self::new(vec![Node::Block(Block::new(BlockType::Paragraph))])
    }

    /// Iterate over every block in document order, depth first.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        let mut stack: Vec<&Node> = self.nodes.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                stack.extend(node.children().iter().rev());
                if let Node::Block(block) = node {
                    return Some(block);
                }
            }
            None
        })
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "object", rename_all = "lowercase")
)]
pub enum Node {
    Block(Block),
    Inline(Inline),
    Mark(Mark),
    Text(Text),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(Text { text: text.into() })
    }

    /// Child nodes; empty for text leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Block(b) => &b.nodes,
            Node::Inline(i) => &i.nodes,
            Node::Mark(m) => &m.nodes,
            Node::Text(_) => &[],
        }
    }
}

/// Block node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum BlockType {
    Paragraph,
    HeadingFour,
    ListItem,
    NumberedList,
    BulletedList,
    BlockQuote,
    Pre,
    Image,
    Audio,
    Video,
    Test,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::HeadingFour => "heading-four",
            BlockType::ListItem => "list-item",
            BlockType::NumberedList => "numbered-list",
            BlockType::BulletedList => "bulleted-list",
            BlockType::BlockQuote => "block-quote",
            BlockType::Pre => "pre",
            BlockType::Image => "image",
            BlockType::Audio => "audio",
            BlockType::Video => "video",
            BlockType::Test => "test",
        }
    }

    /// Block type for a tag, except `iframe`, whose type depends on its `src`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "blockquote" => BlockType::BlockQuote,
            "ol" => BlockType::NumberedList,
            "ul" => BlockType::BulletedList,
            "li" => BlockType::ListItem,
            "h4" => BlockType::HeadingFour,
            "p" => BlockType::Paragraph,
            "pre" => BlockType::Pre,
            "img" => BlockType::Image,
            "test" => BlockType::Test,
            _ => return None,
        })
    }

    /// Void blocks carry no editable content, only data.
    pub fn is_void(self) -> bool {
        matches!(self, BlockType::Image | BlockType::Audio | BlockType::Video)
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structural block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: BlockType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nodes: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: Data,
    #[cfg_attr(feature = "serde", serde(rename = "isVoid", default))]
    pub is_void: bool,
}

impl Block {
    pub fn new(kind: BlockType) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            data: Data::new(),
            is_void: kind.is_void(),
        }
    }

    pub fn with_nodes(kind: BlockType, nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            ..Self::new(kind)
        }
    }

    /// An image block showing `src`.
    pub fn image(src: impl Into<String>) -> Self {
        Self::new(BlockType::Image).with_data(keys::SRC, src)
    }

    /// An audio or video embed block pointing at an iframe `src`.
    pub fn embed(kind: EmbedKind, src: impl Into<String>) -> Self {
        Self::new(kind.block_type()).with_data(keys::SRC, src)
    }

    /// Set one data entry.
    pub fn with_data(mut self, key: &str, value: impl Into<String>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    /// Make an image clickable. Opening in a new window sets `target="_blank"`;
    /// otherwise any previous target is cleared.
    pub fn with_link(mut self, href: impl Into<String>, open_in_new_window: bool) -> Self {
        self.data.insert(keys::HREF.to_string(), href.into());
        if open_in_new_window {
            self.data.insert(keys::TARGET.to_string(), "_blank".to_string());
        } else {
            self.data.remove(keys::TARGET);
        }
        self
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// Inline node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum InlineType {
    Link,
}

impl InlineType {
    pub fn as_str(self) -> &'static str {
        match self {
            InlineType::Link => "link",
        }
    }
}

/// An inline node inside block text flow.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inline {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: InlineType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nodes: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: Data,
}

impl Inline {
    /// A link with no content yet.
    pub fn link(href: impl Into<String>, open_in_new_window: bool) -> Self {
        let mut data = Data::new();
        data.insert(keys::HREF.to_string(), href.into());
        if open_in_new_window {
            data.insert(keys::TARGET.to_string(), "_blank".to_string());
        }
        Self {
            kind: InlineType::Link,
            nodes: Vec::new(),
            data,
        }
    }

    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// Text mark types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MarkType {
    Bold,
    Italic,
}

impl MarkType {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkType::Bold => "bold",
            MarkType::Italic => "italic",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "b" => Some(MarkType::Bold),
            "i" => Some(MarkType::Italic),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            MarkType::Bold => "b",
            MarkType::Italic => "i",
        }
    }
}

/// A text decoration wrapping a run of content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mark {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: MarkType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nodes: Vec<Node>,
}

impl Mark {
    pub fn new(kind: MarkType, nodes: Vec<Node>) -> Self {
        Self { kind, nodes }
    }
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_flag_follows_type() {
        assert!(Block::new(BlockType::Image).is_void);
        assert!(Block::new(BlockType::Audio).is_void);
        assert!(Block::new(BlockType::Video).is_void);
        assert!(!Block::new(BlockType::Paragraph).is_void);
        assert!(!Block::new(BlockType::Test).is_void);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(BlockType::HeadingFour.as_str(), "heading-four");
        assert_eq!(BlockType::BlockQuote.to_string(), "block-quote");
        assert_eq!(InlineType::Link.as_str(), "link");
        assert_eq!(MarkType::Italic.as_str(), "italic");
        assert_eq!(BlockType::from_tag("ol"), Some(BlockType::NumberedList));
        assert_eq!(BlockType::from_tag("iframe"), None);
        assert_eq!(MarkType::from_tag("b"), Some(MarkType::Bold));
    }

    #[test]
    fn test_image_link_toggles_target() {
        let img = Block::image("a.png").with_link("http://x", true);
        assert_eq!(img.data(keys::TARGET), Some("_blank"));

        let img = img.with_link("http://y", false);
        assert_eq!(img.data(keys::HREF), Some("http://y"));
        assert_eq!(img.data(keys::TARGET), None);
        assert_eq!(img.data(keys::SRC), Some("a.png"));
    }

    #[test]
    fn test_link_builder() {
        let link = Inline::link("http://x", false).with_nodes(vec![Node::text("go")]);
        assert_eq!(link.data(keys::HREF), Some("http://x"));
        assert_eq!(link.data(keys::TARGET), None);
        assert_eq!(link.nodes, [Node::text("go")]);
    }

    #[test]
    fn test_blocks_iterates_depth_first() {
        let doc = Document::new(vec![
            Node::Block(Block::with_nodes(
                BlockType::BulletedList,
                vec![Node::Block(Block::with_nodes(
                    BlockType::ListItem,
                    vec![Node::text("one")],
                ))],
            )),
            Node::Block(Block::image("x.png")),
        ]);

        let kinds: Vec<_> = doc.blocks().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            [BlockType::BulletedList, BlockType::ListItem, BlockType::Image]
        );
    }
}
