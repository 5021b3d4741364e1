//! Tag classification tables shared by the normalizer and the serializer.
//!
//! Every tag falls in exactly one class. Anything outside the three fixed
//! tables (text nodes included) is [`NodeClass::Other`], which counts as
//! non-block wherever block and non-block content is compared.

/// Tags treated as block nodes.
pub const BLOCK_TAGS: &[&str] = &["h4", "blockquote", "li", "ul", "ol", "iframe", "p", "pre", "img"];

/// Tags treated as inline nodes.
pub const INLINE_TAGS: &[&str] = &["a"];

/// Tags treated as text marks.
pub const MARK_TAGS: &[&str] = &["b", "i"];

/// Structural class of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    Block,
    Inline,
    Mark,
    Other,
}

impl NodeClass {
    /// Classify a lower-cased tag name.
    pub fn of(tag: &str) -> Self {
        if BLOCK_TAGS.contains(&tag) {
            NodeClass::Block
        } else if INLINE_TAGS.contains(&tag) {
            NodeClass::Inline
        } else if MARK_TAGS.contains(&tag) {
            NodeClass::Mark
        } else {
            NodeClass::Other
        }
    }
}

pub fn is_block_tag(tag: &str) -> bool {
    NodeClass::of(tag) == NodeClass::Block
}

pub fn is_inline_tag(tag: &str) -> bool {
    NodeClass::of(tag) == NodeClass::Inline
}

pub fn is_mark_tag(tag: &str) -> bool {
    NodeClass::of(tag) == NodeClass::Mark
}

/// Keys of block and inline `data` maps read by the rest of the editor.
pub mod keys {
    pub const SRC: &str = "src";
    pub const ALT: &str = "alt";
    pub const HREF: &str = "href";
    pub const TARGET: &str = "target";
    pub const CLASS_NAME: &str = "className";
}

/// `src` prefix of YouTube embeds (video).
pub const YOUTUBE_EMBED_PREFIX: &str = "//www.youtube.com/embed/";
/// `src` prefix of Vimeo embeds (video).
pub const VIMEO_EMBED_PREFIX: &str = "//player.vimeo.com/video/";
/// `src` prefix of Mixcloud embeds (audio).
pub const MIXCLOUD_EMBED_PREFIX: &str = "https://www.mixcloud.com/widget/iframe/";
/// `src` prefix of SoundCloud embeds (audio).
pub const SOUNDCLOUD_EMBED_PREFIX: &str = "https://w.soundcloud.com/player/";
