//! Audio/video embeds and the URLs users paste to create them.
//!
//! An embed block only stores its iframe `src`; whether it is audio or video
//! is recovered on every deserialize by matching that `src` against the
//! provider prefixes in [`crate::schema`].

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

use crate::model::{Block, BlockType};
use crate::schema::{
    MIXCLOUD_EMBED_PREFIX, SOUNDCLOUD_EMBED_PREFIX, VIMEO_EMBED_PREFIX, YOUTUBE_EMBED_PREFIX,
};

/// Kind of iframe embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedKind {
    Audio,
    Video,
}

impl EmbedKind {
    pub fn block_type(self) -> BlockType {
        match self {
            EmbedKind::Audio => BlockType::Audio,
            EmbedKind::Video => BlockType::Video,
        }
    }
}

/// Decide audio or video from an iframe `src`, by exact prefix.
pub fn classify_src(src: &str) -> Option<EmbedKind> {
    if src.starts_with(YOUTUBE_EMBED_PREFIX) || src.starts_with(VIMEO_EMBED_PREFIX) {
        Some(EmbedKind::Video)
    } else if src.starts_with(MIXCLOUD_EMBED_PREFIX) || src.starts_with(SOUNDCLOUD_EMBED_PREFIX) {
        Some(EmbedKind::Audio)
    } else {
        None
    }
}

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?(?:youtu\.be/|youtube\.com/(?:embed/|v/|watch\?v=|watch\?.+&v=))((?:[0-9A-Za-z_]|-){11})(?:\S+)?$",
    )
    .unwrap()
});

static VIMEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//(?:player.)?vimeo.com/(?:[a-z]*/)*([0-9]{6,11})[?]?.*").unwrap()
});

static MIXCLOUD_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:http:|https:)?//www\.mixcloud\.com/.*/.*/").unwrap());

static SOUNDCLOUD_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https:)?//soundcloud\.com/.*/.*").unwrap());

static GIPHY_HTML5_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//giphy\.com/gifs/(?:[0-9A-Za-z_]*?-)*?([0-9A-Za-z_]*?)/html5$").unwrap()
});

static GIPHY_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//giphy\.com/gifs/(?:[0-9A-Za-z_]*?-)*?([0-9A-Za-z_]*?)$").unwrap()
});

/// Video block for a YouTube watch, short or embed URL.
pub fn youtube_embed(url: &str) -> Option<Block> {
    let caps = YOUTUBE_URL.captures(url)?;
    let src = format!("{YOUTUBE_EMBED_PREFIX}{}", &caps[1]);
    Some(Block::embed(EmbedKind::Video, src))
}

/// Video block for a Vimeo page or player URL.
pub fn vimeo_embed(url: &str) -> Option<Block> {
    let caps = VIMEO_URL.captures(url)?;
    let src = format!("{VIMEO_EMBED_PREFIX}{}", &caps[1]);
    Some(Block::embed(EmbedKind::Video, src))
}

/// Audio block for a Mixcloud show URL.
pub fn mixcloud_embed(url: &str) -> Option<Block> {
    if !MIXCLOUD_URL.is_match(url) {
        return None;
    }
    let src = format!(
        "{MIXCLOUD_EMBED_PREFIX}?hide_cover=1&light=1&hide_artwork=1&feed={}",
        encode_component(url)
    );
    Some(Block::embed(EmbedKind::Audio, src))
}

/// Audio block for a SoundCloud track URL.
pub fn soundcloud_embed(url: &str) -> Option<Block> {
    if !SOUNDCLOUD_URL.is_match(url) {
        return None;
    }
    let src = format!(
        "{SOUNDCLOUD_EMBED_PREFIX}?color=%23ff5500&auto_play=false&hide_related=true\
         &show_comments=false&show_user=false&show_reposts=false&show_teaser=false&url={}",
        encode_component(url)
    );
    Some(Block::embed(EmbedKind::Audio, src))
}

/// Image block for a Giphy `…/html5` share URL, pointing at the raw gif.
pub fn giphy_image(url: &str) -> Option<Block> {
    let caps = GIPHY_HTML5_URL.captures(url)?;
    let src = format!("https://media.giphy.com/media/{}/giphy.gif", &caps[1]);
    Some(Block::image(src))
}

/// Input checks used by the link and embed dialogs.
pub mod validate {
    use super::{GIPHY_URL, MIXCLOUD_URL, VIMEO_URL, YOUTUBE_URL};

    /// Non-empty text.
    pub fn is_text(input: &str) -> bool {
        !input.is_empty()
    }

    /// Absolute http(s) URL.
    pub fn is_url(input: &str) -> bool {
        input.starts_with("http://") || input.starts_with("https://")
    }

    pub fn is_giphy_url(input: &str) -> bool {
        GIPHY_URL.is_match(input)
    }

    pub fn is_youtube_url(input: &str) -> bool {
        YOUTUBE_URL.is_match(input)
    }

    pub fn is_vimeo_url(input: &str) -> bool {
        VIMEO_URL.is_match(input)
    }

    pub fn is_mixcloud_url(input: &str) -> bool {
        MIXCLOUD_URL.is_match(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::keys;

    #[test]
    fn test_classify_src() {
        assert_eq!(
            classify_src("//www.youtube.com/embed/abc"),
            Some(EmbedKind::Video)
        );
        assert_eq!(
            classify_src("//player.vimeo.com/video/123456"),
            Some(EmbedKind::Video)
        );
        assert_eq!(
            classify_src("https://www.mixcloud.com/widget/iframe/?feed=x"),
            Some(EmbedKind::Audio)
        );
        assert_eq!(
            classify_src("https://w.soundcloud.com/player/?url=x"),
            Some(EmbedKind::Audio)
        );
        assert_eq!(classify_src("https://unknown.example.com/x"), None);
        // Prefix match only, not substring.
        assert_eq!(classify_src("x//www.youtube.com/embed/abc"), None);
    }

    #[test]
    fn test_youtube_urls() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
        ] {
            let block = youtube_embed(url).unwrap_or_else(|| panic!("{url}"));
            assert_eq!(block.kind, BlockType::Video);
            assert_eq!(
                block.data(keys::SRC),
                Some("//www.youtube.com/embed/dQw4w9WgXcQ")
            );
        }
        assert!(youtube_embed("https://example.com/watch?v=dQw4w9WgXcQ").is_none());
        assert!(youtube_embed("https://youtu.be/short").is_none());
    }

    #[test]
    fn test_vimeo_url() {
        let block = vimeo_embed("https://vimeo.com/channels/staffpicks/76979871").unwrap();
        assert_eq!(block.data(keys::SRC), Some("//player.vimeo.com/video/76979871"));
        assert!(vimeo_embed("https://vimeo.com/about").is_none());
    }

    #[test]
    fn test_mixcloud_url_is_encoded() {
        let block = mixcloud_embed("https://www.mixcloud.com/someone/a-show/").unwrap();
        assert_eq!(block.kind, BlockType::Audio);
        assert_eq!(
            block.data(keys::SRC),
            Some(
                "https://www.mixcloud.com/widget/iframe/?hide_cover=1&light=1&hide_artwork=1\
                 &feed=https%3A%2F%2Fwww.mixcloud.com%2Fsomeone%2Fa-show%2F"
            )
        );
        assert!(mixcloud_embed("https://www.mixcloud.com/").is_none());
    }

    #[test]
    fn test_soundcloud_url_is_encoded() {
        let block = soundcloud_embed("https://soundcloud.com/artist/track").unwrap();
        let src = block.data(keys::SRC).unwrap();
        assert!(src.starts_with(SOUNDCLOUD_EMBED_PREFIX));
        assert!(src.ends_with("&url=https%3A%2F%2Fsoundcloud.com%2Fartist%2Ftrack"));
        assert_eq!(classify_src(src), Some(EmbedKind::Audio));
    }

    #[test]
    fn test_giphy_html5_url() {
        let block = giphy_image("https://giphy.com/gifs/funny-cat-3oEjI6SIIHBdRxXI40/html5").unwrap();
        assert_eq!(block.kind, BlockType::Image);
        assert_eq!(
            block.data(keys::SRC),
            Some("https://media.giphy.com/media/3oEjI6SIIHBdRxXI40/giphy.gif")
        );
        assert!(giphy_image("https://giphy.com/gifs/funny-cat-3oEjI6SIIHBdRxXI40").is_none());
    }

    #[test]
    fn test_validators() {
        assert!(validate::is_text("a"));
        assert!(!validate::is_text(""));
        assert!(validate::is_url("https://x"));
        assert!(!validate::is_url("ftp://x"));
        assert!(validate::is_giphy_url("https://giphy.com/gifs/funny-cat-3oEjI6SIIHBdRxXI40"));
        assert!(validate::is_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
        assert!(validate::is_vimeo_url("https://player.vimeo.com/video/76979871"));
        assert!(validate::is_mixcloud_url("https://www.mixcloud.com/someone/a-show/"));
        assert!(!validate::is_mixcloud_url("https://www.mixcloud.com/"));
    }
}
