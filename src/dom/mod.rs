//! Parsed HTML tree used by the normalizer and the deserializer.
//!
//! Input is always parsed as a full document the way a browser's
//! `DOMParser` does it, so a fragment ends up under `<body>`. [`inner_html`]
//! turns any subtree back into markup.

mod arena;
mod serialize;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute};
pub use serialize::{escape_attr, escape_text, inner_html};
pub use tree_sink::{ArenaSink, NodeHandle};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse an HTML string into an arena DOM.
///
/// Never fails: html5ever's error recovery handles malformed input.
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    let result = parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes());
    result.into_dom()
}
