//! # slate-html
//!
//! HTML normalization and HTML/document conversion for a Slate-style
//! rich-text editor.
//!
//! ## Features
//!
//! - Normalize pasted or stored HTML into a shape the editor schema accepts
//! - Deserialize HTML into a typed [`Document`] tree
//! - Serialize a [`Document`] back into semantic HTML
//! - Recognize audio/video embeds by iframe source and build them from URLs
//!
//! ## Quick Start
//!
//! ```
//! use slate_html::{deserialize, normalize, serialize};
//!
//! let html = normalize(r#"<a href="x">before<img src="y">after</a>"#);
//! assert_eq!(html, r#"<a href="x">before</a><img src="y"><a href="x">after</a>"#);
//!
//! let doc = deserialize(&html);
//! assert_eq!(deserialize(&serialize(&doc)), doc);
//! ```
//!
//! ## Warnings
//!
//! Nothing here fails on bad input. Anomalies (unbalanced `<pre>`, an iframe
//! from an unknown provider, a mark mixing text and blocks) are logged with
//! `tracing` and, through the `*_with` variants, collected in a
//! [`Diagnostics`]:
//!
//! ```
//! use slate_html::{Diagnostics, HtmlSerializer, Warning};
//!
//! let mut diag = Diagnostics::new();
//! HtmlSerializer::new().deserialize_with(r#"<iframe src="https://example.com"></iframe>"#, &mut diag);
//! assert!(matches!(diag.warnings(), [Warning::UnknownEmbed { .. }]));
//! ```

pub mod convert;
pub mod diagnostics;
pub mod dom;
pub mod embed;
pub mod error;
pub mod format;
pub mod model;
pub mod normalize;
pub mod schema;
pub mod serialize;

pub use convert::{Config, Converter};
pub use diagnostics::{Diagnostics, Warning};
pub use embed::{EmbedKind, classify_src};
pub use error::{Error, Result};
pub use model::{
    Block, BlockType, Data, Document, Inline, InlineType, Mark, MarkType, Node, Text,
};
pub use normalize::{normalize, normalize_with};
pub use schema::{
    MIXCLOUD_EMBED_PREFIX, NodeClass, SOUNDCLOUD_EMBED_PREFIX, VIMEO_EMBED_PREFIX,
    YOUTUBE_EMBED_PREFIX, keys,
};
pub use serialize::{HtmlSerializer, deserialize, serialize};
