//! Conversion between HTML and the [`Document`] tree.
//!
//! The two directions are a near-inverse pair: deserializing the output of
//! [`serialize`] gives back the same document for anything the editor can
//! produce, but serializing a deserialized string does not promise the
//! original bytes (attribute order, `<iframe>` for both audio and video).
//!
//! ```
//! use slate_html::{deserialize, serialize};
//!
//! let doc = deserialize(r#"<p>Hello <b>world</b></p>"#);
//! assert_eq!(serialize(&doc), "<p>Hello <b>world</b></p>");
//! ```

mod from_html;
mod to_html;

use crate::diagnostics::Diagnostics;
use crate::model::Document;

pub use from_html::deserialize_html;
pub use to_html::serialize_document;

/// HTML serializer for editor documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML into a document. Warnings are only logged.
    pub fn deserialize(&self, html: &str) -> Document {
        self.deserialize_with(html, &mut Diagnostics::new())
    }

    /// Parse HTML into a document, collecting warnings into `diag`.
    pub fn deserialize_with(&self, html: &str, diag: &mut Diagnostics) -> Document {
        deserialize_html(html, diag)
    }

    /// Render a document as HTML.
    pub fn serialize(&self, doc: &Document) -> String {
        serialize_document(doc)
    }
}

/// [`HtmlSerializer::deserialize`] on a default serializer.
pub fn deserialize(html: &str) -> Document {
    HtmlSerializer::new().deserialize(html)
}

/// [`HtmlSerializer::serialize`] on a default serializer.
pub fn serialize(doc: &Document) -> String {
    HtmlSerializer::new().serialize(doc)
}
