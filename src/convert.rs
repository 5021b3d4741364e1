//! Editor-facing load / paste / save entry points.
//!
//! Wraps the normalizer and the serializer with the choices an editor makes
//! around them: whether stored or pasted HTML is normalized first, and how an
//! empty document is saved.

use crate::diagnostics::Diagnostics;
use crate::model::Document;
use crate::normalize::normalize_with;
use crate::serialize::HtmlSerializer;

/// What an empty document serializes to.
const EMPTY_DOCUMENT_HTML: &str = "<p></p>";

/// Configuration for [`Converter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Normalize stored HTML before loading it. Default is false: stored
    /// values were produced by [`Converter::save`] and are already clean.
    pub normalize_value: bool,
    /// Normalize pasted HTML before inserting it. Default is true.
    pub normalize_pasted_value: bool,
    /// Save an empty document as `""` instead of `<p></p>`. Default is true.
    pub empty_as_blank: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize_value: false,
            normalize_pasted_value: true,
            empty_as_blank: true,
        }
    }
}

/// Converts between stored HTML and editor documents.
///
/// # Example
///
/// ```
/// use slate_html::{Config, Converter};
///
/// let converter = Converter::new().with_config(Config {
///     normalize_value: true,
///     ..Config::default()
/// });
/// let doc = converter.load("<p></p><p></p>");
/// assert_eq!(converter.save(&doc), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
    serializer: HtmlSerializer,
}

impl Converter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the converter with custom settings.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Turn a stored HTML value into a document.
    pub fn load(&self, html: &str) -> Document {
        self.load_with(html, &mut Diagnostics::new())
    }

    pub fn load_with(&self, html: &str, diag: &mut Diagnostics) -> Document {
        self.read(html, self.config.normalize_value, diag)
    }

    /// Turn pasted HTML into a document fragment.
    pub fn paste(&self, html: &str) -> Document {
        self.paste_with(html, &mut Diagnostics::new())
    }

    pub fn paste_with(&self, html: &str, diag: &mut Diagnostics) -> Document {
        self.read(html, self.config.normalize_pasted_value, diag)
    }

    /// Turn a document into the HTML value to store.
    pub fn save(&self, doc: &Document) -> String {
        let html = self.serializer.serialize(doc);
        if self.config.empty_as_blank && html == EMPTY_DOCUMENT_HTML {
            String::new()
        } else {
            html
        }
    }

    fn read(&self, html: &str, normalize: bool, diag: &mut Diagnostics) -> Document {
        if normalize {
            let normalized = normalize_with(html, diag);
            tracing::debug!(target: "slate_html", before = html, after = %normalized, "normalized");
            self.serializer.deserialize_with(&normalized, diag)
        } else {
            self.serializer.deserialize_with(html, diag)
        }
    }
}
