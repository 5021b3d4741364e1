//! Warning side-channel for recoverable anomalies.
//!
//! Nothing in the normalizer or serializer fails on bad input. When it has to
//! skip or drop something it records a [`Warning`] here and logs it through
//! `tracing`, then carries on.

use thiserror::Error;

/// A recoverable anomaly found while normalizing or deserializing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// `<pre>` openings and closings do not pair up; newline stripping was skipped.
    #[error("<pre> tags are not balanced; newlines were left in place")]
    UnbalancedPre,

    /// An iframe whose `src` matches no known audio or video provider.
    #[error("cannot tell whether iframe is audio or video: {src:?}")]
    UnknownEmbed { src: String },

    /// A mark holding both block and non-block content inside a `p` or `pre`.
    #[error("<{tag}> holds both block and non-block content; left unmodified")]
    MixedMarkContent { tag: String },
}

/// Collects warnings raised during one or more calls.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and log it.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(target: "slate_html", "{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Take the collected warnings, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}
