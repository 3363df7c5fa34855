use thiserror::Error;

/// Errors surfaced by the scene engine.
///
/// The errors are a document that cannot be loaded or written, an operation
/// the shape's kind does not support, an export path with an unknown image
/// extension, and I/O. Everything else an
/// interactive gesture can produce (an identity that is no longer in the
/// scene, a polygon closed after two clicks, a click without a drag) is a
/// silent no-op reported through `Option` or an empty result instead.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unsupported operation: cannot {operation} a {kind}")]
    UnsupportedOperation {
        operation: &'static str,
        kind: &'static str,
    },

    #[error("Unsupported export format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl SketchError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }

    /// True for errors that leave nothing written or loaded because the
    /// filesystem or encoder failed.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Image(_))
    }
}

pub type Result<T> = std::result::Result<T, SketchError>;
