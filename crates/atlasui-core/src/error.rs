//! Error types for atlasui.

use thiserror::Error;

/// The main error type for atlasui operations.
#[derive(Error, Debug)]
pub enum UiError {
    /// The atlas has no room left for an image of the given size.
    #[error("atlas is full: no room for a {width}x{height} image")]
    AtlasFull { width: u32, height: u32 },

    /// Raw image data does not match its declared dimensions.
    #[error("invalid image data: expected {expected} bytes, got {actual}")]
    InvalidImageData { expected: usize, actual: usize },

    /// The vertex layout reported by the GUI library is not usable.
    #[error("invalid vertex layout: {0}")]
    InvalidVertexLayout(String),

    /// The GUI library reported an index width we cannot decode.
    #[error("unsupported index size: {0} bytes")]
    UnsupportedIndexSize(usize),

    /// A raw buffer is not a whole number of elements.
    #[error("buffer size mismatch: {len} bytes is not a multiple of {element_size}")]
    BufferSizeMismatch { len: usize, element_size: usize },

    /// Rendering error reported by the host.
    #[error("render error: {0}")]
    Render(String),
}

/// A specialized Result type for atlasui operations.
pub type Result<T> = std::result::Result<T, UiError>;
