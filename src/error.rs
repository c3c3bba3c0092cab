//! Error types for the lopdf-media library

use crate::media::MediaSizeName;
use thiserror::Error;

/// Result type alias using MediaError
pub type Result<T> = std::result::Result<T, MediaError>;

/// Errors that can occur when working with media sizes
///
/// Classification itself never fails; a size without a standard
/// equivalent is reported as `None`.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Page not found
    #[error("Page with ID {0:?} not found")]
    PageNotFound(lopdf::ObjectId),

    /// Page exists but its dictionary is unusable
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// The registry has no reference dimensions for a media name
    #[error("No reference size for media {0}")]
    MissingReferenceSize(MediaSizeName),

    /// Media keyword did not name a known standard size
    #[error("Unknown media name: {0:?}")]
    UnknownMediaName(String),

    /// A print service needs a non-empty printer name
    #[error("Printer name must not be empty")]
    InvalidPrinterName,
}
