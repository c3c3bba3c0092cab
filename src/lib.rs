//! Standard print media for platform paper sizes, built on lopdf
//!
//! This library maps paper sizes reported by a printing platform onto a closed
//! set of standardized media names, reports printer capabilities in terms of
//! those names, and sizes lopdf pages by media.

use tracing::trace;

pub mod classifier;
pub mod constants;
pub mod error;
pub mod media;
pub mod pdf;
pub mod registry;
pub mod service;
pub mod size;

pub use classifier::{ClassifierConfig, PaperClassifier, PaperSize, classify, media_for_paper_kind};
pub use error::{MediaError, Result};
pub use media::MediaSizeName;
pub use pdf::PageMedia;
pub use registry::{MediaSizeRegistry, StandardMediaSizes, standard_size};
pub use service::{AttributeCategory, AttributeValue, DocFlavor, PrintService, PrinterSettings};
pub use size::{MicrometerSize, Orientation, PaperDimensions};

/// Look up a media name by its IPP keyword and return its reference size
pub fn reference_size_for_keyword(keyword: &str) -> Result<MicrometerSize> {
    let name: MediaSizeName = keyword.parse()?;
    let size = standard_size(name);
    trace!("Keyword {:?} is {} at {:?}", keyword, name, size);
    Ok(size)
}
