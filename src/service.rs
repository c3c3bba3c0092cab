//! Print-service capability reporting over a printer settings snapshot

use crate::classifier::{PaperClassifier, PaperSize, media_for_paper_kind};
use crate::constants::{DEFAULT_DESTINATION, DEFAULT_JOB_NAME};
use crate::error::{MediaError, Result};
use crate::media::MediaSizeName;
use crate::size::Orientation;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::{debug, instrument, trace};

/// Duplex setting reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplexMode {
    /// The printer's own default, treated as one-sided
    #[default]
    Default,
    Simplex,
    Horizontal,
    Vertical,
}

/// Printer resolution in dots per inch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub x_dpi: i32,
    pub y_dpi: i32,
}

impl Resolution {
    pub fn new(x_dpi: i32, y_dpi: i32) -> Self {
        Self { x_dpi, y_dpi }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(600, 600)
    }
}

/// Printable rectangle of a page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PrintableArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PrintableArea {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert from hundredths of an inch to inches
    pub fn hundredths_to_inches(self) -> Self {
        Self::new(
            self.x / 100.0,
            self.y / 100.0,
            self.width / 100.0,
            self.height / 100.0,
        )
    }
}

/// Snapshot of a printer's settings as read from the platform
#[derive(Debug, Clone)]
pub struct PrinterSettings {
    /// Default page prints in color
    pub color: bool,
    pub landscape: bool,
    pub copies: i32,
    pub maximum_copies: i32,
    pub collate: bool,
    pub can_duplex: bool,
    pub duplex: DuplexMode,
    pub resolutions: Vec<Resolution>,
    pub default_resolution: Resolution,
    pub default_paper: PaperSize,
    pub paper_sizes: Vec<PaperSize>,
    /// Printable area of the default page in hundredths of an inch
    pub printable_area: PrintableArea,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        let letter = PaperSize::new(1, "Letter", 850, 1100);
        Self {
            color: false,
            landscape: false,
            copies: 1,
            maximum_copies: 1,
            collate: false,
            can_duplex: false,
            duplex: DuplexMode::Default,
            resolutions: Vec::new(),
            default_resolution: Resolution::default(),
            paper_sizes: vec![letter.clone()],
            default_paper: letter,
            printable_area: PrintableArea::new(25.0, 25.0, 800.0, 1050.0),
        }
    }
}

/// Kind of document a job sends to the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocFlavor {
    /// Paginated content rendered by the service
    Pageable,
    /// Page-at-a-time content rendered by the service
    Printable,
    Image(ImageFormat),
    /// Any other MIME type
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Png,
}

impl DocFlavor {
    pub fn is_service_formatted(&self) -> bool {
        matches!(self, Self::Pageable | Self::Printable)
    }

    fn is_image_based(&self) -> bool {
        self.is_service_formatted() || matches!(self, Self::Image(_))
    }
}

const SUPPORTED_FLAVORS: [DocFlavor; 2] = [DocFlavor::Pageable, DocFlavor::Printable];

/// Attribute categories a print service can report on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeCategory {
    JobName,
    RequestingUserName,
    Copies,
    Destination,
    OrientationRequested,
    PageRanges,
    Media,
    MediaPrintableArea,
    Fidelity,
    SheetCollate,
    AlternateMedia,
    Chromaticity,
    Sides,
    PrinterResolution,
    ColorSupported,
    PrinterName,
}

/// Categories every service supports
const BASE_CATEGORIES: [AttributeCategory; 12] = [
    AttributeCategory::JobName,
    AttributeCategory::RequestingUserName,
    AttributeCategory::Copies,
    AttributeCategory::Destination,
    AttributeCategory::OrientationRequested,
    AttributeCategory::PageRanges,
    AttributeCategory::Media,
    AttributeCategory::MediaPrintableArea,
    AttributeCategory::Fidelity,
    AttributeCategory::SheetCollate,
    AttributeCategory::AlternateMedia,
    AttributeCategory::Chromaticity,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chromaticity {
    Monochrome,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sides {
    OneSided,
    TwoSidedLongEdge,
    TwoSidedShortEdge,
}

/// A concrete attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    JobName(String),
    RequestingUserName(String),
    Copies(i32),
    CopiesSupported(RangeInclusive<i32>),
    Destination(PathBuf),
    OrientationRequested(Orientation),
    PageRanges(RangeInclusive<i32>),
    Media(MediaSizeName),
    /// Platform paper with no standard equivalent, by display name
    CustomMedia(String),
    MediaPrintableArea(PrintableArea),
    Fidelity(bool),
    SheetCollate(bool),
    Chromaticity(Chromaticity),
    Sides(Sides),
    PrinterResolution(Resolution),
    ColorSupported(bool),
    PrinterName(String),
}

impl AttributeValue {
    /// The category this value belongs to
    pub fn category(&self) -> AttributeCategory {
        match self {
            Self::JobName(_) => AttributeCategory::JobName,
            Self::RequestingUserName(_) => AttributeCategory::RequestingUserName,
            Self::Copies(_) | Self::CopiesSupported(_) => AttributeCategory::Copies,
            Self::Destination(_) => AttributeCategory::Destination,
            Self::OrientationRequested(_) => AttributeCategory::OrientationRequested,
            Self::PageRanges(_) => AttributeCategory::PageRanges,
            Self::Media(_) | Self::CustomMedia(_) => AttributeCategory::Media,
            Self::MediaPrintableArea(_) => AttributeCategory::MediaPrintableArea,
            Self::Fidelity(_) => AttributeCategory::Fidelity,
            Self::SheetCollate(_) => AttributeCategory::SheetCollate,
            Self::Chromaticity(_) => AttributeCategory::Chromaticity,
            Self::Sides(_) => AttributeCategory::Sides,
            Self::PrinterResolution(_) => AttributeCategory::PrinterResolution,
            Self::ColorSupported(_) => AttributeCategory::ColorSupported,
            Self::PrinterName(_) => AttributeCategory::PrinterName,
        }
    }
}

fn all_pages() -> RangeInclusive<i32> {
    1..=i32::MAX
}

/// A named printer exposing its capabilities as standard attributes
#[derive(Debug, Clone)]
pub struct PrintService {
    name: String,
    settings: PrinterSettings,
    classifier: PaperClassifier,
}

impl PrintService {
    /// Create a service for a printer
    pub fn new(name: impl Into<String>, settings: PrinterSettings) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MediaError::InvalidPrinterName);
        }
        debug!(
            "Creating print service {:?} with {} paper sizes",
            name,
            settings.paper_sizes.len()
        );
        Ok(Self {
            name,
            settings,
            classifier: PaperClassifier::new(),
        })
    }

    /// Use a custom classifier for media reporting
    pub fn with_classifier(mut self, classifier: PaperClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Printer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Settings snapshot the service reports from
    pub fn settings(&self) -> &PrinterSettings {
        &self.settings
    }

    /// Categories this printer supports
    pub fn supported_categories(&self) -> Vec<AttributeCategory> {
        let mut categories = BASE_CATEGORIES.to_vec();
        if self.settings.can_duplex {
            categories.push(AttributeCategory::Sides);
        }
        if !self.settings.resolutions.is_empty() {
            categories.push(AttributeCategory::PrinterResolution);
        }
        categories
    }

    /// Whether `category` is among the supported categories
    pub fn is_category_supported(&self, category: AttributeCategory) -> bool {
        self.supported_categories().contains(&category)
    }

    /// Document flavors the printer accepts
    pub fn supported_flavors(&self) -> Vec<DocFlavor> {
        SUPPORTED_FLAVORS.to_vec()
    }

    /// Whether the printer accepts `flavor`
    pub fn is_flavor_supported(&self, flavor: &DocFlavor) -> bool {
        SUPPORTED_FLAVORS.contains(flavor)
    }

    /// Service-level attribute (printer name or color support)
    pub fn attribute(&self, category: AttributeCategory) -> Option<AttributeValue> {
        match category {
            AttributeCategory::PrinterName => Some(AttributeValue::PrinterName(self.name.clone())),
            AttributeCategory::ColorSupported => {
                Some(AttributeValue::ColorSupported(self.settings.color))
            }
            _ => None,
        }
    }

    /// All service-level attributes
    pub fn service_attributes(&self) -> Vec<AttributeValue> {
        [AttributeCategory::PrinterName, AttributeCategory::ColorSupported]
            .into_iter()
            .filter_map(|category| self.attribute(category))
            .collect()
    }

    /// Default value for a job attribute, or `None` when unsupported
    pub fn default_value(&self, category: AttributeCategory) -> Option<AttributeValue> {
        if !self.is_category_supported(category) {
            trace!("Category {:?} is not supported by {}", category, self.name);
            return None;
        }
        let settings = &self.settings;
        let value = match category {
            AttributeCategory::Copies => {
                AttributeValue::Copies(if settings.copies > 0 { settings.copies } else { 1 })
            }
            AttributeCategory::Chromaticity => AttributeValue::Chromaticity(if settings.color {
                Chromaticity::Color
            } else {
                Chromaticity::Monochrome
            }),
            AttributeCategory::JobName => AttributeValue::JobName(DEFAULT_JOB_NAME.to_string()),
            AttributeCategory::OrientationRequested => {
                AttributeValue::OrientationRequested(if settings.landscape {
                    Orientation::Landscape
                } else {
                    Orientation::Portrait
                })
            }
            AttributeCategory::PageRanges => AttributeValue::PageRanges(all_pages()),
            AttributeCategory::Media => match media_for_paper_kind(settings.default_paper.kind) {
                Some(name) => AttributeValue::Media(name),
                None => AttributeValue::CustomMedia(settings.default_paper.name.clone()),
            },
            AttributeCategory::MediaPrintableArea => {
                AttributeValue::MediaPrintableArea(settings.printable_area.hundredths_to_inches())
            }
            AttributeCategory::Destination => {
                AttributeValue::Destination(PathBuf::from(DEFAULT_DESTINATION))
            }
            AttributeCategory::Sides => AttributeValue::Sides(match settings.duplex {
                DuplexMode::Default | DuplexMode::Simplex => Sides::OneSided,
                DuplexMode::Horizontal => Sides::TwoSidedLongEdge,
                DuplexMode::Vertical => Sides::TwoSidedShortEdge,
            }),
            AttributeCategory::PrinterResolution => {
                AttributeValue::PrinterResolution(settings.default_resolution)
            }
            AttributeCategory::RequestingUserName => {
                AttributeValue::RequestingUserName(current_user_name())
            }
            AttributeCategory::SheetCollate => AttributeValue::SheetCollate(settings.collate),
            AttributeCategory::Fidelity => AttributeValue::Fidelity(false),
            AttributeCategory::AlternateMedia
            | AttributeCategory::ColorSupported
            | AttributeCategory::PrinterName => return None,
        };
        Some(value)
    }

    /// Values the printer accepts for a category.
    ///
    /// `flavor` narrows the answer for categories that depend on the document
    /// kind; `None` means any service-formatted document.
    #[instrument(skip(self), fields(printer = %self.name))]
    pub fn supported_values(
        &self,
        category: AttributeCategory,
        flavor: Option<&DocFlavor>,
    ) -> Option<Vec<AttributeValue>> {
        if !self.is_category_supported(category) {
            return None;
        }
        let service_formatted = flavor.is_none_or(DocFlavor::is_service_formatted);
        let image_based = flavor.is_none_or(DocFlavor::is_image_based);

        match category {
            AttributeCategory::JobName
            | AttributeCategory::RequestingUserName
            | AttributeCategory::Destination => self.default_value(category).map(|v| vec![v]),
            AttributeCategory::Copies => Some(vec![AttributeValue::CopiesSupported(
                1..=self.settings.maximum_copies.max(1),
            )]),
            AttributeCategory::Media => self
                .supported_media()
                .map(|media| media.into_iter().map(AttributeValue::Media).collect()),
            AttributeCategory::PageRanges if service_formatted => {
                Some(vec![AttributeValue::PageRanges(all_pages())])
            }
            AttributeCategory::Fidelity => Some(vec![
                AttributeValue::Fidelity(false),
                AttributeValue::Fidelity(true),
            ]),
            AttributeCategory::Sides if service_formatted => Some(vec![
                AttributeValue::Sides(Sides::OneSided),
                AttributeValue::Sides(Sides::TwoSidedLongEdge),
                AttributeValue::Sides(Sides::TwoSidedShortEdge),
            ]),
            AttributeCategory::SheetCollate if service_formatted => Some(vec![
                AttributeValue::SheetCollate(true),
                AttributeValue::SheetCollate(false),
            ]),
            AttributeCategory::OrientationRequested if image_based => Some(vec![
                AttributeValue::OrientationRequested(Orientation::Portrait),
                AttributeValue::OrientationRequested(Orientation::Landscape),
                AttributeValue::OrientationRequested(Orientation::ReverseLandscape),
            ]),
            AttributeCategory::Chromaticity if image_based => {
                let mut values = vec![AttributeValue::Chromaticity(Chromaticity::Monochrome)];
                if self.settings.color {
                    values.push(AttributeValue::Chromaticity(Chromaticity::Color));
                }
                Some(values)
            }
            _ => None,
        }
    }

    /// Standard media the printer's paper list maps to
    pub fn supported_media(&self) -> Option<Vec<MediaSizeName>> {
        self.classifier.supported_media(&self.settings.paper_sizes)
    }
}

impl fmt::Display for PrintService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Printer : {}", self.name)
    }
}

impl PartialEq for PrintService {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PrintService {}

fn current_user_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_default()
}
