//! Classification of platform paper sizes into standard media names

use crate::constants::{DEFAULT_MATCH_TOLERANCE, PAPER_KIND_COUNT};
use crate::media::MediaSizeName;
use crate::registry::{MediaSizeRegistry, StandardMediaSizes};
use crate::size::{MicrometerSize, PaperDimensions};
use tracing::{debug, trace};

/// Standard media for platform paper kinds 1..=44, indexed by `kind - 1`.
///
/// Several entries are approximations that callers may already depend on:
/// Statement is reported as `Invoice`, the fanfold sizes as envelopes or
/// `Folio`, and the "small" variants as their full-size counterparts.
pub static PAPER_KIND_MEDIA: [Option<MediaSizeName>; PAPER_KIND_COUNT] = {
    use MediaSizeName::*;
    [
        Some(NaLetter),           // 1 Letter
        Some(NaLetter),           // 2 LetterSmall
        Some(Tabloid),            // 3
        Some(Ledger),             // 4
        Some(NaLegal),            // 5 Legal
        Some(Invoice),            // 6 Statement
        Some(Executive),          // 7
        Some(IsoA3),              // 8
        Some(IsoA4),              // 9
        Some(IsoA4),              // 10 A4Small
        Some(IsoA5),              // 11
        Some(JisB4),              // 12
        Some(JisB5),              // 13
        Some(Folio),              // 14
        Some(Quarto),             // 15
        Some(Na10x14Envelope),    // 16 Standard10x14
        Some(B),                  // 17 Standard11x17
        Some(NaLetter),           // 18 Note
        Some(NaNumber9Envelope),  // 19
        Some(NaNumber10Envelope), // 20
        Some(NaNumber11Envelope), // 21
        Some(NaNumber12Envelope), // 22
        Some(NaNumber14Envelope), // 23
        Some(C),                  // 24 CSheet
        Some(D),                  // 25 DSheet
        Some(E),                  // 26 ESheet
        Some(IsoDesignatedLong),  // 27 DLEnvelope
        Some(IsoC5),              // 28
        Some(IsoC3),              // 29
        Some(IsoC4),              // 30
        Some(IsoC6),              // 31
        Some(ItalyEnvelope),      // 32 C65Envelope
        Some(IsoB4),              // 33 B4Envelope
        Some(IsoB5),              // 34 B5Envelope
        Some(IsoB6),              // 35 B6Envelope
        Some(ItalyEnvelope),      // 36
        Some(MonarchEnvelope),    // 37
        Some(PersonalEnvelope),   // 38
        Some(Na10x15Envelope),    // 39 USStandardFanfold
        Some(Na9x12Envelope),     // 40 GermanStandardFanfold
        Some(Folio),              // 41 GermanLegalFanfold
        Some(IsoB4),              // 42 IsoB4
        Some(JapanesePostcard),   // 43
        Some(Na9x11Envelope),     // 44 Standard9x11
    ]
};

/// Media name predefined for a platform paper kind, if any
pub fn media_for_paper_kind(kind: i32) -> Option<MediaSizeName> {
    let index = usize::try_from(kind).ok()?.checked_sub(1)?;
    PAPER_KIND_MEDIA.get(index).copied().flatten()
}

/// A paper size record as exposed by a platform printing API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperSize {
    /// Platform paper kind; custom sizes use 0 or an out-of-range value
    pub kind: i32,
    /// Display name given by the platform
    pub name: String,
    /// Size in hundredths of an inch
    pub dimensions: PaperDimensions,
}

impl PaperSize {
    /// Create a new paper size record
    pub fn new(kind: i32, name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            kind,
            name: name.into(),
            dimensions: PaperDimensions::new(width, height),
        }
    }

    /// Create a custom (kind 0) paper size
    pub fn custom(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self::new(0, name, width, height)
    }
}

/// Tuning for dimensional matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Per-axis tolerance in micrometers, compared with strict less-than
    pub tolerance: i32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_MATCH_TOLERANCE,
        }
    }
}

impl ClassifierConfig {
    /// Set the per-axis tolerance in micrometers
    pub fn with_tolerance(mut self, tolerance: i32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Maps platform paper sizes to standard media names.
///
/// The platform code is authoritative: a predefined kind returns its table
/// entry without looking at the dimensions. Everything else is matched by
/// size against the registry.
#[derive(Debug, Clone)]
pub struct PaperClassifier<R = StandardMediaSizes> {
    registry: R,
    config: ClassifierConfig,
}

impl PaperClassifier<StandardMediaSizes> {
    /// Create a classifier over the built-in reference sizes
    pub fn new() -> Self {
        Self::with_registry(StandardMediaSizes)
    }
}

impl Default for PaperClassifier<StandardMediaSizes> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: MediaSizeRegistry> PaperClassifier<R> {
    /// Create a classifier over a custom registry
    pub fn with_registry(registry: R) -> Self {
        Self {
            registry,
            config: ClassifierConfig::default(),
        }
    }

    /// Set the matching configuration
    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the per-axis tolerance in micrometers
    pub fn with_tolerance(mut self, tolerance: i32) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// The matching configuration in use
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// The registry reference sizes come from
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Classify a paper kind and size (hundredths of an inch)
    pub fn classify(&self, kind: i32, dimensions: PaperDimensions) -> Option<MediaSizeName> {
        if let Some(name) = media_for_paper_kind(kind) {
            trace!("Paper kind {} is predefined as {}", kind, name);
            return Some(name);
        }
        self.match_size(dimensions.to_micrometers())
    }

    /// Classify a platform paper record
    pub fn classify_paper(&self, paper: &PaperSize) -> Option<MediaSizeName> {
        self.classify(paper.kind, paper.dimensions)
    }

    /// Find the first standard media within tolerance of `size`.
    ///
    /// `size` may be in either orientation.
    pub fn match_size(&self, size: MicrometerSize) -> Option<MediaSizeName> {
        let size = size.to_portrait();
        let found = MediaSizeName::ALL.into_iter().find(|&name| {
            self.registry
                .reference_size(name)
                .is_some_and(|reference| size.within(reference, self.config.tolerance))
        });
        match found {
            Some(name) => trace!("Size {:?} matched {}", size, name),
            None => debug!("Size {:?} has no standard equivalent", size),
        }
        found
    }

    /// Standard media available from a list of platform papers.
    ///
    /// Keeps the first occurrence of each name in input order. Returns `None`
    /// when no paper maps to a standard size.
    pub fn supported_media(&self, papers: &[PaperSize]) -> Option<Vec<MediaSizeName>> {
        let mut media = Vec::new();
        for paper in papers {
            if let Some(name) = self.classify_paper(paper) {
                if !media.contains(&name) {
                    media.push(name);
                }
            }
        }
        debug!(
            "{} of {} papers map to standard media",
            media.len(),
            papers.len()
        );
        (!media.is_empty()).then_some(media)
    }
}

/// Classify with the built-in reference sizes and default tolerance
pub fn classify(kind: i32, dimensions: PaperDimensions) -> Option<MediaSizeName> {
    PaperClassifier::new().classify(kind, dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::standard_size;

    fn no_reference(_: MediaSizeName) -> Option<MicrometerSize> {
        None
    }

    fn a4_only(name: MediaSizeName) -> Option<MicrometerSize> {
        (name == MediaSizeName::IsoA4).then(|| MicrometerSize::new(210_000, 297_000))
    }

    #[test]
    fn test_predefined_kind_ignores_dimensions() {
        for kind in 1..=PAPER_KIND_COUNT as i32 {
            let expected = PAPER_KIND_MEDIA[(kind - 1) as usize];
            assert_eq!(classify(kind, PaperDimensions::new(0, 0)), expected);
            assert_eq!(classify(kind, PaperDimensions::new(-5, 100_000)), expected);
        }
    }

    #[test]
    fn test_a4_kind_wins_over_zero_size() {
        assert_eq!(classify(9, PaperDimensions::new(0, 0)), Some(MediaSizeName::IsoA4));
        assert_eq!(classify(8, PaperDimensions::new(0, 0)), Some(MediaSizeName::IsoA3));
    }

    #[test]
    fn test_predefined_kind_wins_over_closer_dimensional_match() {
        // Letter-sized paper reported as A4 stays A4
        let letter = PaperDimensions::new(850, 1100);
        assert_eq!(classify(9, letter), Some(MediaSizeName::IsoA4));
        assert_eq!(classify(0, letter), Some(MediaSizeName::NaLetter));
    }

    #[test]
    fn test_predefined_kind_is_not_reoriented() {
        let classifier = PaperClassifier::with_registry(no_reference);
        assert_eq!(
            classifier.classify(20, PaperDimensions::new(950, 412)),
            Some(MediaSizeName::NaNumber10Envelope)
        );
    }

    #[test]
    fn test_custom_a4_matches_by_size() {
        let classifier = PaperClassifier::with_registry(a4_only);
        assert_eq!(
            classifier.classify(0, PaperDimensions::new(827, 1169)),
            Some(MediaSizeName::IsoA4)
        );
        assert_eq!(
            classify(0, PaperDimensions::new(827, 1169)),
            Some(MediaSizeName::IsoA4)
        );
    }

    #[test]
    fn test_custom_kind_value_does_not_matter() {
        let dims = PaperDimensions::new(827, 1169);
        for kind in [0, -1, 45, 256, i32::MIN, i32::MAX] {
            assert_eq!(classify(kind, dims), Some(MediaSizeName::IsoA4));
        }
        for kind in [0, 45, 300] {
            assert_eq!(classify(kind, PaperDimensions::new(100, 100)), None);
        }
    }

    #[test]
    fn test_fallback_is_orientation_independent() {
        let samples = [(827, 1169), (1169, 827), (850, 1100), (412, 950), (100, 100), (1700, 2200)];
        for (w, h) in samples {
            assert_eq!(
                classify(0, PaperDimensions::new(w, h)),
                classify(0, PaperDimensions::new(h, w)),
                "{w}x{h}"
            );
        }
        assert_eq!(classify(0, PaperDimensions::new(1100, 850)), Some(MediaSizeName::NaLetter));
    }

    #[test]
    fn test_exact_reference_size_matches() {
        // inch-based sizes are exact in hundredths of an inch
        for (w, h, name) in [
            (850, 1100, MediaSizeName::NaLetter),
            (850, 1400, MediaSizeName::NaLegal),
            (1000, 1500, MediaSizeName::Na10x15Envelope),
            (900, 1200, MediaSizeName::Na9x12Envelope),
        ] {
            let size = PaperDimensions::new(w, h).to_micrometers();
            assert_eq!(size, standard_size(name));
            assert_eq!(classify(0, PaperDimensions::new(w, h)), Some(name));
        }
    }

    #[test]
    fn test_tolerance_is_strict_on_each_axis() {
        // 827 x 1169 is 210058 x 296926 micrometers
        let near = |dx: i32, dy: i32| {
            move |name: MediaSizeName| {
                (name == MediaSizeName::IsoA4).then(|| MicrometerSize::new(210_058 + dx, 296_926 + dy))
            }
        };
        let dims = PaperDimensions::new(827, 1169);
        assert_eq!(
            PaperClassifier::with_registry(near(499, -499)).classify(0, dims),
            Some(MediaSizeName::IsoA4)
        );
        assert_eq!(PaperClassifier::with_registry(near(500, 0)).classify(0, dims), None);
        assert_eq!(PaperClassifier::with_registry(near(0, -500)).classify(0, dims), None);
        assert_eq!(PaperClassifier::with_registry(near(10_000, 0)).classify(0, dims), None);
    }

    #[test]
    fn test_custom_tolerance() {
        let dims = PaperDimensions::new(827, 1169);
        let strict = PaperClassifier::with_registry(a4_only).with_tolerance(50);
        assert_eq!(strict.classify(0, dims), None);
        let loose = PaperClassifier::with_registry(a4_only)
            .with_config(ClassifierConfig::default().with_tolerance(100));
        assert_eq!(loose.classify(0, dims), Some(MediaSizeName::IsoA4));
    }

    #[test]
    fn test_no_match_without_reference() {
        let empty = PaperClassifier::with_registry(no_reference);
        assert_eq!(empty.classify(0, PaperDimensions::new(827, 1169)), None);
        assert_eq!(classify(0, PaperDimensions::new(100, 100)), None);
    }

    #[test]
    fn test_custom_folio_matches_by_size() {
        assert_eq!(classify(0, PaperDimensions::new(850, 1300)), Some(MediaSizeName::Folio));
        assert_eq!(classify(0, PaperDimensions::new(1300, 850)), Some(MediaSizeName::Folio));
        let papers = vec![PaperSize::custom("Folio", 850, 1300)];
        assert_eq!(
            PaperClassifier::new().supported_media(&papers),
            Some(vec![MediaSizeName::Folio])
        );
    }

    #[test]
    fn test_first_canonical_name_wins_for_shared_size() {
        assert_eq!(classify(0, PaperDimensions::new(1100, 1700)), Some(MediaSizeName::Tabloid));
    }

    #[test]
    fn test_negative_dimensions_do_not_match() {
        assert_eq!(classify(-3, PaperDimensions::new(-827, -1169)), None);
    }

    #[test]
    fn test_supported_media_dedupes_in_order() {
        let papers = vec![
            PaperSize::new(9, "A4", 827, 1169),
            PaperSize::new(1, "Letter", 850, 1100),
            PaperSize::new(10, "A4 Small", 827, 1169),
            PaperSize::custom("Square", 100, 100),
            PaperSize::custom("Legal-ish", 851, 1400),
            PaperSize::new(2, "Letter Small", 850, 1100),
        ];
        assert_eq!(
            PaperClassifier::new().supported_media(&papers),
            Some(vec![MediaSizeName::IsoA4, MediaSizeName::NaLetter, MediaSizeName::NaLegal])
        );
    }

    #[test]
    fn test_supported_media_empty() {
        let papers = vec![PaperSize::custom("Label", 200, 300)];
        assert_eq!(PaperClassifier::new().supported_media(&papers), None);
        assert_eq!(PaperClassifier::new().supported_media(&[]), None);
    }

    #[test]
    fn test_out_of_range_kinds() {
        assert_eq!(media_for_paper_kind(0), None);
        assert_eq!(media_for_paper_kind(45), None);
        assert_eq!(media_for_paper_kind(-1), None);
        assert_eq!(media_for_paper_kind(1), Some(MediaSizeName::NaLetter));
        assert_eq!(media_for_paper_kind(44), Some(MediaSizeName::Na9x11Envelope));
    }
}
