//! Reference dimensions for standard media names

use crate::media::MediaSizeName;
use crate::size::MicrometerSize;

/// Source of reference dimensions used for dimensional matching.
///
/// Sizes are in portrait orientation (width <= height).
pub trait MediaSizeRegistry {
    /// Reference size of `name` in micrometers, if known
    fn reference_size(&self, name: MediaSizeName) -> Option<MicrometerSize>;
}

/// The built-in ISO, JIS and North American reference sizes
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMediaSizes;

impl MediaSizeRegistry for StandardMediaSizes {
    fn reference_size(&self, name: MediaSizeName) -> Option<MicrometerSize> {
        Some(standard_size(name))
    }
}

impl<F> MediaSizeRegistry for F
where
    F: Fn(MediaSizeName) -> Option<MicrometerSize>,
{
    fn reference_size(&self, name: MediaSizeName) -> Option<MicrometerSize> {
        self(name)
    }
}

/// Reference size of a standard media name
pub fn standard_size(name: MediaSizeName) -> MicrometerSize {
    use MediaSizeName::*;
    let inch = MicrometerSize::from_thousandths_inch;
    let mm = MicrometerSize::from_mm;
    match name {
        NaLetter => inch(8500, 11000),
        Tabloid | Ledger | B => inch(11000, 17000),
        NaLegal => inch(8500, 14000),
        Invoice => inch(5500, 8500),
        Executive => inch(7250, 10500),
        IsoA3 => mm(297, 420),
        IsoA4 => mm(210, 297),
        IsoA5 => mm(148, 210),
        JisB4 => mm(257, 364),
        JisB5 => mm(182, 257),
        Folio => inch(8500, 13000),
        Quarto => inch(8500, 10830),
        Na10x14Envelope => inch(10000, 14000),
        NaNumber9Envelope => inch(3875, 8875),
        NaNumber10Envelope => inch(4125, 9500),
        NaNumber11Envelope => inch(4500, 10375),
        NaNumber12Envelope => inch(4750, 11000),
        NaNumber14Envelope => inch(5000, 11500),
        C => inch(17000, 22000),
        D => inch(22000, 34000),
        E => inch(34000, 44000),
        IsoDesignatedLong => mm(110, 220),
        IsoC5 => mm(162, 229),
        IsoC3 => mm(324, 458),
        IsoC4 => mm(229, 324),
        IsoC6 => mm(114, 162),
        ItalyEnvelope => mm(110, 230),
        IsoB4 => mm(250, 353),
        IsoB5 => mm(176, 250),
        IsoB6 => mm(125, 176),
        MonarchEnvelope => inch(3870, 7500),
        PersonalEnvelope => inch(3625, 6500),
        Na10x15Envelope => inch(10000, 15000),
        Na9x12Envelope => inch(9000, 12000),
        JapanesePostcard => mm(100, 148),
        Na9x11Envelope => inch(9000, 11000),
    }
}
