//! Standardized media size names

use crate::error::{MediaError, Result};
use std::fmt;
use std::str::FromStr;

/// A standardized logical paper or envelope size.
///
/// Names compare by tag only. Declaration order is the canonical order used
/// by dimensional matching, so the first name listed for a given physical size
/// (for example `Tabloid` before `Ledger` and `B`) is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaSizeName {
    NaLetter,
    Tabloid,
    Ledger,
    NaLegal,
    Invoice,
    Executive,
    IsoA3,
    IsoA4,
    IsoA5,
    JisB4,
    JisB5,
    Folio,
    Quarto,
    Na10x14Envelope,
    /// Engineering B (11 x 17 in)
    B,
    NaNumber9Envelope,
    NaNumber10Envelope,
    NaNumber11Envelope,
    NaNumber12Envelope,
    NaNumber14Envelope,
    /// Engineering C (17 x 22 in)
    C,
    /// Engineering D (22 x 34 in)
    D,
    /// Engineering E (34 x 44 in)
    E,
    IsoDesignatedLong,
    IsoC5,
    IsoC3,
    IsoC4,
    IsoC6,
    ItalyEnvelope,
    IsoB4,
    IsoB5,
    IsoB6,
    MonarchEnvelope,
    PersonalEnvelope,
    Na10x15Envelope,
    Na9x12Envelope,
    JapanesePostcard,
    Na9x11Envelope,
}

impl MediaSizeName {
    /// Every name, in canonical order
    pub const ALL: [MediaSizeName; 38] = [
        MediaSizeName::NaLetter,
        MediaSizeName::Tabloid,
        MediaSizeName::Ledger,
        MediaSizeName::NaLegal,
        MediaSizeName::Invoice,
        MediaSizeName::Executive,
        MediaSizeName::IsoA3,
        MediaSizeName::IsoA4,
        MediaSizeName::IsoA5,
        MediaSizeName::JisB4,
        MediaSizeName::JisB5,
        MediaSizeName::Folio,
        MediaSizeName::Quarto,
        MediaSizeName::Na10x14Envelope,
        MediaSizeName::B,
        MediaSizeName::NaNumber9Envelope,
        MediaSizeName::NaNumber10Envelope,
        MediaSizeName::NaNumber11Envelope,
        MediaSizeName::NaNumber12Envelope,
        MediaSizeName::NaNumber14Envelope,
        MediaSizeName::C,
        MediaSizeName::D,
        MediaSizeName::E,
        MediaSizeName::IsoDesignatedLong,
        MediaSizeName::IsoC5,
        MediaSizeName::IsoC3,
        MediaSizeName::IsoC4,
        MediaSizeName::IsoC6,
        MediaSizeName::ItalyEnvelope,
        MediaSizeName::IsoB4,
        MediaSizeName::IsoB5,
        MediaSizeName::IsoB6,
        MediaSizeName::MonarchEnvelope,
        MediaSizeName::PersonalEnvelope,
        MediaSizeName::Na10x15Envelope,
        MediaSizeName::Na9x12Envelope,
        MediaSizeName::JapanesePostcard,
        MediaSizeName::Na9x11Envelope,
    ];

    /// The IPP keyword for this media, e.g. `iso-a4`
    pub fn keyword(self) -> &'static str {
        match self {
            Self::NaLetter => "na-letter",
            Self::Tabloid => "tabloid",
            Self::Ledger => "ledger",
            Self::NaLegal => "na-legal",
            Self::Invoice => "invoice",
            Self::Executive => "executive",
            Self::IsoA3 => "iso-a3",
            Self::IsoA4 => "iso-a4",
            Self::IsoA5 => "iso-a5",
            Self::JisB4 => "jis-b4",
            Self::JisB5 => "jis-b5",
            Self::Folio => "folio",
            Self::Quarto => "quarto",
            Self::Na10x14Envelope => "na-10x14-envelope",
            Self::B => "b",
            Self::NaNumber9Envelope => "na-number-9-envelope",
            Self::NaNumber10Envelope => "na-number-10-envelope",
            Self::NaNumber11Envelope => "na-number-11-envelope",
            Self::NaNumber12Envelope => "na-number-12-envelope",
            Self::NaNumber14Envelope => "na-number-14-envelope",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
            Self::IsoDesignatedLong => "iso-designated-long",
            Self::IsoC5 => "iso-c5",
            Self::IsoC3 => "iso-c3",
            Self::IsoC4 => "iso-c4",
            Self::IsoC6 => "iso-c6",
            Self::ItalyEnvelope => "italy-envelope",
            Self::IsoB4 => "iso-b4",
            Self::IsoB5 => "iso-b5",
            Self::IsoB6 => "iso-b6",
            Self::MonarchEnvelope => "monarch-envelope",
            Self::PersonalEnvelope => "personal-envelope",
            Self::Na10x15Envelope => "na-10x15-envelope",
            Self::Na9x12Envelope => "na-9x12-envelope",
            Self::JapanesePostcard => "japanese-postcard",
            Self::Na9x11Envelope => "na-9x11-envelope",
        }
    }
}

impl fmt::Display for MediaSizeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for MediaSizeName {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|name| name.keyword().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MediaError::UnknownMediaName(s.to_string()))
    }
}
