//! Physical size types and unit conversion

use crate::constants::{INCH100_TO_MICROMETERS, MICROMETERS_PER_INCH, MICROMETERS_PER_MM, POINTS_PER_INCH};

/// Paper size as reported by a printing platform, in hundredths of an inch.
///
/// Values are taken as given; nonsensical (negative) sizes are not rejected,
/// they simply never match a standard size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PaperDimensions {
    pub width: i32,
    pub height: i32,
}

impl PaperDimensions {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Convert to micrometers
    pub fn to_micrometers(self) -> MicrometerSize {
        MicrometerSize {
            width: self.width.saturating_mul(INCH100_TO_MICROMETERS),
            height: self.height.saturating_mul(INCH100_TO_MICROMETERS),
        }
    }
}

/// Width and height in micrometers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MicrometerSize {
    pub width: i32,
    pub height: i32,
}

impl MicrometerSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Size given in whole millimeters
    pub const fn from_mm(width: i32, height: i32) -> Self {
        Self::new(width * MICROMETERS_PER_MM, height * MICROMETERS_PER_MM)
    }

    /// Size given in thousandths of an inch (8.5 in is `8500`)
    pub const fn from_thousandths_inch(width: i32, height: i32) -> Self {
        Self::new(
            (width * MICROMETERS_PER_INCH + 500) / 1000,
            (height * MICROMETERS_PER_INCH + 500) / 1000,
        )
    }

    /// Same size with the shorter side as width
    pub fn to_portrait(self) -> Self {
        if self.width > self.height {
            Self::new(self.height, self.width)
        } else {
            self
        }
    }

    /// Same size with the longer side as width
    pub fn to_landscape(self) -> Self {
        if self.width < self.height {
            Self::new(self.height, self.width)
        } else {
            self
        }
    }

    /// Whether both axes differ from `other` by strictly less than `tolerance`
    pub fn within(self, other: MicrometerSize, tolerance: i32) -> bool {
        let dx = (i64::from(self.width) - i64::from(other.width)).abs();
        let dy = (i64::from(self.height) - i64::from(other.height)).abs();
        dx < i64::from(tolerance) && dy < i64::from(tolerance)
    }

    /// Convert to PDF points (1/72 inch)
    pub fn to_points(self) -> (f32, f32) {
        let per_point = MICROMETERS_PER_INCH as f32 / POINTS_PER_INCH;
        (self.width as f32 / per_point, self.height as f32 / per_point)
    }

    /// Convert from PDF points, rounding to the nearest micrometer
    pub fn from_points(width: f32, height: f32) -> Self {
        let per_point = MICROMETERS_PER_INCH as f32 / POINTS_PER_INCH;
        Self::new(
            (width * per_point).round() as i32,
            (height * per_point).round() as i32,
        )
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    ReverseLandscape,
}
