//! Constants for media dimensions and matching

/// Multiplier from hundredths of an inch to micrometers
pub const INCH100_TO_MICROMETERS: i32 = 254;

/// Micrometers in one inch
pub const MICROMETERS_PER_INCH: i32 = 25_400;

/// Micrometers in one millimeter
pub const MICROMETERS_PER_MM: i32 = 1_000;

/// PDF points in one inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default dimensional match tolerance in micrometers (0.5 mm).
/// A candidate matches only when both axes differ by strictly less than this.
pub const DEFAULT_MATCH_TOLERANCE: i32 = 500;

/// Number of predefined platform paper kinds (codes 1..=44)
pub const PAPER_KIND_COUNT: usize = 44;

/// Job name reported when the caller has not set one
pub const DEFAULT_JOB_NAME: &str = "Print Job";

/// Destination file reported as the default print destination
pub const DEFAULT_DESTINATION: &str = "out.prn";
