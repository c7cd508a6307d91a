//! Error types for panchang and dasha derivation.

use thiserror::Error;

/// Errors from the panchang calculator.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// A body needed for the panchang was absent from the positions.
    #[error("missing position for {0}")]
    MissingBody(&'static str),
    /// A longitude was not a finite value in [0, 360).
    #[error("{body} longitude {value} is not reduced to [0, 360)")]
    UnreducedLongitude { body: &'static str, value: f64 },
}

/// Errors from the Vimshottari dasha generator.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DashaError {
    /// The Moon was absent from the positions.
    #[error("missing position for Moon")]
    MissingMoon,
    /// The Moon's longitude was not a finite value in [0, 360).
    #[error("Moon longitude {0} is not reduced to [0, 360)")]
    UnreducedLongitude(f64),
    /// A period boundary fell outside the representable date range.
    #[error("dasha period boundary overflows the calendar after {years:.2} years")]
    DateOverflow { years: f64 },
}
