//! Error types for the AQI engine.
//!
//! Only malformed constant data and nonsensical ambient conditions are
//! errors. Missing, non-finite and out-of-range concentrations are normal
//! input and surface as absent sub-indices instead.

use thiserror::Error;

use crate::pollutant::{Averaging, Pollutant};

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised when building tables or ambient conditions.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A breakpoint table has no rows.
    #[error("{pollutant} {averaging} table is empty")]
    EmptyTable {
        pollutant: Pollutant,
        averaging: Averaging,
    },

    /// A row whose concentration or index range is not strictly ascending.
    #[error("{pollutant} {averaging} row {row} has an inverted range")]
    InvertedRow {
        pollutant: Pollutant,
        averaging: Averaging,
        row: usize,
    },

    /// A row starts at or below the previous row's upper edge.
    #[error("{pollutant} {averaging} row {row} overlaps or precedes the previous row")]
    Unsorted {
        pollutant: Pollutant,
        averaging: Averaging,
        row: usize,
    },

    /// The distance to the previous row is wider than one table step.
    #[error("{pollutant} {averaging} row {row} leaves a gap of {gap} (step {step})")]
    Gap {
        pollutant: Pollutant,
        averaging: Averaging,
        row: usize,
        gap: f64,
        step: f64,
    },

    /// Index ranges of consecutive rows do not follow on by exactly one.
    #[error("{pollutant} {averaging} row {row} index range does not continue the previous row")]
    IndexDiscontinuity {
        pollutant: Pollutant,
        averaging: Averaging,
        row: usize,
    },

    /// An index bound outside the 0-500 scale.
    #[error("{pollutant} {averaging} row {row} index is outside 0-500")]
    IndexOutOfScale {
        pollutant: Pollutant,
        averaging: Averaging,
        row: usize,
    },

    /// Pressure must be finite and positive.
    #[error("invalid pressure: {0} hPa")]
    InvalidPressure(f64),

    /// Temperature must be finite and above absolute zero.
    #[error("invalid temperature: {0} °C")]
    InvalidTemperature(f64),
}
