//! AQI library
//!
//! This library converts raw pollutant concentrations into EPA sub-indices
//! and a final Air Quality Index using the piecewise-linear breakpoint
//! method, and translates the result to EPA category colors. It supports
//! both std and no_std environments, but is best used on systems with
//! hardware floating point support.
//!
//! An evaluation runs in this order for each pollutant:
//!
//! 1. Gas concentrations are converted from µg/m³ to ppb (ppm for CO) using
//!    the ambient [`Conditions`].
//! 2. The value is truncated to the precision of its table.
//! 3. The sub-index is interpolated from the matching breakpoint row.
//!
//! Ozone above an 8-hour index of 300 is also checked against the 1-hour
//! table, and the final AQI is the largest sub-index, rounded.
//!
//! ```
//! use aqi::{evaluate, Category, Conditions, PollutantReading};
//!
//! let reading = PollutantReading {
//!     pm2_5: Some(35.9),
//!     pm10: Some(100.0),
//!     ..PollutantReading::default()
//! };
//! let report = evaluate(&reading, &Conditions::default());
//! assert_eq!(report.aqi, Some(102));
//! assert_eq!(report.category(), Some(Category::UnhealthyForSensitiveGroups));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod breakpoints;
pub mod category;
pub mod convert;
pub mod error;
pub mod evaluate;
pub mod pollutant;
pub mod reading;
pub mod report;
pub mod sub_index;
pub mod truncate;

pub use breakpoints::{
    Breakpoint, BreakpointTable, Lookup, TableSet, CO_8H, MAX_INDEX, NO2_1H, O3_1H, O3_8H,
    PM10_24H, PM2_5_24H, SO2_1H,
};
pub use category::{Category, Color};
pub use convert::{
    concentration_to_ppb, concentration_to_ppm, ppb_to_concentration, ppm_to_concentration,
    to_table_units,
};
pub use error::{Error, Result};
pub use evaluate::{evaluate, evaluate_batch, Evaluator, OZONE_OVERRIDE_THRESHOLD};
pub use pollutant::{Averaging, Pollutant, Unit};
pub use reading::{Conditions, PollutantReading, REFERENCE_PRESSURE_HPA, REFERENCE_TEMPERATURE_C};
pub use report::{AqiReport, Concentrations, OzoneBasis, PerPollutant, SubIndices};
pub use sub_index::{interpolate, round_index, sub_index};
pub use truncate::truncate;
