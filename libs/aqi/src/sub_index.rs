//! Piecewise-linear sub-index calculation.

use crate::breakpoints::{Breakpoint, BreakpointTable, Lookup, MAX_INDEX};

/// Linear interpolation formula transcribed from EPA documentation:
/// I = ((I_high - I_low) / (C_high - C_low)) * (C - C_low) + I_low
pub fn interpolate(concentration: f64, bp: &Breakpoint) -> f64 {
    (bp.i_high as f64 - bp.i_low as f64) / (bp.c_high - bp.c_low) * (concentration - bp.c_low)
        + bp.i_low as f64
}

/// Calculate the sub-index for a truncated concentration.
///
/// # Arguments
///
/// * `concentration` - Truncated concentration in the table's unit
/// * `table` - Breakpoint table for the pollutant and averaging period
///
/// # Returns
///
/// The fractional, unrounded index. Above the table ceiling the index is
/// pinned at 500. Absent, non-finite and below-floor concentrations give
/// `None`. A concentration between two rows takes the upper index of the
/// row below it.
///
/// # Examples
///
/// ```
/// use aqi::{sub_index, PM2_5_24H};
///
/// assert_eq!(sub_index(Some(12.0), &PM2_5_24H), Some(50.0));
/// assert_eq!(sub_index(Some(600.0), &PM2_5_24H), Some(500.0));
/// assert_eq!(sub_index(Some(-1.0), &PM2_5_24H), None);
/// ```
pub fn sub_index(concentration: Option<f64>, table: &BreakpointTable) -> Option<f64> {
    let concentration = concentration.filter(|c| c.is_finite())?;
    match table.lookup(concentration) {
        Lookup::Row(bp) => {
            let index = interpolate(concentration, &bp);
            trace!(
                "{} {}: {} -> {}",
                table.pollutant,
                table.averaging,
                concentration,
                index
            );
            Some(index)
        }
        Lookup::Gap(bp) => {
            warn!(
                "{} {}: {} falls between rows, using {}",
                table.pollutant,
                table.averaging,
                concentration,
                bp.i_high
            );
            Some(bp.i_high as f64)
        }
        Lookup::AboveCeiling => {
            trace!(
                "{} {}: {} is off the scale",
                table.pollutant,
                table.averaging,
                concentration
            );
            Some(MAX_INDEX as f64)
        }
        Lookup::BelowFloor => {
            warn!(
                "{} {}: {} is below the table floor",
                table.pollutant,
                table.averaging,
                concentration
            );
            None
        }
    }
}

/// Round an index to the nearest integer, halves away from zero.
pub fn round_index(index: f64) -> u16 {
    libm::round(index) as u16
}
