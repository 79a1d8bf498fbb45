//! Pollutant-specific truncation.
//!
//! The EPA procedure truncates (floors) concentrations before any table
//! lookup. This is not rounding: 12.09 µg/m³ of PM2.5 is reported as 12.0.

use crate::pollutant::Pollutant;

fn floor_scaled(value: f64, scale: f64) -> f64 {
    let scaled = value * scale;
    if !scaled.is_finite() {
        // Already integral at this scale
        return value;
    }
    // A value already on the decimal grid is kept as is. 1.001 is stored as
    // 1.000999..., so scaling and flooring it would give 1.000.
    let nearest = libm::round(scaled);
    if nearest / scale == value {
        return value;
    }
    libm::floor(scaled) / scale
}

/// Truncate a concentration to the precision used by the pollutant's table.
///
/// # Arguments
///
/// * `value` - Concentration in the units of the pollutant's table
/// * `pollutant` - Which pollutant the value belongs to
///
/// # Returns
///
/// The floored value, or `None` if the value was absent or not finite.
/// Values that are exactly a multiple of the precision come back unchanged,
/// so truncating twice gives the same result.
///
/// # Examples
///
/// ```
/// use aqi::{truncate, Pollutant};
///
/// assert_eq!(truncate(Some(12.09), Pollutant::Pm2_5), Some(12.0));
/// assert_eq!(truncate(Some(54.9), Pollutant::Pm10), Some(54.0));
/// assert_eq!(truncate(None, Pollutant::O3), None);
/// ```
pub fn truncate(value: Option<f64>, pollutant: Pollutant) -> Option<f64> {
    let value = value.filter(|v| v.is_finite())?;
    let scale = match pollutant.decimals() {
        0 => 1.0,
        1 => 10.0,
        _ => 1000.0,
    };
    Some(floor_scaled(value, scale))
}
