//! Mass to volumetric concentration conversion.
//!
//! ppb = µg/m³ × (24.45 / MW) × (T / 298.15 K) × (1013.25 hPa / P)
//!
//! 24.45 L is the molar volume of an ideal gas at 25 °C and 1013.25 hPa;
//! the last two factors scale it to the ambient conditions.

use crate::pollutant::{Pollutant, Unit};
use crate::reading::{Conditions, REFERENCE_PRESSURE_HPA};

/// Molar volume in litres at the reference conditions.
pub const MOLAR_VOLUME_L: f64 = 24.45;

const REFERENCE_TEMPERATURE_K: f64 = 298.15;
const PPB_PER_PPM: f64 = 1000.0;

fn volume_factor(molecular_weight: f64, conditions: &Conditions) -> f64 {
    (MOLAR_VOLUME_L / molecular_weight)
        * (conditions.temperature_k() / REFERENCE_TEMPERATURE_K)
        * (REFERENCE_PRESSURE_HPA / conditions.pressure_hpa)
}

/// Convert µg/m³ to ppb.
///
/// Returns `None` for an absent input or a result that is not finite.
///
/// # Examples
///
/// ```
/// use aqi::{concentration_to_ppb, Conditions};
///
/// // 48 µg/m³ of ozone (MW 48.00) is one molar volume's worth of ppb
/// let ppb = concentration_to_ppb(Some(48.0), 48.0, &Conditions::default()).unwrap();
/// assert!((ppb - 24.45).abs() < 1e-12);
/// ```
pub fn concentration_to_ppb(
    ugm3: Option<f64>,
    molecular_weight: f64,
    conditions: &Conditions,
) -> Option<f64> {
    // Evaluated left to right so results match the published formula bit
    // for bit.
    let ppb = ugm3?
        * (MOLAR_VOLUME_L / molecular_weight)
        * (conditions.temperature_k() / REFERENCE_TEMPERATURE_K)
        * (REFERENCE_PRESSURE_HPA / conditions.pressure_hpa);
    ppb.is_finite().then_some(ppb)
}

/// Convert µg/m³ to ppm, the unit of the CO table.
pub fn concentration_to_ppm(
    ugm3: Option<f64>,
    molecular_weight: f64,
    conditions: &Conditions,
) -> Option<f64> {
    concentration_to_ppb(ugm3, molecular_weight, conditions).map(|ppb| ppb / PPB_PER_PPM)
}

/// Inverse of [`concentration_to_ppb`].
pub fn ppb_to_concentration(
    ppb: Option<f64>,
    molecular_weight: f64,
    conditions: &Conditions,
) -> Option<f64> {
    let ugm3 = ppb? / volume_factor(molecular_weight, conditions);
    ugm3.is_finite().then_some(ugm3)
}

/// Inverse of [`concentration_to_ppm`].
pub fn ppm_to_concentration(
    ppm: Option<f64>,
    molecular_weight: f64,
    conditions: &Conditions,
) -> Option<f64> {
    ppb_to_concentration(ppm.map(|ppm| ppm * PPB_PER_PPM), molecular_weight, conditions)
}

/// Bring a raw µg/m³ reading into the unit of the pollutant's table.
/// Particulates pass through unchanged.
pub fn to_table_units(
    pollutant: Pollutant,
    ugm3: Option<f64>,
    conditions: &Conditions,
) -> Option<f64> {
    let ugm3 = ugm3.filter(|v| v.is_finite())?;
    match (pollutant.unit(), pollutant.molecular_weight()) {
        (Unit::PartsPerBillion, Some(mw)) => concentration_to_ppb(Some(ugm3), mw, conditions),
        (Unit::PartsPerMillion, Some(mw)) => concentration_to_ppm(Some(ugm3), mw, conditions),
        _ => Some(ugm3),
    }
}
