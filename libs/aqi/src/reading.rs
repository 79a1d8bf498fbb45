//! Input records: one observation plus the ambient conditions used for gas
//! conversion.

use crate::error::{Error, Result};
use crate::pollutant::Pollutant;

/// Temperature the 24.45 L/mol molar volume is defined at.
pub const REFERENCE_TEMPERATURE_C: f64 = 25.0;
/// Standard sea level pressure.
pub const REFERENCE_PRESSURE_HPA: f64 = 1013.25;

const ABSOLUTE_ZERO_C: f64 = -273.15;

/// Raw concentrations for one time step, all in µg/m³.
///
/// `None` means the pollutant was not measured, which is different from a
/// measured zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollutantReading {
    #[cfg_attr(feature = "serde", serde(default))]
    pub pm2_5: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pm10: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, rename = "carbon_monoxide"))]
    pub co: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, rename = "nitrogen_dioxide"))]
    pub no2: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, rename = "ozone"))]
    pub o3: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, rename = "sulphur_dioxide"))]
    pub so2: Option<f64>,
}

impl PollutantReading {
    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm2_5 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Co => self.co,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
            Pollutant::So2 => self.so2,
        }
    }

    /// Builder style setter.
    ///
    /// ```
    /// use aqi::{Pollutant, PollutantReading};
    ///
    /// let reading = PollutantReading::default()
    ///     .with(Pollutant::Pm2_5, 12.0)
    ///     .with(Pollutant::O3, 80.0);
    /// assert_eq!(reading.pm2_5, Some(12.0));
    /// assert_eq!(reading.pm10, None);
    /// ```
    pub fn with(mut self, pollutant: Pollutant, ugm3: f64) -> Self {
        let slot = match pollutant {
            Pollutant::Pm2_5 => &mut self.pm2_5,
            Pollutant::Pm10 => &mut self.pm10,
            Pollutant::Co => &mut self.co,
            Pollutant::No2 => &mut self.no2,
            Pollutant::O3 => &mut self.o3,
            Pollutant::So2 => &mut self.so2,
        };
        *slot = Some(ugm3);
        self
    }
}

/// Ambient temperature and pressure for the ideal-gas conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conditions {
    pub temperature_c: f64,
    pub pressure_hpa: f64,
}

impl Conditions {
    /// Local conditions, rejecting values the gas law cannot use.
    pub fn new(temperature_c: f64, pressure_hpa: f64) -> Result<Self> {
        if !temperature_c.is_finite() || temperature_c <= ABSOLUTE_ZERO_C {
            return Err(Error::InvalidTemperature(temperature_c));
        }
        if !pressure_hpa.is_finite() || pressure_hpa <= 0.0 {
            return Err(Error::InvalidPressure(pressure_hpa));
        }
        Ok(Self {
            temperature_c,
            pressure_hpa,
        })
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature_c - ABSOLUTE_ZERO_C
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            temperature_c: REFERENCE_TEMPERATURE_C,
            pressure_hpa: REFERENCE_PRESSURE_HPA,
        }
    }
}
