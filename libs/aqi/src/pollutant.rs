//! Pollutant identifiers and their physical constants.

use core::fmt;

/// The six criteria pollutants reported by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pollutant {
    Pm2_5,
    Pm10,
    Co,
    No2,
    O3,
    So2,
}

impl Pollutant {
    /// Canonical evaluation order, also used to break ties when picking the
    /// dominant pollutant.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm2_5,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::So2,
        Pollutant::Co,
    ];

    /// Molecular weight in g/mol, `None` for particulate matter which is
    /// already reported by mass.
    pub const fn molecular_weight(self) -> Option<f64> {
        match self {
            Pollutant::Co => Some(28.01),
            Pollutant::No2 => Some(46.0055),
            Pollutant::O3 => Some(48.00),
            Pollutant::So2 => Some(64.066),
            Pollutant::Pm2_5 | Pollutant::Pm10 => None,
        }
    }

    /// Unit the breakpoint tables expect for this pollutant.
    pub const fn unit(self) -> Unit {
        match self {
            Pollutant::Pm2_5 | Pollutant::Pm10 => Unit::MicrogramsPerCubicMeter,
            Pollutant::Co => Unit::PartsPerMillion,
            Pollutant::No2 | Pollutant::O3 | Pollutant::So2 => Unit::PartsPerBillion,
        }
    }

    /// Number of decimal places kept by truncation.
    pub const fn decimals(self) -> u8 {
        match self {
            Pollutant::O3 => 3,
            Pollutant::Pm2_5 | Pollutant::Co => 1,
            Pollutant::Pm10 | Pollutant::So2 | Pollutant::No2 => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Pollutant::Pm2_5 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::So2 => "SO2",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Concentration units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    MicrogramsPerCubicMeter,
    PartsPerBillion,
    PartsPerMillion,
}

impl Unit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::MicrogramsPerCubicMeter => "µg/m³",
            Unit::PartsPerBillion => "ppb",
            Unit::PartsPerMillion => "ppm",
        }
    }
}

/// Averaging period a breakpoint table applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Averaging {
    Hours1,
    Hours8,
    Hours24,
}

impl fmt::Display for Averaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Averaging::Hours1 => "1-hour",
            Averaging::Hours8 => "8-hour",
            Averaging::Hours24 => "24-hour",
        })
    }
}
