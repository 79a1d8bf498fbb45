//! Output of one evaluation.

use crate::category::Category;
use crate::pollutant::Pollutant;

/// One optional value per pollutant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerPollutant {
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub co: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
}

impl PerPollutant {
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

    pub fn set(&mut self, pollutant: Pollutant, value: Option<f64>) {
        let slot = match pollutant {
            Pollutant::Pm2_5 => &mut self.pm2_5,
            Pollutant::Pm10 => &mut self.pm10,
            Pollutant::Co => &mut self.co,
            Pollutant::No2 => &mut self.no2,
            Pollutant::O3 => &mut self.o3,
            Pollutant::So2 => &mut self.so2,
        };
        *slot = value;
    }

    /// Values in [`Pollutant::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, Option<f64>)> + '_ {
        Pollutant::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Present values only, in [`Pollutant::ALL`] order.
    pub fn present(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        self.iter().filter_map(|(p, v)| v.map(|v| (p, v)))
    }
}

/// Fractional sub-indices, before final rounding.
pub type SubIndices = PerPollutant;

/// Truncated concentrations in each table's unit: µg/m³ for particulates,
/// ppb for NO2, O3 and SO2, ppm for CO.
pub type Concentrations = PerPollutant;

/// Which ozone table the reported O3 sub-index came from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OzoneBasis {
    /// The 8-hour table alone.
    #[default]
    EightHour,
    /// The 8-hour index exceeded 300 and the 1-hour table was consulted.
    /// The reported O3 sub-index is the larger of the two.
    OneHourOverride { value: f64 },
}

impl OzoneBasis {
    /// The 1-hour sub-index, if one was computed.
    pub fn one_hour(&self) -> Option<f64> {
        match self {
            OzoneBasis::EightHour => None,
            OzoneBasis::OneHourOverride { value } => Some(*value),
        }
    }
}

/// Sub-indices, intermediate concentrations and the final AQI for one
/// reading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AqiReport {
    pub sub_indices: SubIndices,
    pub concentrations: Concentrations,
    pub ozone: OzoneBasis,
    /// Maximum valid sub-index, rounded. `None` when nothing was valid.
    pub aqi: Option<u16>,
}

impl AqiReport {
    /// The pollutant whose sub-index set the AQI. Ties go to the earlier
    /// pollutant in [`Pollutant::ALL`].
    pub fn dominant_pollutant(&self) -> Option<Pollutant> {
        self.sub_indices
            .present()
            .filter(|(_, v)| !v.is_nan())
            .fold(None, |best: Option<(Pollutant, f64)>, (p, v)| match best {
                Some((_, max)) if max >= v => best,
                _ => Some((p, v)),
            })
            .map(|(p, _)| p)
    }

    pub fn category(&self) -> Option<Category> {
        self.aqi.map(Category::from_aqi)
    }
}
