//! Aggregation of sub-indices into the reported AQI.

use crate::breakpoints::{BreakpointTable, TableSet};
use crate::convert::to_table_units;
use crate::error::Result;
use crate::pollutant::Pollutant;
use crate::reading::{Conditions, PollutantReading};
use crate::report::{AqiReport, Concentrations, OzoneBasis, SubIndices};
use crate::sub_index::{round_index, sub_index};
use crate::truncate::truncate;

/// Above this 8-hour index ozone is also checked against the 1-hour table.
pub const OZONE_OVERRIDE_THRESHOLD: f64 = 300.0;

/// Evaluates readings against a validated set of breakpoint tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    tables: TableSet,
}

impl Evaluator {
    /// Evaluator over the published EPA tables.
    pub const fn epa() -> Self {
        Self {
            tables: TableSet::EPA,
        }
    }

    /// Evaluator over a custom table set, rejected up front if any table is
    /// malformed.
    pub fn with_tables(tables: TableSet) -> Result<Self> {
        tables.validate()?;
        Ok(Self { tables })
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    fn table(&self, pollutant: Pollutant) -> &BreakpointTable {
        match pollutant {
            Pollutant::Pm2_5 => &self.tables.pm2_5,
            Pollutant::Pm10 => &self.tables.pm10,
            Pollutant::Co => &self.tables.co,
            Pollutant::No2 => &self.tables.no2,
            Pollutant::O3 => &self.tables.o3_8h,
            Pollutant::So2 => &self.tables.so2,
        }
    }

    /// Truncated concentration in table units.
    fn concentration(
        &self,
        reading: &PollutantReading,
        pollutant: Pollutant,
        conditions: &Conditions,
    ) -> Option<f64> {
        truncate(
            to_table_units(pollutant, reading.get(pollutant), conditions),
            pollutant,
        )
    }

    /// Compute every sub-index and the final AQI for one reading.
    ///
    /// Missing or invalid pollutants are left out; the AQI is only absent
    /// when no pollutant produced a sub-index.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::{Conditions, Evaluator, Pollutant, PollutantReading};
    ///
    /// let reading = PollutantReading::default().with(Pollutant::Pm2_5, 12.0);
    /// let report = Evaluator::epa().evaluate(&reading, &Conditions::default());
    /// assert_eq!(report.aqi, Some(50));
    /// ```
    pub fn evaluate(&self, reading: &PollutantReading, conditions: &Conditions) -> AqiReport {
        let mut concentrations = Concentrations::default();
        let mut sub_indices = SubIndices::default();

        for pollutant in Pollutant::ALL {
            let concentration = self.concentration(reading, pollutant, conditions);
            let index = sub_index(concentration, self.table(pollutant));
            concentrations.set(pollutant, concentration);
            sub_indices.set(pollutant, index);
        }

        let ozone = self.ozone_override(concentrations.o3, sub_indices.o3);
        if let OzoneBasis::OneHourOverride { value } = ozone {
            sub_indices.o3 = sub_indices.o3.map(|eight_hour| eight_hour.max(value));
        }

        let aqi = sub_indices
            .present()
            .map(|(_, index)| index)
            .filter(|index| !index.is_nan())
            .reduce(f64::max)
            .map(round_index);

        AqiReport {
            sub_indices,
            concentrations,
            ozone,
            aqi,
        }
    }

    /// Check very high ozone against the 1-hour table.
    fn ozone_override(&self, ppb: Option<f64>, eight_hour: Option<f64>) -> OzoneBasis {
        match eight_hour {
            Some(index) if index > OZONE_OVERRIDE_THRESHOLD => {
                match sub_index(ppb, &self.tables.o3_1h) {
                    Some(value) => {
                        debug!("O3 8-hour index {} over 300, 1-hour index {}", index, value);
                        OzoneBasis::OneHourOverride { value }
                    }
                    None => {
                        debug!("O3 8-hour index {} over 300, no 1-hour index", index);
                        OzoneBasis::EightHour
                    }
                }
            }
            _ => OzoneBasis::EightHour,
        }
    }

    /// Lazily evaluate a sequence of readings under the same conditions.
    pub fn evaluate_batch<'a, I>(
        &'a self,
        readings: I,
        conditions: &'a Conditions,
    ) -> impl Iterator<Item = AqiReport> + 'a
    where
        I: IntoIterator<Item = &'a PollutantReading>,
        I::IntoIter: 'a,
    {
        readings
            .into_iter()
            .map(move |reading| self.evaluate(reading, conditions))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::epa()
    }
}

/// Evaluate one reading against the EPA tables.
pub fn evaluate(reading: &PollutantReading, conditions: &Conditions) -> AqiReport {
    Evaluator::epa().evaluate(reading, conditions)
}

/// Evaluate many readings against the EPA tables. Each element is
/// independent of the others.
pub fn evaluate_batch<'a, I>(
    readings: I,
    conditions: &'a Conditions,
) -> impl Iterator<Item = AqiReport> + 'a
where
    I: IntoIterator<Item = &'a PollutantReading>,
    I::IntoIter: 'a,
{
    let evaluator = Evaluator::epa();
    readings
        .into_iter()
        .map(move |reading| evaluator.evaluate(reading, conditions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::{Breakpoint, O3_8H};
    use crate::pollutant::Averaging;

    // Ozone µg/m³ giving roughly the requested ppb at reference conditions
    fn ozone_ugm3(ppb: f64) -> f64 {
        ppb * 48.0 / 24.45
    }

    #[test]
    fn test_single_pollutant() {
        let reading = PollutantReading::default().with(Pollutant::Pm2_5, 12.0);
        let report = evaluate(&reading, &Conditions::default());
        assert_eq!(report.aqi, Some(50));
        assert_eq!(report.sub_indices.pm2_5, Some(50.0));
        assert_eq!(report.concentrations.pm2_5, Some(12.0));
        assert_eq!(report.sub_indices.pm10, None);
        assert_eq!(report.ozone, OzoneBasis::EightHour);
    }

    #[test]
    fn test_all_absent() {
        let report = evaluate(&PollutantReading::default(), &Conditions::default());
        assert_eq!(report.aqi, None);
        assert_eq!(report, AqiReport::default());
    }

    #[test]
    fn test_zero_is_measured() {
        let reading = PollutantReading::default().with(Pollutant::No2, 0.0);
        let report = evaluate(&reading, &Conditions::default());
        assert_eq!(report.sub_indices.no2, Some(0.0));
        assert_eq!(report.aqi, Some(0));
    }

    #[test]
    fn test_max_wins() {
        let reading = PollutantReading {
            pm2_5: Some(35.9),
            pm10: Some(100.0),
            ..PollutantReading::default()
        };
        let report = evaluate(&reading, &Conditions::default());
        assert_eq!(report.aqi, Some(102));
        assert_eq!(report.dominant_pollutant(), Some(Pollutant::Pm2_5));
    }

    #[test]
    fn test_high_ozone_consults_one_hour_table() {
        // 250 ppb is off the 8-hour table, the 1-hour table puts it at 223
        let reading = PollutantReading::default().with(Pollutant::O3, ozone_ugm3(250.0));
        let report = evaluate(&reading, &Conditions::default());
        let one_hour = report.ozone.one_hour().unwrap();
        assert!(one_hour > 200.0 && one_hour < 300.0);
        assert_eq!(report.sub_indices.o3, Some(500.0));
        assert_eq!(report.aqi, Some(500));
    }

    #[test]
    fn test_moderate_ozone_uses_eight_hour_table() {
        let reading = PollutantReading::default().with(Pollutant::O3, ozone_ugm3(150.0));
        let report = evaluate(&reading, &Conditions::default());
        assert_eq!(report.ozone, OzoneBasis::EightHour);
        assert!(report.sub_indices.o3.unwrap() <= 300.0);
    }

    #[test]
    fn test_custom_tables() {
        const BAD_ROWS: [Breakpoint; 2] = [
            Breakpoint::new(0.0, 54.0, 0, 50),
            Breakpoint::new(60.0, 70.0, 51, 100),
        ];
        let tables = TableSet {
            o3_8h: BreakpointTable::new(Pollutant::O3, Averaging::Hours8, 1.0, &BAD_ROWS),
            ..TableSet::EPA
        };
        assert!(Evaluator::with_tables(tables).is_err());
        assert_eq!(Evaluator::with_tables(TableSet::EPA), Ok(Evaluator::epa()));
        assert_eq!(Evaluator::default().tables().o3_8h, O3_8H);
    }

    #[test]
    fn test_batch() {
        let readings = [
            PollutantReading::default().with(Pollutant::Pm2_5, 12.0),
            PollutantReading::default(),
            PollutantReading::default().with(Pollutant::Pm10, 54.0),
        ];
        let conditions = Conditions::default();
        let mut aqis = [None; 3];
        for (slot, report) in aqis.iter_mut().zip(evaluate_batch(&readings, &conditions)) {
            *slot = report.aqi;
        }
        assert_eq!(aqis, [Some(50), None, Some(50)]);
    }
}
