//! EPA breakpoint tables.
//!
//! Values are from the AirNow Technical Assistance Document for the
//! Reporting of Daily Air Quality:
//! https://document.airnow.gov/technical-assistance-document-for-the-reporting-of-daily-air-quailty.pdf
//!
//! Gas tables are in ppb except CO which is in ppm. Particulate tables are
//! in µg/m³.

use crate::error::{Error, Result};
use crate::pollutant::{Averaging, Pollutant};

/// Slack allowed when comparing a row gap to the table step, since decimal
/// steps such as 0.1 are not exact in binary.
const STEP_EPSILON: f64 = 1e-9;

/// Highest value on the AQI scale.
pub const MAX_INDEX: u16 = 500;

/// One concentration range mapped linearly onto an index range. Both ends
/// are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Breakpoint {
    pub c_low: f64,
    pub c_high: f64,
    pub i_low: u16,
    pub i_high: u16,
}

impl Breakpoint {
    pub const fn new(c_low: f64, c_high: f64, i_low: u16, i_high: u16) -> Self {
        Self {
            c_low,
            c_high,
            i_low,
            i_high,
        }
    }

    pub fn contains(&self, concentration: f64) -> bool {
        concentration >= self.c_low && concentration <= self.c_high
    }
}

/// Where a concentration falls within a table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lookup {
    /// Inside this row.
    Row(Breakpoint),
    /// Between two rows, above this one's upper edge.
    Gap(Breakpoint),
    /// Below the first row.
    BelowFloor,
    /// Above the last row.
    AboveCeiling,
}

/// An ordered set of breakpoints for one pollutant and averaging period.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BreakpointTable {
    pub pollutant: Pollutant,
    pub averaging: Averaging,
    /// Resolution of the concentration grid; consecutive rows are exactly
    /// one step apart.
    pub step: f64,
    pub rows: &'static [Breakpoint],
}

impl BreakpointTable {
    pub const fn new(
        pollutant: Pollutant,
        averaging: Averaging,
        step: f64,
        rows: &'static [Breakpoint],
    ) -> Self {
        Self {
            pollutant,
            averaging,
            step,
            rows,
        }
    }

    /// Lowest concentration covered by the table.
    pub fn floor(&self) -> Option<f64> {
        self.rows.first().map(|row| row.c_low)
    }

    /// Highest concentration covered by the table.
    pub fn ceiling(&self) -> Option<f64> {
        self.rows.last().map(|row| row.c_high)
    }

    /// Locate the row for a concentration.
    pub fn lookup(&self, concentration: f64) -> Lookup {
        let mut below = None;
        for row in self.rows {
            if row.contains(concentration) {
                return Lookup::Row(*row);
            }
            if concentration < row.c_low {
                return match below {
                    Some(row) => Lookup::Gap(row),
                    None => Lookup::BelowFloor,
                };
            }
            below = Some(*row);
        }
        Lookup::AboveCeiling
    }

    /// Check the table is sorted, gap-free at its step and continuous in
    /// index.
    pub fn validate(&self) -> Result<()> {
        let (pollutant, averaging) = (self.pollutant, self.averaging);
        if self.rows.is_empty() {
            return Err(Error::EmptyTable {
                pollutant,
                averaging,
            });
        }

        for (row, bp) in self.rows.iter().enumerate() {
            if !(bp.c_low < bp.c_high) || bp.i_low >= bp.i_high {
                return Err(Error::InvertedRow {
                    pollutant,
                    averaging,
                    row,
                });
            }
            if bp.i_high > MAX_INDEX {
                return Err(Error::IndexOutOfScale {
                    pollutant,
                    averaging,
                    row,
                });
            }
        }

        for (i, pair) in self.rows.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            let row = i + 1;
            let gap = next.c_low - prev.c_high;
            if !(gap > 0.0) {
                return Err(Error::Unsorted {
                    pollutant,
                    averaging,
                    row,
                });
            }
            if gap > self.step + STEP_EPSILON {
                return Err(Error::Gap {
                    pollutant,
                    averaging,
                    row,
                    gap,
                    step: self.step,
                });
            }
            if next.i_low != prev.i_high + 1 {
                return Err(Error::IndexDiscontinuity {
                    pollutant,
                    averaging,
                    row,
                });
            }
        }

        Ok(())
    }
}

const PM2_5_ROWS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.0, 0, 50),       // Good
    Breakpoint::new(12.1, 35.4, 51, 100),    // Moderate
    Breakpoint::new(35.5, 55.4, 101, 150),   // Unhealthy for Sensitive Groups
    Breakpoint::new(55.5, 150.4, 151, 200),  // Unhealthy
    Breakpoint::new(150.5, 250.4, 201, 300), // Very Unhealthy
    Breakpoint::new(250.5, 350.4, 301, 400), // Hazardous
    Breakpoint::new(350.5, 500.4, 401, 500), // Hazardous
];

/// PM2.5 24-hour, µg/m³
pub const PM2_5_24H: BreakpointTable =
    BreakpointTable::new(Pollutant::Pm2_5, Averaging::Hours24, 0.1, &PM2_5_ROWS);

const PM10_ROWS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 154.0, 51, 100),
    Breakpoint::new(155.0, 254.0, 101, 150),
    Breakpoint::new(255.0, 354.0, 151, 200),
    Breakpoint::new(355.0, 424.0, 201, 300),
    Breakpoint::new(425.0, 504.0, 301, 400),
    Breakpoint::new(505.0, 604.0, 401, 500),
];

/// PM10 24-hour, µg/m³
pub const PM10_24H: BreakpointTable =
    BreakpointTable::new(Pollutant::Pm10, Averaging::Hours24, 1.0, &PM10_ROWS);

const O3_8H_ROWS: [Breakpoint; 5] = [
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 70.0, 51, 100),
    Breakpoint::new(71.0, 85.0, 101, 150),
    Breakpoint::new(86.0, 105.0, 151, 200),
    Breakpoint::new(106.0, 200.0, 201, 300),
];

/// O3 8-hour, ppb. Tops out at 300; higher episodes are checked against
/// the 1-hour table.
pub const O3_8H: BreakpointTable =
    BreakpointTable::new(Pollutant::O3, Averaging::Hours8, 1.0, &O3_8H_ROWS);

const O3_1H_ROWS: [Breakpoint; 5] = [
    Breakpoint::new(125.0, 164.0, 101, 150),
    Breakpoint::new(165.0, 204.0, 151, 200),
    Breakpoint::new(205.0, 404.0, 201, 300),
    Breakpoint::new(405.0, 504.0, 301, 400),
    Breakpoint::new(505.0, 604.0, 401, 500),
];

/// O3 1-hour, ppb. Starts at 125 ppb; only consulted above an 8-hour index
/// of 300.
pub const O3_1H: BreakpointTable =
    BreakpointTable::new(Pollutant::O3, Averaging::Hours1, 1.0, &O3_1H_ROWS);

const NO2_ROWS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 53.0, 0, 50),
    Breakpoint::new(54.0, 100.0, 51, 100),
    Breakpoint::new(101.0, 360.0, 101, 150),
    Breakpoint::new(361.0, 649.0, 151, 200),
    Breakpoint::new(650.0, 1249.0, 201, 300),
    Breakpoint::new(1250.0, 1649.0, 301, 400),
    Breakpoint::new(1650.0, 2049.0, 401, 500),
];

/// NO2 1-hour, ppb
pub const NO2_1H: BreakpointTable =
    BreakpointTable::new(Pollutant::No2, Averaging::Hours1, 1.0, &NO2_ROWS);

const SO2_ROWS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 35.0, 0, 50),
    Breakpoint::new(36.0, 75.0, 51, 100),
    Breakpoint::new(76.0, 185.0, 101, 150),
    Breakpoint::new(186.0, 304.0, 151, 200),
    Breakpoint::new(305.0, 604.0, 201, 300),
    Breakpoint::new(605.0, 804.0, 301, 400),
    Breakpoint::new(805.0, 1004.0, 401, 500),
];

/// SO2 1-hour, ppb
pub const SO2_1H: BreakpointTable =
    BreakpointTable::new(Pollutant::So2, Averaging::Hours1, 1.0, &SO2_ROWS);

const CO_ROWS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 4.4, 0, 50),
    Breakpoint::new(4.5, 9.4, 51, 100),
    Breakpoint::new(9.5, 12.4, 101, 150),
    Breakpoint::new(12.5, 15.4, 151, 200),
    Breakpoint::new(15.5, 30.4, 201, 300),
    Breakpoint::new(30.5, 40.4, 301, 400),
    Breakpoint::new(40.5, 50.4, 401, 500),
];

/// CO 8-hour, ppm
pub const CO_8H: BreakpointTable =
    BreakpointTable::new(Pollutant::Co, Averaging::Hours8, 0.1, &CO_ROWS);

/// The seven tables an evaluation consults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TableSet {
    pub pm2_5: BreakpointTable,
    pub pm10: BreakpointTable,
    pub o3_8h: BreakpointTable,
    pub o3_1h: BreakpointTable,
    pub no2: BreakpointTable,
    pub so2: BreakpointTable,
    pub co: BreakpointTable,
}

impl TableSet {
    /// The published EPA tables.
    pub const EPA: TableSet = TableSet {
        pm2_5: PM2_5_24H,
        pm10: PM10_24H,
        o3_8h: O3_8H,
        o3_1h: O3_1H,
        no2: NO2_1H,
        so2: SO2_1H,
        co: CO_8H,
    };

    pub fn tables(&self) -> [&BreakpointTable; 7] {
        [
            &self.pm2_5,
            &self.pm10,
            &self.o3_8h,
            &self.o3_1h,
            &self.no2,
            &self.so2,
            &self.co,
        ]
    }

    /// Validate every table, stopping at the first malformed one.
    pub fn validate(&self) -> Result<()> {
        self.tables().iter().try_for_each(|table| table.validate())
    }
}

impl Default for TableSet {
    fn default() -> Self {
        Self::EPA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epa_tables_validate() {
        assert_eq!(TableSet::EPA.validate(), Ok(()));
    }

    #[test]
    fn test_domains() {
        assert_eq!(PM2_5_24H.floor(), Some(0.0));
        assert_eq!(PM2_5_24H.ceiling(), Some(500.4));
        assert_eq!(O3_1H.floor(), Some(125.0));
        assert_eq!(O3_8H.ceiling(), Some(200.0));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            PM2_5_24H.lookup(12.0),
            Lookup::Row(Breakpoint::new(0.0, 12.0, 0, 50))
        );
        assert_eq!(
            PM2_5_24H.lookup(12.1),
            Lookup::Row(Breakpoint::new(12.1, 35.4, 51, 100))
        );
        assert_eq!(
            O3_8H.lookup(54.5),
            Lookup::Gap(Breakpoint::new(0.0, 54.0, 0, 50))
        );
        assert_eq!(PM2_5_24H.lookup(-0.1), Lookup::BelowFloor);
        assert_eq!(O3_1H.lookup(124.0), Lookup::BelowFloor);
        assert_eq!(PM2_5_24H.lookup(500.5), Lookup::AboveCeiling);
        assert_eq!(PM2_5_24H.lookup(f64::NAN), Lookup::AboveCeiling);
    }

    #[test]
    fn test_validate_rejects_malformed_tables() {
        const fn pm10(rows: &'static [Breakpoint]) -> BreakpointTable {
            BreakpointTable::new(Pollutant::Pm10, Averaging::Hours24, 1.0, rows)
        }
        const INVERTED_ROWS: [Breakpoint; 1] = [Breakpoint::new(54.0, 0.0, 0, 50)];
        const OVERLAP_ROWS: [Breakpoint; 2] = [
            Breakpoint::new(0.0, 54.0, 0, 50),
            Breakpoint::new(50.0, 154.0, 51, 100),
        ];
        const GAP_ROWS: [Breakpoint; 2] = [
            Breakpoint::new(0.0, 54.0, 0, 50),
            Breakpoint::new(60.0, 154.0, 51, 100),
        ];
        const JUMP_ROWS: [Breakpoint; 2] = [
            Breakpoint::new(0.0, 54.0, 0, 50),
            Breakpoint::new(55.0, 154.0, 60, 100),
        ];
        const OFF_SCALE_ROWS: [Breakpoint; 1] = [Breakpoint::new(0.0, 54.0, 0, 501)];

        const EMPTY: BreakpointTable = pm10(&[]);
        const INVERTED: BreakpointTable = pm10(&INVERTED_ROWS);
        const OVERLAP: BreakpointTable = pm10(&OVERLAP_ROWS);
        const GAP: BreakpointTable = pm10(&GAP_ROWS);
        const JUMP: BreakpointTable = pm10(&JUMP_ROWS);
        const OFF_SCALE: BreakpointTable = pm10(&OFF_SCALE_ROWS);

        let (pollutant, averaging) = (Pollutant::Pm10, Averaging::Hours24);
        assert_eq!(
            EMPTY.validate(),
            Err(Error::EmptyTable {
                pollutant,
                averaging
            })
        );
        assert_eq!(
            INVERTED.validate(),
            Err(Error::InvertedRow {
                pollutant,
                averaging,
                row: 0
            })
        );
        assert_eq!(
            OVERLAP.validate(),
            Err(Error::Unsorted {
                pollutant,
                averaging,
                row: 1
            })
        );
        assert_eq!(
            GAP.validate(),
            Err(Error::Gap {
                pollutant,
                averaging,
                row: 1,
                gap: 6.0,
                step: 1.0
            })
        );
        assert_eq!(
            JUMP.validate(),
            Err(Error::IndexDiscontinuity {
                pollutant,
                averaging,
                row: 1
            })
        );
        assert_eq!(
            OFF_SCALE.validate(),
            Err(Error::IndexOutOfScale {
                pollutant,
                averaging,
                row: 0
            })
        );
    }
}
