//! Defines the temperature dataset as published by the freeCodeCamp project
//! reference data, and the per-record values derived from it at render time.

use crate::types::calendar::{Month, Year};
use serde::{Deserialize, Serialize};

/// The full document: a base temperature and the monthly deviations from it.
///
/// Mirrors the JSON shape field for field (`baseTemperature`,
/// `monthlyVariance`). Nothing is checked after decoding.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Reference temperature in °C that every variance is relative to.
    pub base_temperature: f64,
    /// Monthly records in publication order.
    pub monthly_variance: Vec<MonthlyVariance>,
}

/// One month's deviation from the base temperature.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct MonthlyVariance {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    /// Deviation in °C.
    pub variance: f64,
}

/// A record with its absolute temperature filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRecord {
    pub year: Year,
    pub month: Month,
    pub variance: f64,
    /// `base_temperature + variance`.
    pub temp: f64,
}

impl Dataset {
    /// Decodes a dataset from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Number of monthly records.
    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Derives absolute temperatures for every record, in input order.
    pub fn records(&self) -> impl Iterator<Item = TemperatureRecord> + '_ {
        let base = self.base_temperature;
        self.monthly_variance.iter().map(move |entry| TemperatureRecord {
            year: Year(entry.year),
            month: Month::from_calendar(entry.month),
            variance: entry.variance,
            temp: base + entry.variance,
        })
    }

    /// Earliest and latest year, or `None` for an empty dataset.
    pub fn year_extent(&self) -> Option<(Year, Year)> {
        let years = self.monthly_variance.iter().map(|entry| entry.year);
        let min = years.clone().min()?;
        let max = years.max()?;
        Some((Year(min), Year(max)))
    }

    /// Coldest and warmest absolute temperature, or `None` for an empty dataset.
    pub fn temperature_extent(&self) -> Option<(f64, f64)> {
        self.records().fold(None, |extent, record| match extent {
            None => Some((record.temp, record.temp)),
            Some((lo, hi)) => Some((lo.min(record.temp), hi.max(record.temp))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -1.366},
            {"year": 1753, "month": 2, "variance": -2.223},
            {"year": 2015, "month": 9, "variance": 0.75}
        ]
    }"#;

    #[test]
    fn decodes_camel_case_document() {
        let dataset = Dataset::from_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.monthly_variance[2],
            MonthlyVariance {
                year: 2015,
                month: 9,
                variance: 0.75
            }
        );
    }

    #[test]
    fn records_add_base_temperature() {
        let dataset = Dataset::from_slice(SAMPLE.as_bytes()).unwrap();
        let records: Vec<_> = dataset.records().collect();
        assert_eq!(records.len(), 3);
        for (record, entry) in records.iter().zip(&dataset.monthly_variance) {
            assert_eq!(record.temp, dataset.base_temperature + entry.variance);
            assert_eq!(record.year, Year(entry.year));
            assert_eq!(record.month.index() + 1, entry.month);
        }
    }

    #[test]
    fn extents() {
        let dataset = Dataset::from_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.year_extent(), Some((Year(1753), Year(2015))));
        let (lo, hi) = dataset.temperature_extent().unwrap();
        assert_eq!(lo, 8.66 + -2.223);
        assert_eq!(hi, 8.66 + 0.75);
    }

    #[test]
    fn empty_dataset_has_no_extent() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![],
        };
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_extent(), None);
        assert_eq!(dataset.temperature_extent(), None);
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(Dataset::from_slice(br#"{"baseTemperature": 8.66}"#).is_err());
    }
}
