use crate::dataset::{Dataset, Record};
use crate::error::{HeatMapError, Result};
use chrono::Month;
use serde::Serialize;
use std::collections::HashSet;

/// A record enriched with its absolute temperature and month name.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Cell {
    pub year: i32,
    /// Calendar month, 1 = January
    pub month: i32,
    pub month_name: &'static str,
    pub variance: f64,
    /// `base_temperature + variance`
    pub temperature: f64,
}

/// English name for a 1-based month number.
pub fn month_name(month: i32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| m.name())
}

impl Cell {
    fn from_record(record: &Record, base_temperature: f64) -> Result<Cell> {
        let month_name = month_name(record.month).ok_or(HeatMapError::MonthOutOfRange {
            year: record.year,
            month: record.month,
        })?;
        Ok(Cell {
            year: record.year,
            month: record.month,
            month_name,
            variance: record.variance,
            temperature: base_temperature + record.variance,
        })
    }

    /// Month number counted from zero, as exposed on rendered elements.
    pub fn zero_based_month(&self) -> i32 {
        self.month - 1
    }
}

/// Convert every record into a [`Cell`], preserving input order.
///
/// Rejects months outside 1..=12 and repeated (year, month) pairs.
pub fn to_cells(dataset: &Dataset) -> Result<Vec<Cell>> {
    let mut seen: HashSet<(i32, i32)> = HashSet::with_capacity(dataset.records.len());
    dataset
        .records
        .iter()
        .map(|record| {
            let cell = Cell::from_record(record, dataset.base_temperature)?;
            if !seen.insert((cell.year, cell.month)) {
                return Err(HeatMapError::DuplicateRecord {
                    year: cell.year,
                    month: cell.month,
                });
            }
            Ok(cell)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(records: Vec<(i32, i32, f64)>) -> Dataset {
        Dataset {
            base_temperature: 8.66,
            records: records
                .into_iter()
                .map(|(year, month, variance)| Record {
                    year,
                    month,
                    variance,
                })
                .collect(),
        }
    }

    #[test]
    fn test_month_name_table() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(2), Some("February"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        assert_eq!(month_name(-1), None);
    }

    #[test]
    fn test_first_two_months_of_1753() {
        let cells = to_cells(&dataset(vec![(1753, 1, -6.96), (1753, 2, -4.25)])).unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].month_name, "January");
        assert_eq!(cells[1].month_name, "February");
        assert!((cells[0].temperature - 1.70).abs() < 1e-9);
        assert!((cells[1].temperature - 4.41).abs() < 1e-9);
        assert_eq!(cells[1].zero_based_month(), 1);
    }

    #[test]
    fn test_temperature_is_exact_sum() {
        let input = dataset(vec![(1800, 3, 0.1), (1800, 4, -0.3), (1900, 7, 1.234567)]);
        let cells = to_cells(&input).unwrap();
        for (cell, record) in cells.iter().zip(input.records.iter()) {
            assert_eq!(cell.temperature, input.base_temperature + record.variance);
            assert_eq!(cell.variance, record.variance);
        }
    }

    #[test]
    fn test_preserves_input_order() {
        let cells = to_cells(&dataset(vec![(2000, 5, 0.0), (1753, 1, 0.0), (1900, 12, 0.0)])).unwrap();
        let order: Vec<(i32, i32)> = cells.iter().map(|c| (c.year, c.month)).collect();
        assert_eq!(order, vec![(2000, 5), (1753, 1), (1900, 12)]);
    }

    #[test]
    fn test_rejects_out_of_range_month() {
        let err = to_cells(&dataset(vec![(1753, 1, 0.0), (1753, 13, 0.0)])).unwrap_err();
        assert_eq!(
            err,
            HeatMapError::MonthOutOfRange {
                year: 1753,
                month: 13
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_year_month() {
        let err = to_cells(&dataset(vec![(1753, 1, 0.0), (1753, 1, 0.5)])).unwrap_err();
        assert_eq!(
            err,
            HeatMapError::DuplicateRecord {
                year: 1753,
                month: 1
            }
        );
    }

    #[test]
    fn test_empty_dataset_yields_no_cells() {
        assert!(to_cells(&dataset(vec![])).unwrap().is_empty());
    }
}
