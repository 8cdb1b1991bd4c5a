use crate::error::{HeatMapError, Result};
use crate::transform::Cell;
use serde::Serialize;

/// Lowest and highest absolute temperature across a set of cells.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Temperature at fraction `t` of the way from `min` to `max`.
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }
}

/// Single pass min/max over the cell temperatures.
pub fn temperature_range(cells: &[Cell]) -> Result<TemperatureRange> {
    let (first, rest) = cells.split_first().ok_or(HeatMapError::EmptyInput)?;
    let mut range = TemperatureRange {
        min: first.temperature,
        max: first.temperature,
    };
    for cell in rest {
        if cell.temperature < range.min {
            range.min = cell.temperature;
        }
        if cell.temperature > range.max {
            range.max = cell.temperature;
        }
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(temperature: f64) -> Cell {
        Cell {
            year: 1753,
            month: 1,
            month_name: "January",
            variance: temperature - 8.66,
            temperature,
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(temperature_range(&[]), Err(HeatMapError::EmptyInput));
    }

    #[test]
    fn test_single_cell_is_degenerate() {
        let range = temperature_range(&[cell(4.41)]).unwrap();
        assert_eq!(range.min, 4.41);
        assert_eq!(range.max, 4.41);
        assert_eq!(range.span(), 0.0);
    }

    #[test]
    fn test_bounds_come_from_cells() {
        let cells: Vec<Cell> = [7.2, 1.7, 13.9, 4.41, 13.9, -2.5, 9.0]
            .into_iter()
            .map(cell)
            .collect();
        let range = temperature_range(&cells).unwrap();
        assert!(range.min <= range.max);
        assert_eq!(range.min, -2.5);
        assert_eq!(range.max, 13.9);
        assert!(cells.iter().any(|c| c.temperature == range.min));
        assert!(cells.iter().any(|c| c.temperature == range.max));
    }

    #[test]
    fn test_lerp_endpoints() {
        let range = TemperatureRange { min: 1.7, max: 4.41 };
        assert_eq!(range.lerp(0.0), 1.7);
        assert!((range.lerp(1.0) - 4.41).abs() < 1e-12);
    }
}
