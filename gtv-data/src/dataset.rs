use serde::{Deserialize, Serialize};

/// One month's deviation from the base temperature.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    /// Calendar month, 1 = January
    pub month: i32,
    /// Degrees Celsius above (positive) or below the base temperature
    pub variance: f64,
}

/// The full monthly variance dataset as published upstream.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "baseTemperature")]
    pub base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest year present in the records.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.records.iter().map(|r| r.year).min()?;
        let last = self.records.iter().map(|r| r.year).max()?;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -1.366},
            {"year": 1753, "month": 2, "variance": -2.223},
            {"year": 2015, "month": 9, "variance": 1.11}
        ]
    }"#;

    #[test]
    fn test_deserialize_upstream_shape() {
        let dataset: Dataset = serde_json::from_str(JSON).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.records.len(), 3);
        assert_eq!(
            dataset.records[1],
            Record {
                year: 1753,
                month: 2,
                variance: -2.223
            }
        );
    }

    #[test]
    fn test_year_span() {
        let dataset: Dataset = serde_json::from_str(JSON).unwrap();
        assert_eq!(dataset.year_span(), Some((1753, 2015)));

        let empty = Dataset {
            base_temperature: 8.66,
            records: vec![],
        };
        assert!(empty.is_empty());
        assert_eq!(empty.year_span(), None);
    }
}
