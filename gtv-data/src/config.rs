//! Fixed layout constants for the heat map scene.

use serde::{Deserialize, Serialize};

/// Pixel margins around the plot area.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Layout and sampling parameters for [`crate::scene::build_scene`].
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct HeatMapConfig {
    /// Outer SVG width including margins
    pub width: f64,
    /// Outer SVG height including margins
    pub height: f64,
    pub margin: Margin,
    /// Inner and outer padding of both band scales, as a fraction of the step
    pub band_padding: f64,
    /// Label every Nth distinct year on the x axis
    pub year_tick_every: usize,
    /// Number of discrete legend swatches
    pub legend_steps: usize,
    pub legend_width: f64,
    pub legend_height: f64,
    /// Gap between the plot's right edge and the legend
    pub legend_offset: f64,
}

impl Default for HeatMapConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            margin: Margin {
                top: 20.0,
                right: 120.0,
                bottom: 120.0,
                left: 120.0,
            },
            band_padding: 0.05,
            year_tick_every: 10,
            legend_steps: 8,
            legend_width: 20.0,
            legend_height: 300.0,
            legend_offset: 40.0,
        }
    }
}

impl HeatMapConfig {
    /// Width of the drawable plot, excluding margins.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height of the drawable plot, excluding margins.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Same margins and sampling with a different outer size.
    pub fn with_size(self, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }
}
