//! Declarative description of the rendered heat map.
//!
//! [`build_scene`] is the whole render pass: it turns a [`Dataset`] into
//! positioned and colored shapes plus axis and legend descriptions. The web
//! app walks the result with RSX, the CLI serializes it to SVG. Nothing here
//! touches a DOM or keeps state between calls.

use crate::color::{ColorScale, Rgb};
use crate::config::HeatMapConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::range::{temperature_range, TemperatureRange};
use crate::scale::{BandScale, LinearScale};
use crate::transform::{month_name, to_cells, Cell};

/// Stable element ids for each region of the page.
pub mod regions {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const HEAT_MAP: &str = "heat-map";
    pub const X_AXIS: &str = "x-axis";
    pub const Y_AXIS: &str = "y-axis";
    pub const LEGEND: &str = "legend";
    pub const TOOLTIP: &str = "tooltip";
}

pub const TITLE_TEXT: &str = "Monthly Global Land-Surface Temperature";

/// Element id of the legend's continuous gradient definition.
pub const GRADIENT_ID: &str = "temperature-gradient";

/// Approximate number of numeric ticks on the legend axis.
const LEGEND_TICK_COUNT: usize = 10;

/// One colored cell, in plot coordinates.
#[derive(Debug, PartialEq, Clone)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    pub year: i32,
    /// Calendar month, 1 = January
    pub month: i32,
    /// Zero-indexed month exposed as `data-month`
    pub data_month: i32,
    pub month_name: &'static str,
    pub temperature: f64,
    pub variance: f64,
}

/// A labeled tick; `offset` runs along the axis.
#[derive(Debug, PartialEq, Clone)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// Axis title text, optionally rotated about its anchor.
#[derive(Debug, PartialEq, Clone)]
pub struct Caption {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AxisOrient {
    Bottom,
    Left,
    Right,
}

/// Length of the tick marks, in pixels.
const TICK_SIZE: f64 = 6.0;

impl AxisOrient {
    /// SVG path for the axis line including the outer tick marks.
    pub fn domain_path(self, length: f64) -> String {
        match self {
            AxisOrient::Bottom => format!("M0,{s}V0H{l}V{s}", s = TICK_SIZE, l = length),
            AxisOrient::Left => format!("M-{s},0H0V{l}H-{s}", s = TICK_SIZE, l = length),
            AxisOrient::Right => format!("M{s},0H0V{l}H{s}", s = TICK_SIZE, l = length),
        }
    }

    pub fn tick_transform(self, offset: f64) -> String {
        match self {
            AxisOrient::Bottom => translate((offset, 0.0)),
            AxisOrient::Left | AxisOrient::Right => translate((0.0, offset)),
        }
    }

    /// End point of the tick mark line, starting at the tick origin.
    pub fn tick_line(self) -> (f64, f64) {
        match self {
            AxisOrient::Bottom => (0.0, TICK_SIZE),
            AxisOrient::Left => (-TICK_SIZE, 0.0),
            AxisOrient::Right => (TICK_SIZE, 0.0),
        }
    }

    /// Label anchor point, `text-anchor` and vertical `dy` for a tick label.
    pub fn label_placement(self) -> ((f64, f64), &'static str, &'static str) {
        let gap = TICK_SIZE + 3.0;
        match self {
            AxisOrient::Bottom => ((0.0, gap), "middle", "0.71em"),
            AxisOrient::Left => ((-gap, 0.0), "end", "0.32em"),
            AxisOrient::Right => ((gap, 0.0), "start", "0.32em"),
        }
    }
}

/// SVG `transform` value for a translation.
pub fn translate((x, y): (f64, f64)) -> String {
    format!("translate({},{})", x, y)
}

#[derive(Debug, PartialEq, Clone)]
pub struct Axis {
    pub id: &'static str,
    pub orient: AxisOrient,
    /// Translation of the axis group relative to its parent
    pub translate: (f64, f64),
    /// Length of the axis line
    pub length: f64,
    pub ticks: Vec<Tick>,
}

/// A single discrete legend block.
#[derive(Debug, PartialEq, Clone)]
pub struct Swatch {
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    pub temperature: f64,
}

#[derive(Debug, PartialEq, Clone)]
pub struct GradientStop {
    /// Fraction of the legend height, 0 at the bottom
    pub offset: f64,
    pub color: Rgb,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Legend {
    /// Translation of the legend group relative to the outer surface
    pub translate: (f64, f64),
    pub width: f64,
    pub height: f64,
    pub swatches: Vec<Swatch>,
    pub gradient: Vec<GradientStop>,
    pub axis: Axis,
    pub caption: Caption,
}

/// Everything needed to draw one heat map.
#[derive(Debug, PartialEq, Clone)]
pub struct HeatMapScene {
    pub width: f64,
    pub height: f64,
    /// Translation of the plot group (left and top margins)
    pub plot_origin: (f64, f64),
    pub plot_width: f64,
    pub plot_height: f64,
    pub title: &'static str,
    pub description: String,
    pub range: TemperatureRange,
    pub cells: Vec<CellRect>,
    pub x_axis: Axis,
    pub x_caption: Caption,
    pub y_axis: Axis,
    pub y_caption: Caption,
    pub legend: Legend,
}

impl HeatMapScene {
    pub fn cell(&self, year: i32, month: i32) -> Option<&CellRect> {
        self.cells.iter().find(|c| c.year == year && c.month == month)
    }
}

/// Page description naming the base temperature and covered years.
pub fn describe(dataset: &Dataset) -> String {
    let span = match dataset.year_span() {
        Some((first, last)) => format!(" Temperature variations from {} to {}.", first, last),
        None => String::new(),
    };
    format!(
        "{}°C base temperature.{} Each cell represents the temperature variance for a specific month and year.",
        dataset.base_temperature, span
    )
}

/// Temperatures sampled evenly from `range.min` to `range.max`.
pub fn legend_temperatures(range: &TemperatureRange, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![range.min],
        _ => (0..steps)
            .map(|i| range.lerp(i as f64 / (steps - 1) as f64))
            .collect(),
    }
}

/// Build the complete scene for `dataset`.
pub fn build_scene(dataset: &Dataset, config: &HeatMapConfig) -> Result<HeatMapScene> {
    let cells = to_cells(dataset)?;
    let range = temperature_range(&cells)?;

    let plot_width = config.plot_width();
    let plot_height = config.plot_height();
    let years = BandScale::new(cells.iter().map(|c| c.year), plot_width, config.band_padding);
    let months = BandScale::new(1..=12, plot_height, config.band_padding);
    let colors = ColorScale::new(range);

    let rects = cells
        .iter()
        .filter_map(|cell| cell_rect(cell, &years, &months, &colors))
        .collect();

    Ok(HeatMapScene {
        width: config.width,
        height: config.height,
        plot_origin: (config.margin.left, config.margin.top),
        plot_width,
        plot_height,
        title: TITLE_TEXT,
        description: describe(dataset),
        range,
        cells: rects,
        x_axis: year_axis(&years, plot_width, plot_height, config.year_tick_every),
        x_caption: Caption {
            text: "Years",
            x: plot_width / 2.0,
            y: plot_height + 50.0,
            rotate: 0.0,
        },
        y_axis: month_axis(&months, plot_height),
        y_caption: Caption {
            text: "Months",
            x: -plot_height / 2.0,
            y: -50.0,
            rotate: -90.0,
        },
        legend: legend(&range, &colors, config),
    })
}

fn cell_rect(
    cell: &Cell,
    years: &BandScale<i32>,
    months: &BandScale<i32>,
    colors: &ColorScale,
) -> Option<CellRect> {
    Some(CellRect {
        x: years.position(cell.year)?,
        y: months.position(cell.month)?,
        width: years.bandwidth(),
        height: months.bandwidth(),
        fill: colors.color(cell.temperature),
        year: cell.year,
        month: cell.month,
        data_month: cell.zero_based_month(),
        month_name: cell.month_name,
        temperature: cell.temperature,
        variance: cell.variance,
    })
}

fn year_axis(years: &BandScale<i32>, plot_width: f64, plot_height: f64, every: usize) -> Axis {
    let every = every.max(1);
    let ticks = years
        .domain()
        .iter()
        .enumerate()
        .filter(|(i, _)| i % every == 0)
        .filter_map(|(_, year)| {
            Some(Tick {
                offset: years.center(*year)?,
                label: year.to_string(),
            })
        })
        .collect();
    Axis {
        id: regions::X_AXIS,
        orient: AxisOrient::Bottom,
        translate: (0.0, plot_height),
        length: plot_width,
        ticks,
    }
}

fn month_axis(months: &BandScale<i32>, plot_height: f64) -> Axis {
    let ticks = months
        .domain()
        .iter()
        .filter_map(|month| {
            Some(Tick {
                offset: months.center(*month)?,
                label: month_name(*month)?.to_string(),
            })
        })
        .collect();
    Axis {
        id: regions::Y_AXIS,
        orient: AxisOrient::Left,
        translate: (0.0, 0.0),
        length: plot_height,
        ticks,
    }
}

fn legend(range: &TemperatureRange, colors: &ColorScale, config: &HeatMapConfig) -> Legend {
    let steps = config.legend_steps;
    let swatch_height = if steps == 0 {
        0.0
    } else {
        config.legend_height / steps as f64
    };
    // coldest at the bottom, matching the legend axis and gradient
    let swatches = legend_temperatures(range, steps)
        .into_iter()
        .enumerate()
        .map(|(i, temperature)| Swatch {
            y: swatch_height * (steps - 1 - i) as f64,
            width: config.legend_width,
            height: swatch_height,
            fill: colors.color(temperature),
            temperature,
        })
        .collect();

    let gradient = (0..=steps.max(1))
        .map(|i| {
            let offset = i as f64 / steps.max(1) as f64;
            GradientStop {
                offset,
                color: colors.color(range.lerp(offset)),
            }
        })
        .collect();

    let axis_scale = LinearScale::new((range.min, range.max), (config.legend_height, 0.0));
    let ticks = axis_scale
        .ticks(LEGEND_TICK_COUNT)
        .into_iter()
        .map(|value| Tick {
            offset: axis_scale.map(value),
            label: format!("{}°C", value),
        })
        .collect();

    let plot_height = config.plot_height();
    Legend {
        translate: (
            config.plot_width() + config.margin.left + config.legend_offset,
            config.margin.top + (plot_height - config.legend_height) / 2.0,
        ),
        width: config.legend_width,
        height: config.legend_height,
        swatches,
        gradient,
        axis: Axis {
            id: "legend-axis",
            orient: AxisOrient::Right,
            translate: (config.legend_width, 0.0),
            length: config.legend_height,
            ticks,
        },
        caption: Caption {
            text: "Temperature (°C)",
            x: config.legend_width + 35.0,
            y: -10.0,
            rotate: 0.0,
        },
    }
}
