//! Reusable Dioxus RSX components for the heat map app.

mod axis;
mod chart_container;
mod chart_header;
mod error_display;
mod heat_map;
mod legend;
mod loading_spinner;
mod tooltip;

pub use axis::AxisView;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use heat_map::HeatMap;
pub use legend::{legend_gradient, LegendView};
pub use loading_spinner::LoadingSpinner;
pub use tooltip::TooltipView;
