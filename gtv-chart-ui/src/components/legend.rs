//! Discrete color legend with a gradient backdrop and a numeric axis.

use super::AxisView;
use dioxus::prelude::*;
use gtv_data::scene::{regions, translate, GradientStop, Legend, Swatch, GRADIENT_ID};

#[derive(Props, Clone, PartialEq)]
pub struct LegendViewProps {
    pub legend: Legend,
}

/// Gradient definition for the legend backdrop, bottom (min) to top (max).
///
/// Must be placed inside the SVG's `defs`.
pub fn legend_gradient(legend: &Legend) -> Element {
    let height = legend.height;

    rsx! {
        linearGradient {
            id: GRADIENT_ID,
            "gradientUnits": "userSpaceOnUse",
            "x1": "0",
            "y1": "{height}",
            "x2": "0",
            "y2": "0",
            {legend.gradient.iter().map(render_stop)}
        }
    }
}

fn render_stop(stop: &GradientStop) -> Element {
    let offset = format!("{}%", stop.offset * 100.0);
    let color = stop.color.to_string();

    rsx! {
        stop {
            key: "{offset}",
            offset: "{offset}",
            "stop-color": "{color}",
        }
    }
}

fn render_swatch(swatch: &Swatch) -> Element {
    let y = swatch.y;
    let width = swatch.width;
    let height = swatch.height;
    let fill = swatch.fill.to_string();
    let temperature = swatch.temperature;

    rsx! {
        rect {
            key: "{y}",
            class: "legend-rect",
            x: "0",
            y: "{y}",
            width: "{width}",
            height: "{height}",
            fill: "{fill}",
            "data-temp": "{temperature}",
            stroke: "#333",
            "stroke-width": "0.5",
        }
    }
}

/// The `#legend` region: one solid block per swatch over the gradient.
#[component]
pub fn LegendView(props: LegendViewProps) -> Element {
    let legend = &props.legend;
    let transform = translate(legend.translate);
    let width = legend.width;
    let height = legend.height;
    let gradient_fill = format!("url(#{})", GRADIENT_ID);
    let caption_x = legend.caption.x;
    let caption_y = legend.caption.y;
    let caption = legend.caption.text;

    rsx! {
        g {
            id: regions::LEGEND,
            transform: "{transform}",
            {legend.swatches.iter().map(render_swatch)}
            rect {
                width: "{width}",
                height: "{height}",
                fill: "{gradient_fill}",
                "fill-opacity": "0.35",
                stroke: "#333",
                "stroke-width": "1",
            }
            AxisView { axis: legend.axis.clone(), font_size: 11 }
            text {
                x: "{caption_x}",
                y: "{caption_y}",
                "font-size": "12",
                "font-weight": "600",
                "{caption}"
            }
        }
    }
}
