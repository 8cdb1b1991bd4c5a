//! SVG axis drawn from a scene [`Axis`] description.

use dioxus::prelude::*;
use gtv_data::scene::{translate, Axis, AxisOrient, Tick};

#[derive(Props, Clone, PartialEq)]
pub struct AxisViewProps {
    pub axis: Axis,
    #[props(default = 12)]
    pub font_size: u32,
}

/// Axis line, tick marks and labels, in the axis' own group.
#[component]
pub fn AxisView(props: AxisViewProps) -> Element {
    let axis = &props.axis;
    let orient = axis.orient;
    let transform = translate(axis.translate);
    let domain = orient.domain_path(axis.length);
    let font_size = props.font_size;

    rsx! {
        g {
            id: axis.id,
            transform: "{transform}",
            "font-size": "{font_size}",
            "font-family": "sans-serif",
            path {
                d: "{domain}",
                fill: "none",
                stroke: "currentColor",
            }
            {axis.ticks.iter().map(|tick| render_tick(orient, tick))}
        }
    }
}

fn render_tick(orient: AxisOrient, tick: &Tick) -> Element {
    let transform = orient.tick_transform(tick.offset);
    let (x2, y2) = orient.tick_line();
    let ((label_x, label_y), anchor, dy) = orient.label_placement();
    let label = tick.label.clone();

    rsx! {
        g {
            key: "{label}",
            class: "tick",
            transform: "{transform}",
            line {
                x2: "{x2}",
                y2: "{y2}",
                stroke: "currentColor",
            }
            text {
                x: "{label_x}",
                y: "{label_y}",
                dy: "{dy}",
                fill: "currentColor",
                "text-anchor": "{anchor}",
                "font-weight": "500",
                "{label}"
            }
        }
    }
}
