//! The `#heat-map` SVG surface: cells, axes, captions and legend.

use super::{legend_gradient, AxisView, LegendView};
use crate::state::AppState;
use dioxus::prelude::*;
use gtv_data::scene::{regions, translate, Caption, CellRect, HeatMapScene};
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct HeatMapProps {
    pub scene: Rc<HeatMapScene>,
}

/// Draws a prepared scene. Only the cells read `AppState::hover`, so a hover
/// change never re-renders the axes or the legend.
#[component]
pub fn HeatMap(props: HeatMapProps) -> Element {
    let scene = &props.scene;
    let width = scene.width;
    let height = scene.height;
    let plot_transform = translate(scene.plot_origin);

    rsx! {
        svg {
            id: regions::HEAT_MAP,
            width: "{width}",
            height: "{height}",
            style: "display: block; margin: 0 auto;",
            defs {
                {legend_gradient(&scene.legend)}
            }
            g {
                transform: "{plot_transform}",
                for (index, cell) in scene.cells.iter().enumerate() {
                    CellView { key: "{index}", index, cell: cell.clone() }
                }
                AxisView { axis: scene.x_axis.clone() }
                AxisView { axis: scene.y_axis.clone() }
                {render_caption(&scene.x_caption)}
                {render_caption(&scene.y_caption)}
            }
            LegendView { legend: scene.legend.clone() }
        }
    }
}

/// One `rect.cell`. Re-renders only when its own stroke changes.
#[component]
fn CellView(index: usize, cell: CellRect) -> Element {
    let mut hover = use_context::<AppState>().hover;
    let stroke = use_memo(move || hover.read().stroke(index));
    let stroke_color = stroke().color;
    let stroke_width = stroke().width;
    let fill = cell.fill.to_string();
    let (x, y, width, height) = (cell.x, cell.y, cell.width, cell.height);
    let (year, data_month, temperature) = (cell.year, cell.data_month, cell.temperature);

    rsx! {
        rect {
            class: "cell",
            x: "{x}",
            y: "{y}",
            width: "{width}",
            height: "{height}",
            fill: "{fill}",
            "data-year": "{year}",
            "data-month": "{data_month}",
            "data-temp": "{temperature}",
            stroke: "{stroke_color}",
            "stroke-width": "{stroke_width}",
            style: "cursor: pointer;",
            onmouseenter: move |evt: MouseEvent| {
                let point = evt.page_coordinates();
                hover.write().pointer_enter(index, point.x, point.y);
            },
            onmouseleave: move |_| {
                hover.write().pointer_leave(index);
            },
        }
    }
}

fn render_caption(caption: &Caption) -> Element {
    let transform = format!("rotate({})", caption.rotate);
    let (x, y, text) = (caption.x, caption.y, caption.text);

    rsx! {
        text {
            transform: "{transform}",
            x: "{x}",
            y: "{y}",
            "text-anchor": "middle",
            "font-size": "14",
            "font-weight": "600",
            "{text}"
        }
    }
}
