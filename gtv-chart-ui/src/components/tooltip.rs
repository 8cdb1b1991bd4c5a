//! Floating tooltip for the hovered cell.

use crate::state::AppState;
use dioxus::prelude::*;
use gtv_data::scene::{regions, HeatMapScene};
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct TooltipViewProps {
    pub scene: Rc<HeatMapScene>,
}

/// The `#tooltip` region. Always rendered; hidden with zero opacity.
#[component]
pub fn TooltipView(props: TooltipViewProps) -> Element {
    let state = use_context::<AppState>();
    let tooltip = state.hover.read().tooltip(&props.scene.cells);

    let style = format!(
        "position: absolute; left: {}px; top: {}px; opacity: {}; pointer-events: none; background: #1F2937; color: white; padding: 12px; border-radius: 8px; font-size: 13px; line-height: 1.4; max-width: 200px; transition: opacity 0.2s;",
        tooltip.left,
        tooltip.top,
        tooltip.opacity()
    );
    let data_year = tooltip.data_year.map(|y| y.to_string()).unwrap_or_default();

    rsx! {
        div {
            id: regions::TOOLTIP,
            style: "{style}",
            "data-year": "{data_year}",
            if tooltip.visible {
                strong { "{tooltip.heading}" }
                br {}
                "{tooltip.temperature}"
                br {}
                "{tooltip.variance}"
            }
        }
    }
}
