//! Monthly Global Land-Surface Temperature
//!
//! Heat map of monthly temperature variance from 1753 to 2015, one cell per
//! (year, month), colored from blue (cold) to red (warm).
//!
//! Data flow:
//! 1. On mount: fetch the dataset JSON in the browser.
//! 2. When the dataset changes: rebuild the whole scene with
//!    `gtv_data::scene::build_scene` (a pure function, no incremental updates).
//! 3. Render the scene as SVG; hovering a cell shows the tooltip.
//! 4. On failure: replace the chart with an error view and a retry button.

use dioxus::prelude::*;
use gtv_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, HeatMap, LoadingSpinner, TooltipView,
};
use gtv_chart_ui::state::AppState;
use gtv_data::scene::{build_scene, HeatMapScene, TITLE_TEXT};
use gtv_data::source::DATASET_URL;
use gtv_data::state::LoadState;
use gtv_data::HeatMapError;
use std::rc::Rc;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("heat-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── Effect: fetch the dataset once on mount ───
    use_effect(move || {
        state.load(DATASET_URL);
    });

    // ─── Memo: full scene rebuild whenever the dataset changes ───
    let scene: Memo<Option<Result<Rc<HeatMapScene>, HeatMapError>>> = use_memo(move || {
        let dataset = state.data.read().dataset()?;
        let config = *state.config.read();
        let built = build_scene(&dataset, &config).map(Rc::new);
        if let Err(err) = &built {
            log::warn!("Cannot render dataset: {}", err);
        }
        Some(built)
    });

    let status = state.data.read().status().clone();
    let retry = move |_: MouseEvent| state.load(DATASET_URL);

    // ─── Render ───
    rsx! {
        div {
            style: "min-height: 100vh; padding: 32px 16px; background: linear-gradient(135deg, #EFF6FF, #EEF2FF, #F5F3FF); font-family: system-ui, -apple-system, sans-serif;",

            {match (status, scene()) {
                (LoadState::Failed(err), _) => rsx! {
                    ErrorDisplay { message: err.to_string(), on_retry: retry }
                },
                (LoadState::Ready(_), Some(Err(err))) => rsx! {
                    ErrorDisplay { message: err.to_string(), on_retry: retry }
                },
                (LoadState::Ready(_), Some(Ok(scene))) => rsx! {
                    ChartHeader {
                        title: TITLE_TEXT.to_string(),
                        description: scene.description.clone(),
                    }
                    ChartContainer {
                        HeatMap { scene: scene.clone() }
                    }
                    TooltipView { scene: scene.clone() }
                    SourceFooter {}
                },
                _ => rsx! {
                    LoadingSpinner {}
                },
            }}
        }
    }
}

/// Link back to the upstream dataset.
#[component]
fn SourceFooter() -> Element {
    rsx! {
        p {
            style: "margin-top: 24px; font-size: 13px; color: #888; text-align: center;",
            "Data source: "
            a {
                href: DATASET_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                style: "color: #4F46E5;",
                "FreeCodeCamp Global Temperature Dataset"
            }
        }
    }
}
