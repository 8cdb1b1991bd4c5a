//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::fetch::fetch_dataset;
use dioxus::prelude::*;
use gtv_data::interaction::HoverState;
use gtv_data::state::DatasetState;
use gtv_data::HeatMapConfig;

/// Shared application state for the heat map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Fetched dataset and its loading lifecycle
    pub data: Signal<DatasetState>,
    /// Which cell the pointer is over
    pub hover: Signal<HoverState>,
    /// Fixed layout of the chart
    pub config: Signal<HeatMapConfig>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            data: Signal::new(DatasetState::default()),
            hover: Signal::new(HoverState::default()),
            config: Signal::new(HeatMapConfig::default()),
        }
    }

    /// Start a fresh load from `url`, superseding any load in flight.
    pub fn load(self, url: &'static str) {
        let mut data = self.data;
        let mut hover = self.hover;
        let generation = data.write().begin_load();
        hover.set(HoverState::default());

        spawn(async move {
            let result = fetch_dataset(url).await;
            data.write().complete(generation, result);
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
