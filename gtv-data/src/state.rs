//! Ownership and lifecycle of the fetched dataset.
//!
//! Transitions: `Idle -> Loading -> Ready | Failed`, and any state back to
//! `Loading` when a reload starts. Every load gets a generation number so a
//! slow response from an older request cannot overwrite a newer one.

use crate::dataset::Dataset;
use crate::error::{HeatMapError, Result};
use log::{debug, info, warn};
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(Rc<Dataset>),
    Failed(HeatMapError),
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct DatasetState {
    generation: u64,
    status: LoadState,
}

impl DatasetState {
    pub fn status(&self) -> &LoadState {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadState::Loading)
    }

    /// The loaded dataset, only while `Ready`.
    pub fn dataset(&self) -> Option<Rc<Dataset>> {
        match &self.status {
            LoadState::Ready(dataset) => Some(Rc::clone(dataset)),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&HeatMapError> {
        match &self.status {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Start a new load, discarding whatever was shown before.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.status = LoadState::Loading;
        self.generation
    }

    /// Apply the outcome of load `generation`.
    ///
    /// Returns `false` and leaves the state untouched when a newer load has
    /// started since. A dataset with no records counts as a failure.
    pub fn complete(&mut self, generation: u64, result: Result<Dataset>) -> bool {
        if generation != self.generation {
            debug!(
                "Discarding result of load {} (current is {})",
                generation, self.generation
            );
            return false;
        }
        self.status = match result {
            Ok(dataset) if dataset.is_empty() => {
                warn!("Dataset loaded with no records");
                LoadState::Failed(HeatMapError::NoData)
            }
            Ok(dataset) => {
                info!("Dataset ready with {} records", dataset.records.len());
                LoadState::Ready(Rc::new(dataset))
            }
            Err(err) => {
                warn!("Dataset load failed: {}", err);
                LoadState::Failed(err)
            }
        };
        true
    }
}
