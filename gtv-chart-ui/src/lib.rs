//! Shared Dioxus components and browser data loading for the heat map app.
//!
//! This crate provides:
//! - `fetch`: the dataset request via the browser `fetch` API
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: RSX components that draw a `gtv_data::scene::HeatMapScene`

pub mod components;
pub mod fetch;
pub mod state;
