//! Carscope: a used-vehicle sales analytics dashboard.
//!
//! Loads a static CSV of sales records once at startup, computes aggregate
//! statistics over it, and renders them as interactive egui charts: a
//! per-state tile map driven by a production-year selector, and a
//! manufacturer/model/year search panel with filtered price, transmission,
//! and state-distribution charts.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
