//! Presentation of a finished run: summary text, charts, CSV export.
//!
//! Everything here is a deterministic function of a [`SimulationResult`].
//!
//! [`SimulationResult`]: crate::simulation::SimulationResult

pub mod charts;
pub mod csv_logger;

pub const WINDOW_TITLE: &str = "M/M/1 Queuing Model Simulator";
