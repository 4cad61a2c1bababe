//! Error types for the simulator and its reporting front-end

use thiserror::Error;

/// Errors raised while generating or simulating a queue
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("Invalid parameter `{name}`: {value} (must be positive and finite)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Resource bound exceeded for {quantity}: {required} > {limit}")]
    ResourceBoundExceeded {
        quantity: &'static str,
        required: f64,
        limit: usize,
    },

    #[error("Sample length mismatch: {inter_arrivals} inter-arrival times, {services} service times")]
    LengthMismatch { inter_arrivals: usize, services: usize },
}

/// Errors raised by the host program: configuration, rendering and export
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimError),

    #[error("Invalid configuration file: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
