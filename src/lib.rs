//! Single-server FCFS (M/M/1) queue simulator.
//!
//! Customers arrive with gaps `1 / (Poisson(λ) + 1)` and need `Exp(μ)`
//! service. The simulator derives every customer's departure through the
//! busy-period recurrence, then the discretized queue-length series and the
//! queue length seen at each arrival.
//!
//! ```no_run
//! use mm1_sim::{simulate, SimConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = SimConfig::new(30., 40., 1000);
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = simulate(&config, &mut rng).unwrap();
//! println!("{}", result.summary());
//! ```

pub mod config;
pub mod distribution;
pub mod error;
pub mod helpers;
pub mod queues;
pub mod report;
pub mod simulation;
pub mod summary;

pub use config::SimConfig;
pub use error::{ReportError, SimError};
pub use simulation::{replay, simulate, simulate_with, SimulationResult};
pub use summary::{Statistics, Summary};
