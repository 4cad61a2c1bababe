use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ReportError, SimError};

pub const DEFAULT_ARRIVAL_RATE: f64 = 30.;
pub const DEFAULT_SERVICE_RATE: f64 = 40.;
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

pub const DEFAULT_MAX_SAMPLES: usize = 10_000_000;
pub const DEFAULT_MAX_HORIZON: usize = 50_000_000;

/// Parameters of one simulation run.
///
/// Every field can be omitted from a scenario file, in which case the
/// defaults above apply:
///
/// ```yaml
/// arrival_rate: 30
/// service_rate: 40
/// sample_count: 1000
/// seed: 42
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Mean customer arrival intensity (λ)
    pub arrival_rate: f64,
    /// Mean service intensity (μ)
    pub service_rate: f64,
    /// Number of customers simulated
    pub sample_count: usize,
    /// Seed for the random source; drawn from entropy by the host when absent
    pub seed: Option<u64>,
    /// Upper bound on `sample_count`
    pub max_samples: usize,
    /// Upper bound on the length of the discretized queue-length series
    pub max_horizon: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            arrival_rate: DEFAULT_ARRIVAL_RATE,
            service_rate: DEFAULT_SERVICE_RATE,
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: None,
            max_samples: DEFAULT_MAX_SAMPLES,
            max_horizon: DEFAULT_MAX_HORIZON,
        }
    }
}

impl SimConfig {
    pub fn new (arrival_rate: f64, service_rate: f64, sample_count: usize) -> Self {
        SimConfig {
            arrival_rate,
            service_rate,
            sample_count,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn with_max_horizon(mut self, max_horizon: usize) -> Self {
        self.max_horizon = max_horizon;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ReportError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    /// Checks rates and sample count before anything is allocated.
    pub fn validate(&self) -> Result<(), SimError> {
        check_rate("arrival_rate", self.arrival_rate)?;
        check_rate("service_rate", self.service_rate)?;

        if self.sample_count < 1 {
            return Err(SimError::InvalidParameter {
                name: "sample_count",
                value: self.sample_count as f64,
            });
        }
        if self.sample_count > self.max_samples {
            return Err(SimError::ResourceBoundExceeded {
                quantity: "sample_count",
                required: self.sample_count as f64,
                limit: self.max_samples,
            });
        }
        Ok(())
    }

    /// Utilization implied by the nominal rates, λ/μ
    pub fn nominal_utilization(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), SimError> {
    if value > 0. && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scenario() {
        let config = SimConfig::default();
        assert_eq!(config.arrival_rate, 30.);
        assert_eq!(config.service_rate, 40.);
        assert_eq!(config.sample_count, 1000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = SimConfig::from_yaml_str("arrival_rate: 12.5\nseed: 7\n").unwrap();
        assert_eq!(config.arrival_rate, 12.5);
        assert_eq!(config.service_rate, DEFAULT_SERVICE_RATE);
        assert_eq!(config.sample_count, DEFAULT_SAMPLE_COUNT);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn unknown_yaml_field_is_rejected() {
        assert!(SimConfig::from_yaml_str("arival_rate: 3\n").is_err());
    }

    #[test]
    fn zero_arrival_rate_is_invalid() {
        let err = SimConfig::new(0., 40., 10).validate().unwrap_err();
        assert_eq!(err, SimError::InvalidParameter { name: "arrival_rate", value: 0. });
    }

    #[test]
    fn non_finite_service_rate_is_invalid() {
        assert!(SimConfig::new(1., f64::INFINITY, 10).validate().is_err());
        assert!(SimConfig::new(1., f64::NAN, 10).validate().is_err());
        assert!(SimConfig::new(1., -2., 10).validate().is_err());
    }

    #[test]
    fn empty_sample_is_invalid() {
        match SimConfig::new(1., 2., 0).validate() {
            Err(SimError::InvalidParameter { name, .. }) => assert_eq!(name, "sample_count"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn oversized_sample_is_rejected() {
        let config = SimConfig::new(1., 2., 101).with_max_samples(100);
        match config.validate() {
            Err(SimError::ResourceBoundExceeded { quantity, limit, .. }) => {
                assert_eq!(quantity, "sample_count");
                assert_eq!(limit, 100);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
