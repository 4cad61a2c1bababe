use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Exp};

use crate::config::SimConfig;
use crate::distribution::{exponential, ReciprocalPoisson};
use crate::error::SimError;

/// Stochastic inputs of a run, one slot per customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrivals {
    pub inter_arrival: Vec<f64>,
    pub arrival: Vec<f64>,
    pub service: Vec<f64>,
}

impl Arrivals {
    /// Builds the inputs from recorded gaps and service durations, e.g. to
    /// replay a trace. Arrival instants are the running sum of the gaps.
    pub fn from_samples (inter_arrival: Vec<f64>, service: Vec<f64>) -> Result<Self, SimError> {
        if inter_arrival.len() != service.len() {
            return Err(SimError::LengthMismatch {
                inter_arrivals: inter_arrival.len(),
                services: service.len(),
            });
        }
        if inter_arrival.is_empty() {
            return Err(SimError::InvalidParameter { name: "sample_count", value: 0. });
        }
        check_positive("inter_arrival_time", &inter_arrival)?;
        check_positive("service_time", &service)?;

        let arrival = cumulative_sum(&inter_arrival);
        Ok(Arrivals { inter_arrival, arrival, service })
    }

    pub fn len (&self) -> usize {
        self.arrival.len()
    }

    pub fn is_empty (&self) -> bool {
        self.arrival.is_empty()
    }
}

/// Draws inter-arrival gaps and service durations for a batch of customers.
pub struct ProcessGenerator<I, S> where I: Distribution<f64>, S: Distribution<f64> {
    iat_distribution: I,
    service_distribution: S,
}

impl ProcessGenerator<ReciprocalPoisson, Exp<f64>> {
    /// Generator for the M/M/1 model: `1 / (Poisson(λ) + 1)` gaps and
    /// `Exp(μ)` services.
    pub fn mm1 (config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(ProcessGenerator::new(ReciprocalPoisson::new(config.arrival_rate)?,
                                 exponential(config.service_rate)?))
    }
}

impl<I, S> ProcessGenerator<I, S> where I: Distribution<f64>, S: Distribution<f64> {
    pub fn new (iat_distribution: I, service_distribution: S) -> Self {
        ProcessGenerator { iat_distribution, service_distribution }
    }

    /// All gaps are drawn before any service duration, so a seeded source
    /// always yields the same pair of sequences.
    pub fn generate<R: Rng + ?Sized> (&self, sample_count: usize, rng: &mut R) -> Arrivals {
        let inter_arrival: Vec<f64> = (0..sample_count)
            .map(|_| self.iat_distribution.sample(rng))
            .collect();
        let service: Vec<f64> = (0..sample_count)
            .map(|_| self.service_distribution.sample(rng))
            .collect();
        let arrival = cumulative_sum(&inter_arrival);

        debug!("Generated {} customers, last arrival at {:.3}",
               sample_count, arrival.last().copied().unwrap_or(0.));

        Arrivals { inter_arrival, arrival, service }
    }
}

fn cumulative_sum (values: &[f64]) -> Vec<f64> {
    values.iter()
        .scan(0., |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

fn check_positive (name: &'static str, values: &[f64]) -> Result<(), SimError> {
    match values.iter().find(|v| !(**v > 0. && v.is_finite())) {
        Some(&value) => Err(SimError::InvalidParameter { name, value }),
        None => Ok(()),
    }
}
