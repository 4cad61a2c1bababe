use rand::Rng;
use rand_distr::{Distribution, Exp, Poisson};

use crate::error::SimError;

/// Inter-arrival gap `1 / (N + 1)` with `N ~ Poisson(lambda)`.
///
/// This is a discrete stand-in for exponential gaps: the realized arrival
/// rate sits slightly below `lambda`. The `+ 1` keeps every gap finite and
/// non-zero.
#[derive(Debug, Clone)]
pub struct ReciprocalPoisson {
    counts: Poisson<f64>,
}

impl ReciprocalPoisson {
    pub fn new (lambda: f64) -> Result<Self, SimError> {
        let counts = Poisson::new(lambda).map_err(|_| SimError::InvalidParameter {
            name: "arrival_rate",
            value: lambda,
        })?;
        Ok(ReciprocalPoisson { counts })
    }
}

impl Distribution<f64> for ReciprocalPoisson {
    fn sample<R: Rng + ?Sized> (&self, rng: &mut R) -> f64 {
        let count: f64 = self.counts.sample(rng);
        1. / (count + 1.)
    }
}

/// Service durations with mean `1 / rate`
pub fn exponential (rate: f64) -> Result<Exp<f64>, SimError> {
    Exp::new(rate).map_err(|_| SimError::InvalidParameter {
        name: "service_rate",
        value: rate,
    })
}

#[derive(Debug, Clone, Copy)]
pub struct ConstantDistribution<T> where T: Copy {
    value: T
}

impl<T> Distribution<T> for ConstantDistribution<T> where T: Copy {
    fn sample<R: Rng + ?Sized> (&self, _: &mut R) -> T {
        self.value
    }
}

impl<T> ConstantDistribution<T> where T: Copy {
    pub fn new(value: T) -> Self { ConstantDistribution { value } }
}
