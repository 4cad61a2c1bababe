use std::fmt;

use crate::config::SimConfig;
use crate::helpers::percentile::percentile;
use crate::simulation::SimulationResult;

/// Rates and utilization realized by one sample.
///
/// These are estimates from the drawn values, not the configured rates, and
/// drift from λ and μ with sampling noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub sample_count: usize,
    /// `round(1 / mean(inter-arrival time))`
    pub mean_arrival_rate: f64,
    /// `round(1 / mean(service time))`
    pub mean_service_rate: f64,
    /// `mean_arrival_rate / mean_service_rate` as a percentage, two decimals.
    /// Infinite when the rounded service rate is zero.
    pub utilization_percent: f64,
}

impl Summary {
    pub fn from_samples (inter_arrival: &[f64], service: &[f64]) -> Self {
        let mean_arrival_rate = (1. / statistical::mean(inter_arrival)).round();
        let mean_service_rate = (1. / statistical::mean(service)).round();
        Summary {
            sample_count: inter_arrival.len(),
            mean_arrival_rate,
            mean_service_rate,
            utilization_percent: round_to(mean_arrival_rate / mean_service_rate * 100., 2),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "No. of customers = {}   λ = {}   μ = {}   ρ = {}%",
               self.sample_count, self.mean_arrival_rate, self.mean_service_rate, self.utilization_percent)
    }
}

fn round_to (value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Textbook steady-state M/M/1 values for the configured λ and μ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyState {
    /// Mean number in system, ρ / (1 - ρ)
    pub in_system: f64,
    /// Mean number waiting, ρ² / (1 - ρ)
    pub in_queue: f64,
    /// Mean sojourn time, 1 / (μ - λ)
    pub sojourn_time: f64,
    /// Mean waiting time, ρ / (μ - λ)
    pub waiting_time: f64,
}

impl SteadyState {
    /// `None` when λ >= μ, where no steady state exists.
    pub fn mm1 (arrival_rate: f64, service_rate: f64) -> Option<Self> {
        let rho = arrival_rate / service_rate;
        if !(rho < 1.) {
            return None;
        }
        Some(SteadyState {
            in_system: rho / (1. - rho),
            in_queue: rho * rho / (1. - rho),
            sojourn_time: 1. / (service_rate - arrival_rate),
            waiting_time: rho / (service_rate - arrival_rate),
        })
    }
}

/// Congestion statistics of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub mean_waiting_time: f64,
    pub median_waiting_time: f64,
    pub std_dev_waiting_time: f64,
    pub p95_waiting_time: f64,
    pub mean_total_time: f64,
    pub mean_queue_length: f64,
    pub max_queue_length: usize,
    pub waited_fraction: f64,
    /// Nominal λ/μ
    pub nominal_utilization: f64,
    pub steady_state: Option<SteadyState>,
}

impl Statistics {
    pub fn compute (result: &SimulationResult, config: &SimConfig) -> Self {
        let waiting = result.waiting_times();
        let queue: Vec<f64> = result.queue_length_over_time().iter().map(|&q| q as f64).collect();

        // statistical's variance needs two points
        let std_dev_waiting_time = if waiting.len() > 1 {
            statistical::standard_deviation(waiting, None)
        } else {
            0.
        };

        Statistics {
            mean_waiting_time: statistical::mean(waiting),
            median_waiting_time: statistical::median(waiting),
            std_dev_waiting_time,
            p95_waiting_time: percentile(waiting, 0.95).unwrap_or(0.),
            mean_total_time: statistical::mean(result.total_times()),
            mean_queue_length: statistical::mean(&queue),
            max_queue_length: result.queue_length_over_time().iter().copied().max().unwrap_or(0),
            waited_fraction: waiting.iter().filter(|&&w| w > 0.).count() as f64 / waiting.len() as f64,
            nominal_utilization: config.nominal_utilization(),
            steady_state: SteadyState::mm1(config.arrival_rate, config.service_rate),
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Waiting time: mean {:.4}  median {:.4}  std {:.4}  p95 {:.4}",
                 self.mean_waiting_time, self.median_waiting_time,
                 self.std_dev_waiting_time, self.p95_waiting_time)?;
        writeln!(f, "Total time: mean {:.4}", self.mean_total_time)?;
        writeln!(f, "Queue length: mean {:.3}  max {}  customers who waited {:.1}%",
                 self.mean_queue_length, self.max_queue_length, self.waited_fraction * 100.)?;
        write!(f, "Nominal ρ = {:.2}%", self.nominal_utilization * 100.)?;
        match self.steady_state {
            Some(ss) => write!(f, "  (M/M/1: L = {:.3}  Lq = {:.3}  W = {:.4}  Wq = {:.4})",
                               ss.in_system, ss.in_queue, ss.sojourn_time, ss.waiting_time),
            None => write!(f, "  (no steady state)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_rounds_rates_and_utilization() {
        // mean gap 0.04 -> 25, mean service 0.03 -> 33.33 -> 33
        let summary = Summary::from_samples(&[0.03, 0.05], &[0.02, 0.04]);
        assert_eq!(summary.sample_count, 2);
        assert_eq!(summary.mean_arrival_rate, 25.);
        assert_eq!(summary.mean_service_rate, 33.);
        assert_eq!(summary.utilization_percent, 75.76);
    }

    #[test]
    fn summary_display_line() {
        let summary = Summary {
            sample_count: 1000,
            mean_arrival_rate: 29.,
            mean_service_rate: 40.,
            utilization_percent: 72.5,
        };
        assert_eq!(summary.to_string(), "No. of customers = 1000   λ = 29   μ = 40   ρ = 72.5%");
    }

    #[test]
    fn zero_service_rate_gives_infinite_utilization() {
        let summary = Summary::from_samples(&[0.5], &[4.]);
        assert_eq!(summary.mean_service_rate, 0.);
        assert!(summary.utilization_percent.is_infinite());
    }

    #[test]
    fn steady_state_of_reference_scenario() {
        let ss = SteadyState::mm1(30., 40.).unwrap();
        assert!((ss.in_system - 3.).abs() < 1e-12);
        assert!((ss.in_queue - 2.25).abs() < 1e-12);
        assert!((ss.sojourn_time - 0.1).abs() < 1e-12);
        assert!((ss.waiting_time - 0.075).abs() < 1e-12);
    }

    #[test]
    fn no_steady_state_when_overloaded() {
        assert!(SteadyState::mm1(40., 40.).is_none());
        assert!(SteadyState::mm1(50., 40.).is_none());
    }
}
