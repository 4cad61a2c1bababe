//! The simulation pipeline: generate, recur, discretize, sample, summarize.
//!
//! [`simulate`] is a pure function of its configuration and random source;
//! the same seed always reproduces the same [`SimulationResult`].

use std::ops::Range;

use log::{debug, info, warn};
use num_traits::ToPrimitive;
use rand::Rng;
use rand_distr::Distribution;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::helpers::difference_array::occupancy;
use crate::queues::customer::Customer;
use crate::queues::fcfs::{serve, FcfsServer};
use crate::queues::generator::{Arrivals, ProcessGenerator};
use crate::summary::Summary;

/// Immutable bundle of everything one run computes.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    inter_arrival_times: Vec<f64>,
    arrival_times: Vec<f64>,
    service_times: Vec<f64>,
    finishing_times: Vec<f64>,
    total_times: Vec<f64>,
    waiting_times: Vec<f64>,
    queue_length_over_time: Vec<usize>,
    queue_length_at_arrival: Vec<usize>,
    summary: Summary,
}

impl SimulationResult {
    pub fn sample_count (&self) -> usize { self.arrival_times.len() }

    pub fn inter_arrival_times (&self) -> &[f64] { &self.inter_arrival_times }
    pub fn arrival_times (&self) -> &[f64] { &self.arrival_times }
    pub fn service_times (&self) -> &[f64] { &self.service_times }
    pub fn finishing_times (&self) -> &[f64] { &self.finishing_times }
    pub fn total_times (&self) -> &[f64] { &self.total_times }
    pub fn waiting_times (&self) -> &[f64] { &self.waiting_times }

    /// Queue length at each discretized time unit
    pub fn queue_length_over_time (&self) -> &[usize] { &self.queue_length_over_time }

    /// Queue length seen by each customer at its discretized arrival instant
    pub fn queue_length_at_arrival (&self) -> &[usize] { &self.queue_length_at_arrival }

    pub fn summary (&self) -> &Summary { &self.summary }

    /// `ceil` of the last departure instant
    pub fn horizon (&self) -> usize {
        self.queue_length_over_time.len() - 2
    }

    pub fn customer (&self, id: usize) -> Option<Customer> {
        if id >= self.sample_count() {
            return None;
        }
        Some(Customer {
            id,
            inter_arrival_time: self.inter_arrival_times[id],
            arrival_time: self.arrival_times[id],
            service_time: self.service_times[id],
            finishing_time: self.finishing_times[id],
            total_time: self.total_times[id],
            waiting_time: self.waiting_times[id],
            queue_length: self.queue_length_at_arrival[id],
        })
    }

    pub fn customers (&self) -> impl Iterator<Item = Customer> + '_ {
        (0..self.sample_count()).filter_map(move |id| self.customer(id))
    }
}

/// Runs the M/M/1 model described by `config`, drawing from `rng`.
pub fn simulate<R> (config: &SimConfig, rng: &mut R) -> Result<SimulationResult, SimError> where R: Rng + ?Sized {
    let generator = ProcessGenerator::mm1(config)?;
    if config.nominal_utilization() >= 1. {
        warn!("Nominal utilization λ/μ = {:.3} >= 1: the queue is unstable and the horizon grows with the sample",
              config.nominal_utilization());
    }
    simulate_with(config, &generator, rng)
}

/// Same pipeline as [`simulate`] with caller-chosen distributions.
pub fn simulate_with<I, S, R> (config: &SimConfig, generator: &ProcessGenerator<I, S>, rng: &mut R) -> Result<SimulationResult, SimError>
    where I: Distribution<f64>, S: Distribution<f64>, R: Rng + ?Sized
{
    config.validate()?;
    let arrivals = generator.generate(config.sample_count, rng);
    replay(arrivals, config.max_horizon)
}

/// Pushes already-drawn arrivals through a single FCFS server.
pub fn replay (arrivals: Arrivals, max_horizon: usize) -> Result<SimulationResult, SimError> {
    let departures = serve(&mut FcfsServer::new(), &arrivals);
    debug!("Served {} customers", departures.finishing.len());

    let last_exit = departures.finishing.last().copied().unwrap_or(0.);
    let horizon = discretize(last_exit)
        .filter(|t| t.checked_add(2).map_or(false, |len| len <= max_horizon))
        .ok_or(SimError::ResourceBoundExceeded {
            quantity: "queue_horizon",
            required: last_exit.ceil() + 2.,
            limit: max_horizon,
        })?;
    let len = horizon + 2;

    let intervals: Vec<Range<usize>> = arrivals.arrival.iter()
        .zip(&departures.waiting)
        .map(|(&arrival, &waiting)| presence(arrival, waiting))
        .collect();
    let queue_length_over_time = occupancy(intervals.iter().cloned(), len);
    debug!("Queue length series spans {} time units", len);

    let queue_length_at_arrival: Vec<usize> = intervals.iter()
        .map(|interval| queue_length_over_time[interval.start])
        .collect();

    let summary = Summary::from_samples(&arrivals.inter_arrival, &arrivals.service);
    info!("{}", summary);

    let Arrivals { inter_arrival, arrival, service } = arrivals;
    Ok(SimulationResult {
        inter_arrival_times: inter_arrival,
        arrival_times: arrival,
        service_times: service,
        finishing_times: departures.finishing,
        total_times: departures.total,
        waiting_times: departures.waiting,
        queue_length_over_time,
        queue_length_at_arrival,
        summary,
    })
}

/// Time unit containing instant `t`, i.e. `ceil(t)`
fn discretize (t: f64) -> Option<usize> {
    t.ceil().to_usize()
}

/// Slots during which a customer counts as queued: from its discretized
/// arrival up to the discretized start of service. A customer served in the
/// same unit it arrived still occupies that unit.
fn presence (arrival: f64, waiting: f64) -> Range<usize> {
    let a = discretize(arrival).unwrap_or(0);
    let b = discretize(arrival + waiting).unwrap_or(a).max(a);
    if a == b { a..a + 1 } else { a..b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_is_never_empty() {
        assert_eq!(presence(0.25, 0.), 1..2);
        assert_eq!(presence(0.25, 0.5), 1..2);
        assert_eq!(presence(1., 0.), 1..2);
        assert_eq!(presence(0.5, 2.), 1..3);
    }

    #[test]
    fn replay_hand_built_trace() {
        // arrivals 0.5, 0.75, 1.75, 4.0; service 1.0 each
        let arrivals = Arrivals::from_samples(vec![0.5, 0.25, 1., 2.25], vec![1.; 4]).unwrap();
        let result = replay(arrivals, 1_000).unwrap();

        assert_eq!(result.finishing_times(), &[1.5, 2.5, 3.5, 5.][..]);
        assert_eq!(result.waiting_times(), &[0., 0.75, 0.75, 0.][..]);
        assert_eq!(result.horizon(), 5);
        // customer 0: 1..2, customer 1: 1..2, customer 2: 2..3, customer 3: 4..5
        assert_eq!(result.queue_length_over_time(), &[0, 2, 1, 0, 1, 0, 0][..]);
        assert_eq!(result.queue_length_at_arrival(), &[2, 2, 1, 1][..]);
    }

    #[test]
    fn horizon_above_limit_is_rejected() {
        let arrivals = Arrivals::from_samples(vec![10.], vec![5.]).unwrap();
        match replay(arrivals, 10) {
            Err(SimError::ResourceBoundExceeded { quantity, required, limit }) => {
                assert_eq!(quantity, "queue_horizon");
                assert_eq!(required, 17.);
                assert_eq!(limit, 10);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn horizon_exactly_at_limit_is_accepted() {
        let arrivals = Arrivals::from_samples(vec![10.], vec![5.]).unwrap();
        let result = replay(arrivals, 17).unwrap();
        assert_eq!(result.queue_length_over_time().len(), 17);
    }

    #[test]
    fn customer_rows_follow_arrays() {
        let arrivals = Arrivals::from_samples(vec![0.5, 0.25], vec![1., 1.]).unwrap();
        let result = replay(arrivals, 100).unwrap();
        let rows: Vec<Customer> = result.customers().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, 1);
        assert_eq!(rows[1].arrival_time, 0.75);
        assert_eq!(rows[1].finishing_time, 2.5);
        assert_eq!(rows[1].service_start(), 1.5);
        assert!(rows[1].waited());
        assert!(!rows[0].waited());
        assert!(result.customer(2).is_none());
    }
}
