pub mod customer;
pub mod fcfs;
pub mod generator;

/// A service station fed with customers in arrival order.
pub trait Queue {
    /// Admits a customer arriving at `time` who needs `work` units of
    /// service, and returns the instant it leaves the station.
    fn arrival (&mut self, time: f64, work: f64) -> f64;

    /// Departure instant of the last admitted customer
    fn read_last_exit (&self) -> Option<f64>;

    /// Number of customers admitted so far
    fn read_load (&self) -> usize;
}
