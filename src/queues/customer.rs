/// Everything recorded about one simulated customer.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Customer {
    pub id: usize,
    pub inter_arrival_time: f64,
    pub arrival_time: f64,
    pub service_time: f64,
    pub finishing_time: f64,
    pub total_time: f64,
    pub waiting_time: f64,
    /// Queue length sampled at the discretized arrival instant
    pub queue_length: usize,
}

impl Customer {
    /// Instant service begins
    pub fn service_start (&self) -> f64 {
        self.finishing_time - self.service_time
    }

    pub fn waited (&self) -> bool {
        self.waiting_time > 0.
    }
}
