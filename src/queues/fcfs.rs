use crate::queues::generator::Arrivals;
use crate::queues::Queue;

/// Single server, first-come-first-served.
///
/// A customer starts service once it has arrived and the previous customer
/// has left, so its exit is `max(time + work, last_exit + work)`.
#[derive(Debug, Default, Clone)]
pub struct FcfsServer {
    last_exit: Option<f64>,
    served: usize,
}

impl FcfsServer {
    pub fn new () -> Self {
        FcfsServer { last_exit: None, served: 0 }
    }
}

impl Queue for FcfsServer {
    fn arrival (&mut self, time: f64, work: f64) -> f64 {
        let exit = match self.last_exit {
            None => time + work,
            Some(previous) => (time + work).max(previous + work),
        };
        self.last_exit = Some(exit);
        self.served += 1;
        exit
    }

    fn read_last_exit (&self) -> Option<f64> {
        self.last_exit
    }

    fn read_load (&self) -> usize {
        self.served
    }
}

/// Per-customer outcome of pushing a batch of arrivals through a queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Departures {
    pub finishing: Vec<f64>,
    pub total: Vec<f64>,
    pub waiting: Vec<f64>,
}

/// Feeds `arrivals` to `queue` in index order.
pub fn serve<Q> (queue: &mut Q, arrivals: &Arrivals) -> Departures where Q: Queue {
    let finishing: Vec<f64> = arrivals.arrival.iter()
        .zip(&arrivals.service)
        .map(|(&time, &work)| queue.arrival(time, work))
        .collect();

    let total: Vec<f64> = finishing.iter()
        .zip(&arrivals.arrival)
        .map(|(f, a)| f - a)
        .collect();

    // (a + s) - a - s is not exactly zero in floating point.
    let waiting: Vec<f64> = (0..finishing.len())
        .map(|i| {
            let (a, s) = (arrivals.arrival[i], arrivals.service[i]);
            if finishing[i] <= a + s { 0. } else { (total[i] - s).max(0.) }
        })
        .collect();

    Departures { finishing, total, waiting }
}
