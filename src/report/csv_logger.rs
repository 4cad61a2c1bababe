use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;

use log::info;

use crate::queues::customer::Customer;
use crate::simulation::SimulationResult;

const HEADER: &str = "customer,inter_arrival_time,arrival_time,service_time,finishing_time,total_time,waiting_time,queue_length";

/// Buffers customer rows and writes them out as CSV every `buffer_size` rows.
pub struct CsvLogger<W> where W: Write {
    buffer: Vec<Customer>,
    buffer_size: usize,
    out: W,
    rows_written: usize,
}

impl CsvLogger<BufWriter<File>> {
    pub fn create<P: AsRef<Path>> (path: P, buffer_size: usize) -> Result<Self> {
        CsvLogger::new(BufWriter::new(File::create(path)?), buffer_size)
    }
}

impl<W> CsvLogger<W> where W: Write {
    /// Writes the header line immediately.
    pub fn new (mut out: W, buffer_size: usize) -> Result<Self> {
        writeln!(out, "{}", HEADER)?;
        let buffer_size = buffer_size.max(1);
        Ok(CsvLogger {
            buffer: Vec::with_capacity(buffer_size),
            buffer_size,
            out,
            rows_written: 0,
        })
    }

    pub fn log (&mut self, customer: Customer) -> Result<()> {
        self.buffer.push(customer);
        if self.buffer.len() >= self.buffer_size {
            self.dump_log()?;
        }
        Ok(())
    }

    fn dump_log (&mut self) -> Result<()> {
        for c in self.buffer.drain(..) {
            writeln!(self.out, "{},{},{},{},{},{},{},{}",
                     c.id, c.inter_arrival_time, c.arrival_time, c.service_time,
                     c.finishing_time, c.total_time, c.waiting_time, c.queue_length)?;
            self.rows_written += 1;
        }
        Ok(())
    }

    pub fn rows_written (&self) -> usize {
        self.rows_written
    }

    /// Writes any buffered rows, flushes and hands back the writer.
    pub fn finish (mut self) -> Result<W> {
        self.dump_log()?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Writes one row per customer of `result` to `path`, returning the row count.
pub fn export_csv<P: AsRef<Path>> (result: &SimulationResult, path: P) -> Result<usize> {
    let mut logger = CsvLogger::create(path.as_ref(), 1024)?;
    for customer in result.customers() {
        logger.log(customer)?;
    }
    logger.finish()?;
    let rows = result.sample_count();
    info!("{} customers exported to {}", rows, path.as_ref().display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queues::generator::Arrivals;
    use crate::simulation::replay;

    fn customer(id: usize) -> Customer {
        Customer {
            id,
            inter_arrival_time: 0.5,
            arrival_time: 0.5 * (id + 1) as f64,
            service_time: 0.25,
            finishing_time: 0.5 * (id + 1) as f64 + 0.25,
            total_time: 0.25,
            waiting_time: 0.,
            queue_length: 1,
        }
    }

    #[test]
    fn rows_are_held_until_buffer_fills() {
        let mut logger = CsvLogger::new(Vec::new(), 2).unwrap();
        logger.log(customer(0)).unwrap();
        assert_eq!(logger.rows_written(), 0);
        logger.log(customer(1)).unwrap();
        assert_eq!(logger.rows_written(), 2);
        logger.log(customer(2)).unwrap();

        let out = String::from_utf8(logger.finish().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "0,0.5,0.5,0.25,0.75,0.25,0,1");
        assert!(lines[3].starts_with("2,"));
    }

    #[test]
    fn export_writes_every_customer() {
        let arrivals = Arrivals::from_samples(vec![0.5, 0.25, 1.], vec![1.; 3]).unwrap();
        let result = replay(arrivals, 100).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.csv");
        assert_eq!(export_csv(&result, &path).unwrap(), 3);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 4);
        assert!(content.lines().nth(2).unwrap().starts_with("1,0.25,0.75,1,2.5,"));
    }
}
