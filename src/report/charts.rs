use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::ReportError;
use crate::report::WINDOW_TITLE;
use crate::simulation::SimulationResult;

pub const CHART_SIZE: (u32, u32) = (1400, 1000);

/// Renders the four panels of a run to an SVG file.
pub fn render_svg<P: AsRef<Path>> (result: &SimulationResult, path: P) -> Result<(), ReportError> {
    let root = SVGBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    draw_panels(&root, result).map_err(render_error)?;
    info!("Charts written to {}", path.as_ref().display());
    Ok(())
}

/// Renders the four panels of a run to an in-memory SVG document.
pub fn render_svg_string (result: &SimulationResult) -> Result<String, ReportError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw_panels(&root, result).map_err(render_error)?;
    }
    Ok(svg)
}

fn render_error<E> (err: DrawingAreaErrorKind<E>) -> ReportError where E: std::error::Error + Send + Sync {
    ReportError::Render(err.to_string())
}

fn draw_panels<DB> (root: &DrawingArea<DB, Shift>, result: &SimulationResult) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
    where DB: DrawingBackend
{
    root.fill(&WHITE)?;
    let title = format!("{}   {}", WINDOW_TITLE, result.summary());
    let body = root.titled(&title, ("sans-serif", 24))?;
    let panels = body.split_evenly((2, 2));

    draw_line(&panels[0], "Total Time / Customer", "Customer Number", "Total Time [m]",
              &per_customer(result.total_times()))?;
    draw_line(&panels[1], "Waiting Time / Customer", "Customer Number", "Waiting Time [m]",
              &per_customer(result.waiting_times()))?;
    draw_line(&panels[2], "Queue length / Time", "Time [m]", "Queue Length",
              &per_slot(result.queue_length_over_time()))?;
    draw_line(&panels[3], "Queue length / Customer Arrival", "Customer Number", "Queue Length",
              &per_slot(result.queue_length_at_arrival()))?;

    root.present()
}

fn draw_line<DB> (area: &DrawingArea<DB, Shift>, caption: &str, x_desc: &str, y_desc: &str, points: &[(f64, f64)])
    -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> where DB: DrawingBackend
{
    let x_max = points.last().map_or(0., |p| p.0).max(1.);
    let y_max = points.iter().map(|p| p.1).fold(0., f64::max);
    let y_max = if y_max > 0. { y_max * 1.05 } else { 1. };

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart.configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    Ok(())
}

fn per_customer (values: &[f64]) -> Vec<(f64, f64)> {
    values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect()
}

fn per_slot (values: &[usize]) -> Vec<(f64, f64)> {
    values.iter().enumerate().map(|(i, &v)| (i as f64, v as f64)).collect()
}
