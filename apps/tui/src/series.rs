//! Turns parsed records into the points shown by the chart and the table.
//!
//! Every indicator screen uses the same rule: drop records without a value
//! or a numeric year, sort by year, keep the most recent `window` points.

use crate::api::{ApiError, IndicatorRecord};

pub const DEFAULT_WINDOW: usize = 20;
pub const MIN_POINTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

/// Builds the chart series. `window == 0` keeps every usable point; any
/// other window is raised to `MIN_POINTS`.
pub fn build_series(
    records: &[IndicatorRecord],
    window: usize,
) -> Result<Vec<Observation>, ApiError> {
    let mut points: Vec<Observation> = records
        .iter()
        .filter_map(|record| {
            let value = record.value.filter(|v| v.is_finite())?;
            let year = record.year()?;
            Some(Observation { year, value })
        })
        .collect();

    points.sort_by_key(|point| point.year);

    let window = if window == 0 { 0 } else { window.max(MIN_POINTS) };
    if window > 0 && points.len() > window {
        points.drain(..points.len() - window);
    }

    if points.len() < MIN_POINTS {
        return Err(ApiError::InsufficientData);
    }

    Ok(points)
}

/// Padded `[min, max]` bounds for the value axis.
pub fn value_bounds(points: &[Observation]) -> [f64; 2] {
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }

    let span = max - min;
    let pad = if span.abs() < f64::EPSILON {
        min.abs().max(1.0) * 0.1
    } else {
        span * 0.1
    };
    [min - pad, max + pad]
}
