//! Series transformer.
//!
//! Turns a raw provider time-series payload into a bounded, ordered
//! point sequence for one display window, plus a price-delta summary
//! over the points actually shown.

use serde::{Deserialize, Serialize};

use crate::provider::SeriesPayload;
use crate::{ChartPoint, SeriesError, UtcDateTime, Window};

/// Hard cap on retained points; protects render performance regardless
/// of how much history the provider returns.
pub const MAX_POINTS: usize = 100;

/// Price delta over the displayed sub-sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSummary {
    /// `last - first` over the displayed points.
    pub change: f64,
    /// `change / first * 100`; zero when fewer than two points are
    /// displayed or the first displayed value is zero.
    pub percentage: f64,
}

/// Display-ready chart data for one symbol and window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub window: Window,
    /// All retained points, ascending by timestamp, at most
    /// [`MAX_POINTS`].
    pub points: Vec<ChartPoint>,
    /// How many trailing points the window shows.
    pub display_len: usize,
    pub summary: ChangeSummary,
}

impl ChartSeries {
    /// The trailing sub-sequence selected by the window.
    pub fn display_points(&self) -> &[ChartPoint] {
        &self.points[self.points.len() - self.display_len..]
    }
}

/// Build the chart for a window from a raw date→close map.
///
/// Entries with an unparseable timestamp or close price are dropped.
/// Fails with [`SeriesError::NoData`] when nothing parseable remains;
/// callers must render an explicit empty state, never a blank chart.
pub fn build_chart(payload: &SeriesPayload, window: Window) -> Result<ChartSeries, SeriesError> {
    let mut points: Vec<ChartPoint> = payload
        .entries
        .iter()
        .filter_map(|(date, entry)| {
            let ts = UtcDateTime::parse_provider(date).ok()?;
            let value = entry.close.trim().parse::<f64>().ok()?;
            if !value.is_finite() {
                return None;
            }
            Some(ChartPoint {
                date: date.clone(),
                ts,
                value,
            })
        })
        .collect();

    if points.is_empty() {
        return Err(SeriesError::NoData);
    }

    points.sort_by(|a, b| a.ts.cmp(&b.ts));
    if points.len() > MAX_POINTS {
        points.drain(..points.len() - MAX_POINTS);
    }

    let display_len = window.display_count().min(points.len());
    let displayed = &points[points.len() - display_len..];
    let summary = summarize(displayed);

    Ok(ChartSeries {
        window,
        points,
        display_len,
        summary,
    })
}

fn summarize(displayed: &[ChartPoint]) -> ChangeSummary {
    let (Some(first), Some(last)) = (displayed.first(), displayed.last()) else {
        return ChangeSummary::default();
    };

    if displayed.len() < 2 {
        return ChangeSummary::default();
    }

    let change = last.value - first.value;
    let percentage = if first.value == 0.0 {
        0.0
    } else {
        change / first.value * 100.0
    };

    ChangeSummary { change, percentage }
}
