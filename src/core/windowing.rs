use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::ViewportGeometry;

/// Fraction of the visible span added on each side of the time window.
pub const VISIBLE_TIME_PADDING_RATIO: f64 = 0.1;

/// Inclusive time window, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }
}

/// The slice of data relevant to drawing and hit-testing for one viewport state.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleWindow {
    pub time: TimeWindow,
    pub rows: Range<usize>,
}

/// Visible time range for the current horizontal scroll, padded by 10% of
/// one viewport span on each side and clamped to the dataset range.
#[must_use]
pub fn visible_time_window(geometry: &ViewportGeometry) -> Option<TimeWindow> {
    let range = geometry.time_range()?;
    let px_per_ms = geometry.pixels_per_ms()?;
    let ms_per_px = 1.0 / px_per_ms;

    let start = range.start as f64 + geometry.state().scroll_x * ms_per_px;
    let end = start + geometry.plot_width() * ms_per_px;
    let padding = (end - start) * VISIBLE_TIME_PADDING_RATIO;

    let (range_start, range_end) = (range.start as f64, range.end as f64);
    Some(TimeWindow {
        start: (start - padding).clamp(range_start, range_end),
        end: (end + padding).clamp(range_start, range_end),
    })
}

/// Row indices intersecting the viewport, with one row of slack on each side.
#[must_use]
pub fn visible_resource_rows(geometry: &ViewportGeometry) -> Range<usize> {
    let count = geometry.resource_count();
    if count == 0 {
        return 0..0;
    }
    let layout = geometry.layout();
    let state = geometry.state();

    let first = (state.scroll_y / layout.resource_height).floor() - 1.0;
    let last = ((state.scroll_y + state.height() - layout.time_axis_height)
        / layout.resource_height)
        .ceil()
        + 1.0;

    let end = clamp_index(last, count);
    let start = clamp_index(first, count).min(end);
    start..end
}

/// Combined time and row window, or `None` while the dataset is incomplete.
#[must_use]
pub fn visible_window(geometry: &ViewportGeometry) -> Option<VisibleWindow> {
    let time = visible_time_window(geometry)?;
    Some(VisibleWindow {
        time,
        rows: visible_resource_rows(geometry),
    })
}

fn clamp_index(value: f64, count: usize) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value as usize).min(count)
}
