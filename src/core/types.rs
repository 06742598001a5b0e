use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Milliseconds in one hour.
pub const HOUR_MS: i64 = 60 * 60 * 1000;
/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// A named entity occupying one fixed row of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
}

impl Resource {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Absolute horizontal extent of a dataset, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> TimelineResult<Self> {
        if start >= end || end.checked_sub(start).is_none() {
            return Err(TimelineError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn span_ms(self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Number of whole or partial days covered by the range.
    #[must_use]
    pub fn day_count(self) -> i64 {
        let span = self.span_ms();
        span / DAY_MS + i64::from(span % DAY_MS != 0)
    }

    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        time >= self.start as f64 && time <= self.end as f64
    }
}

/// One interval of resource usage; the primary drawable unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumption {
    pub id: String,
    pub resource_id: String,
    pub start_time: i64,
    pub end_time: i64,
}

impl Consumption {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        resource_id: impl Into<String>,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            id: id.into(),
            resource_id: resource_id.into(),
            start_time,
            end_time,
        }
    }

    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Inclusive containment test used by hit-testing.
    #[must_use]
    pub fn contains_time(&self, time: f64) -> bool {
        time >= self.start_time as f64 && time <= self.end_time as f64
    }

    /// Inclusive overlap test against a `[start, end]` window.
    #[must_use]
    pub fn intersects(&self, start: f64, end: f64) -> bool {
        self.end_time as f64 >= start && self.start_time as f64 <= end
    }
}

/// Pixel size of the drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Scroll offsets plus current viewport size.
///
/// Only scroll and resize events mutate this; scale factors are derived from
/// it on demand.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportState {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub viewport: Viewport,
}

impl ViewportState {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            viewport,
        }
    }

    #[must_use]
    pub fn with_scroll(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.set_scroll(scroll_x, scroll_y);
        self
    }

    pub fn set_scroll(&mut self, scroll_x: f64, scroll_y: f64) {
        self.scroll_x = sanitize_scroll(scroll_x);
        self.scroll_y = sanitize_scroll(scroll_y);
    }

    #[must_use]
    pub fn width(self) -> f64 {
        f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        f64::from(self.viewport.height)
    }
}

fn sanitize_scroll(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
