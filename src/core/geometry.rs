use serde::{Deserialize, Serialize};

use crate::core::{DAY_MS, HOUR_MS, TimeRange, ViewportState};
use crate::error::{TimelineError, TimelineResult};

/// Hours of time shown by one viewport width of content.
pub const HOURS_PER_VIEWPORT: f64 = 24.0;

/// Fixed pixel metrics of the timeline layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub resource_height: f64,
    pub time_axis_height: f64,
    pub resource_axis_width: f64,
    pub bar_height: f64,
    pub min_bar_width: f64,
    pub tick_length: f64,
    pub label_inset: f64,
    pub min_content_width: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            resource_height: 40.0,
            time_axis_height: 60.0,
            resource_axis_width: 150.0,
            bar_height: 4.0,
            min_bar_width: 2.0,
            tick_length: 10.0,
            label_inset: 10.0,
            min_content_width: 100.0,
        }
    }
}

impl LayoutMetrics {
    pub fn validate(self) -> TimelineResult<Self> {
        for (name, value) in [
            ("resource_height", self.resource_height),
            ("bar_height", self.bar_height),
            ("min_bar_width", self.min_bar_width),
            ("min_content_width", self.min_content_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "layout `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("time_axis_height", self.time_axis_height),
            ("resource_axis_width", self.resource_axis_width),
            ("tick_length", self.tick_length),
            ("label_inset", self.label_inset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "layout `{name}` must be finite and >= 0"
                )));
            }
        }
        if self.bar_height > self.resource_height {
            return Err(TimelineError::InvalidConfig(
                "layout `bar_height` must not exceed `resource_height`".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Total scrollable extent of the content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentSize {
    pub width: f64,
    pub height: f64,
}

/// Conversion between time / resource-index space and viewport pixels.
///
/// The geometry is a borrowed view over the current layout, dataset extent
/// and viewport state. Missing inputs degrade to zero results instead of
/// failing, because datasets are loaded in stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    layout: LayoutMetrics,
    time_range: Option<TimeRange>,
    resource_count: usize,
    state: ViewportState,
}

impl ViewportGeometry {
    #[must_use]
    pub fn new(
        layout: LayoutMetrics,
        time_range: Option<TimeRange>,
        resource_count: usize,
        state: ViewportState,
    ) -> Self {
        Self {
            layout,
            time_range,
            resource_count,
            state,
        }
    }

    #[must_use]
    pub fn layout(&self) -> LayoutMetrics {
        self.layout
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn time_range(&self) -> Option<TimeRange> {
        self.time_range
    }

    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resource_count
    }

    /// Width of the plotted area right of the resource gutter.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.state.width() - self.layout.resource_axis_width
    }

    /// Horizontal scale, or `None` when the plot area has no width.
    #[must_use]
    pub fn pixels_per_hour(&self) -> Option<f64> {
        let plot_width = self.plot_width();
        (plot_width > 0.0).then(|| plot_width / HOURS_PER_VIEWPORT)
    }

    #[must_use]
    pub fn pixels_per_ms(&self) -> Option<f64> {
        self.pixels_per_hour().map(|pph| pph / HOUR_MS as f64)
    }

    pub fn time_to_x(&self, time: f64) -> f64 {
        let Some(range) = self.time_range else {
            return 0.0;
        };
        let Some(px_per_ms) = self.pixels_per_ms() else {
            return 0.0;
        };
        let content_x = (time - range.start as f64) * px_per_ms;
        self.layout.resource_axis_width + content_x - self.state.scroll_x
    }

    pub fn x_to_time(&self, x: f64) -> f64 {
        let Some(range) = self.time_range else {
            return 0.0;
        };
        let Some(px_per_ms) = self.pixels_per_ms() else {
            return range.start as f64;
        };
        let content_x = (x - self.layout.resource_axis_width) + self.state.scroll_x;
        range.start as f64 + content_x / px_per_ms
    }

    /// Top edge of row `index` in viewport pixels.
    pub fn resource_index_to_y(&self, index: usize) -> f64 {
        if self.resource_count == 0 {
            return 0.0;
        }
        self.layout.time_axis_height + index as f64 * self.layout.resource_height
            - self.state.scroll_y
    }

    /// Row under viewport coordinate `y`, or `None` for the header band and
    /// anything above the first or below the last row.
    pub fn y_to_resource_index(&self, y: f64) -> Option<usize> {
        if self.resource_count == 0 || !y.is_finite() || y < self.layout.time_axis_height {
            return None;
        }
        let content_y = y - self.layout.time_axis_height + self.state.scroll_y;
        if content_y < 0.0 {
            return None;
        }
        let index = (content_y / self.layout.resource_height).floor() as usize;
        (index < self.resource_count).then_some(index)
    }

    /// Whether a viewport point falls in either pinned gutter.
    #[must_use]
    pub fn is_in_gutter(&self, x: f64, y: f64) -> bool {
        x < self.layout.resource_axis_width || y < self.layout.time_axis_height
    }

    /// Scrollable content extent for the full time range and roster.
    #[must_use]
    pub fn content_size(&self) -> Option<ContentSize> {
        let range = self.time_range?;
        if self.resource_count == 0 || !self.state.viewport.is_valid() {
            return None;
        }
        let visible_width = self.plot_width().max(self.layout.min_content_width);
        let total_days = range.span_ms() as f64 / DAY_MS as f64;
        Some(ContentSize {
            width: self.layout.resource_axis_width + total_days * visible_width,
            height: self.layout.time_axis_height
                + self.resource_count as f64 * self.layout.resource_height,
        })
    }
}
