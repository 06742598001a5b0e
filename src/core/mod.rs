pub mod dataset;
pub mod geometry;
pub mod types;
pub mod windowing;

pub use dataset::{ConsumptionStore, ResourceRoster, TimelineData};
pub use geometry::{ContentSize, HOURS_PER_VIEWPORT, LayoutMetrics, ViewportGeometry};
pub use types::{Consumption, DAY_MS, HOUR_MS, Resource, TimeRange, Viewport, ViewportState};
pub use windowing::{
    TimeWindow, VISIBLE_TIME_PADDING_RATIO, VisibleWindow, visible_resource_rows,
    visible_time_window, visible_window,
};
