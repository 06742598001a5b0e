use chrono::FixedOffset;

use crate::core::{
    Consumption, ConsumptionStore, ContentSize, ResourceRoster, TimeRange, ViewportGeometry,
    ViewportState, VisibleWindow, visible_window,
};
use crate::error::TimelineResult;
use crate::interaction::Selection;
use crate::render::Renderer;

use super::render_scheduler::{RenderScheduler, RenderStats};
use super::{InvalidationTopic, InvalidationTopics, TimelineConfig};

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the dataset, viewport state and selection, and hands
/// layered frames to the injected renderer. Every mutation goes through
/// `&mut self`, so hosts driving it from several threads must serialize
/// their events onto one owner.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: TimelineConfig,
    pub(super) label_offset: FixedOffset,
    pub(super) roster: ResourceRoster,
    pub(super) time_range: Option<TimeRange>,
    pub(super) store: ConsumptionStore,
    pub(super) viewport: ViewportState,
    pub(super) content_size: Option<ContentSize>,
    pub(super) selection: Selection,
    pub(super) scheduler: RenderScheduler,
}

impl<R: Renderer> TimelineEngine<R> {
    /// Creates an engine with no dataset loaded.
    ///
    /// The initial viewport is taken from the renderer. A zero-sized surface
    /// is not an error: the resize is retried on the next frame.
    pub fn new(renderer: R, config: TimelineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let label_offset = config.label_offset()?;
        let surface = renderer.surface_size();

        let mut scheduler = RenderScheduler::default();
        if !surface.is_valid() {
            scheduler.defer_resize();
        }

        Ok(Self {
            renderer,
            config,
            label_offset,
            roster: ResourceRoster::default(),
            time_range: None,
            store: ConsumptionStore::default(),
            viewport: ViewportState::new(surface),
            content_size: None,
            selection: Selection::default(),
            scheduler,
        })
    }

    #[must_use]
    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn resources(&self) -> &ResourceRoster {
        &self.roster
    }

    #[must_use]
    pub fn time_range(&self) -> Option<TimeRange> {
        self.time_range
    }

    /// Loaded consumptions, ordered by start time.
    #[must_use]
    pub fn consumptions(&self) -> &ConsumptionStore {
        &self.store
    }

    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.viewport
    }

    /// Scrollable extent the host should give its scroll container.
    #[must_use]
    pub fn content_size(&self) -> Option<ContentSize> {
        self.content_size
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected consumption, if any.
    #[must_use]
    pub fn selected_bar(&self) -> Option<&Consumption> {
        self.selection.id().and_then(|id| self.store.get(id))
    }

    /// True once resources, a time range and a non-empty viewport are present.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.roster.is_empty() && self.time_range.is_some() && self.viewport.viewport.is_valid()
    }

    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        ViewportGeometry::new(
            self.config.layout,
            self.time_range,
            self.roster.len(),
            self.viewport,
        )
    }

    #[must_use]
    pub fn visible_window(&self) -> Option<VisibleWindow> {
        visible_window(&self.geometry())
    }

    #[must_use]
    pub fn time_to_x(&self, time: f64) -> f64 {
        self.geometry().time_to_x(time)
    }

    #[must_use]
    pub fn x_to_time(&self, x: f64) -> f64 {
        self.geometry().x_to_time(x)
    }

    #[must_use]
    pub fn resource_index_to_y(&self, index: usize) -> f64 {
        self.geometry().resource_index_to_y(index)
    }

    #[must_use]
    pub fn y_to_resource_index(&self, y: f64) -> Option<usize> {
        self.geometry().y_to_resource_index(y)
    }

    #[must_use]
    pub fn render_stats(&self) -> RenderStats {
        self.scheduler.stats()
    }

    #[must_use]
    pub fn has_pending_render(&self) -> bool {
        !self.scheduler.pending().is_none()
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.scheduler.pending()
    }

    #[must_use]
    pub fn is_dirty_for(&self, topic: InvalidationTopic) -> bool {
        self.scheduler.is_dirty_for(topic)
    }

    #[must_use]
    pub fn has_deferred_resize(&self) -> bool {
        self.scheduler.resize_deferred()
    }
}
