use tracing::debug;

use crate::core::{
    Consumption, ConsumptionStore, Resource, ResourceRoster, TimeRange, TimelineData,
};
use crate::error::TimelineResult;
use crate::render::Renderer;

use super::{InvalidationTopic, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    /// Replaces the resource roster and starts a new dataset.
    ///
    /// Consumptions and the selection are cleared because they refer to the
    /// previous roster. Layout is recomputed once a time range is also set.
    pub fn set_resources(&mut self, resources: Vec<Resource>) -> TimelineResult<()> {
        let roster = ResourceRoster::from_resources(resources)?;
        debug!(resource_count = roster.len(), "set resources");

        self.roster = roster;
        self.store = ConsumptionStore::default();
        self.selection.clear();
        self.refresh_layout();
        Ok(())
    }

    /// Sets the absolute horizontal extent. Loaded consumptions are kept.
    pub fn set_time_range(&mut self, start: i64, end: i64) -> TimelineResult<()> {
        let range = TimeRange::new(start, end)?;
        debug!(start, end, day_count = range.day_count(), "set time range");

        self.time_range = Some(range);
        self.refresh_layout();
        Ok(())
    }

    /// Replaces all consumptions. Input order does not matter.
    ///
    /// Never triggers a resize; a render is scheduled only when the engine
    /// is ready to draw.
    pub fn set_consumptions(&mut self, consumptions: Vec<Consumption>) -> TimelineResult<()> {
        let store = ConsumptionStore::from_consumptions(consumptions, &self.roster)?;
        debug!(consumption_count = store.len(), "set consumptions");

        self.store = store;
        if self
            .selection
            .id()
            .is_some_and(|id| !self.store.contains(id))
        {
            self.selection.clear();
        }
        self.invalidate(InvalidationTopic::Data);
        Ok(())
    }

    /// Replaces the whole dataset. Nothing changes when any part is invalid.
    pub fn load_dataset(&mut self, data: TimelineData) -> TimelineResult<()> {
        let roster = ResourceRoster::from_resources(data.resources)?;
        let range = TimeRange::new(data.time_range.start, data.time_range.end)?;
        let store = ConsumptionStore::from_consumptions(data.consumptions, &roster)?;
        debug!(
            resource_count = roster.len(),
            consumption_count = store.len(),
            start = range.start,
            end = range.end,
            "load dataset"
        );

        self.roster = roster;
        self.time_range = Some(range);
        self.store = store;
        self.selection.clear();
        self.refresh_layout();
        self.invalidate(InvalidationTopic::Data);
        Ok(())
    }

    /// Current dataset as an owned snapshot, or `None` without a time range.
    #[must_use]
    pub fn dataset(&self) -> Option<TimelineData> {
        Some(TimelineData {
            resources: self.roster.to_vec(),
            time_range: self.time_range?,
            consumptions: self.store.to_vec(),
        })
    }

    /// Recomputes geometry once both resources and a time range exist.
    fn refresh_layout(&mut self) {
        if self.roster.is_empty() || self.time_range.is_none() {
            self.content_size = None;
            self.scheduler.cancel();
            return;
        }
        self.resize();
    }
}
