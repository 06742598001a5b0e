use tracing::{debug, info};

use crate::core::Consumption;
use crate::interaction::{EventResponse, EventSource, HostEvent, resolve_click};
use crate::render::Renderer;

use super::{InvalidationTopic, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    /// Dispatches one host notification.
    pub fn handle_event(&mut self, event: HostEvent) -> EventResponse {
        match event {
            HostEvent::Scrolled { x, y } => self.scroll_to(x, y),
            HostEvent::Resized => self.resize(),
            HostEvent::Clicked { x, y } => {
                self.click(x, y);
            }
            HostEvent::ContextMenu => return EventResponse::SuppressDefault,
            HostEvent::FrameTick => {
                self.on_frame();
            }
        }
        EventResponse::Handled
    }

    /// Handles events until `source` runs dry. Returns how many were handled.
    pub fn drain_events(&mut self, source: &mut impl EventSource) -> usize {
        let mut handled = 0;
        while let Some(event) = source.next_event() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Applies the host's scroll position. Negative offsets clamp to zero.
    pub fn scroll_to(&mut self, scroll_x: f64, scroll_y: f64) {
        self.viewport.set_scroll(scroll_x, scroll_y);
        self.invalidate(InvalidationTopic::Viewport);
    }

    /// Re-reads the surface size and recomputes the content extent.
    ///
    /// A zero-sized surface means the host has not laid out yet; the resize
    /// is retried on the next frame instead.
    pub fn resize(&mut self) {
        let surface = self.renderer.surface_size();
        if !surface.is_valid() {
            debug!(
                width = surface.width,
                height = surface.height,
                "surface not laid out, deferring resize"
            );
            self.scheduler.defer_resize();
            return;
        }

        self.viewport.viewport = surface;
        self.content_size = self.geometry().content_size();
        debug!(
            width = surface.width,
            height = surface.height,
            content_width = self.content_size.map(|size| size.width),
            content_height = self.content_size.map(|size| size.height),
            "resized viewport"
        );
        self.invalidate(InvalidationTopic::Layout);
    }

    /// Resolves a viewport-relative click and updates the selection.
    ///
    /// Returns the selected consumption after the click.
    pub fn click(&mut self, x: f64, y: f64) -> Option<&Consumption> {
        let geometry = self.geometry();
        let resolution = resolve_click(&geometry, &self.roster, &self.store, x, y);
        let changed = self.selection.apply_click(resolution);
        if let Some(consumption) = resolution.consumption().filter(|_| changed) {
            info!(
                consumption_id = %consumption.id,
                resource_id = %consumption.resource_id,
                start_time = consumption.start_time,
                end_time = consumption.end_time,
                "selected consumption"
            );
        }
        self.invalidate(InvalidationTopic::Selection);
        self.selected_bar()
    }

    /// Clears the selection without a click.
    pub fn clear_selection(&mut self) {
        if self.selection.id().is_some() {
            self.selection.clear();
            self.invalidate(InvalidationTopic::Selection);
        }
    }
}
