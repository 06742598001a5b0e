use tracing::{debug, warn};

use crate::error::TimelineResult;
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::{FrameInputs, build_timeline_frame};
use super::render_scheduler::FrameOutcome;
use super::{InvalidationTopic, InvalidationTopics, TimelineEngine};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

impl<R: Renderer> TimelineEngine<R> {
    /// Marks the engine dirty for the next frame.
    ///
    /// Dropped while the engine is not ready to draw.
    pub fn request_render(&mut self) {
        self.invalidate(InvalidationTopic::General);
    }

    pub(super) fn invalidate(&mut self, topics: impl Into<InvalidationTopics>) {
        if !self.is_ready() {
            return;
        }
        let topics = topics.into();
        if self.scheduler.request(topics) {
            debug!(pending = ?self.scheduler.pending(), "coalesced render request");
        }
    }

    /// Display-refresh boundary: retries a deferred resize, then draws at
    /// most once if anything is pending.
    ///
    /// Render failures are logged and leave engine state untouched; the next
    /// invalidation attempts a fresh draw.
    pub fn on_frame(&mut self) -> FrameOutcome {
        if self.scheduler.take_resize_retry() {
            debug!("retrying deferred resize");
            self.resize();
        }

        if self.scheduler.pending().is_none() {
            return FrameOutcome::Idle;
        }
        if !self.is_ready() {
            self.scheduler.cancel();
            return FrameOutcome::Idle;
        }

        match self.draw() {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "render failed, frame abandoned");
                FrameOutcome::Failed
            }
        }
    }

    /// Same as `on_frame`, for hosts without a refresh clock.
    pub fn flush(&mut self) -> FrameOutcome {
        self.on_frame()
    }

    /// Draws immediately and clears any pending request.
    ///
    /// Does nothing while the engine is not ready.
    pub fn render(&mut self) -> TimelineResult<()> {
        self.draw().map(|_| ())
    }

    fn draw(&mut self) -> TimelineResult<FrameOutcome> {
        self.scheduler.cancel();
        let drawn = self.build_render_frame().and_then(|frame| match frame {
            Some(frame) => self.renderer.render(&frame).map(|()| FrameOutcome::Rendered),
            None => Ok(FrameOutcome::Idle),
        });
        self.scheduler
            .record(drawn.as_ref().copied().unwrap_or(FrameOutcome::Failed));
        drawn
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> TimelineResult<()>
    where
        R: CairoContextRenderer,
    {
        self.scheduler.cancel();
        let Some(frame) = self.build_render_frame()? else {
            return Ok(());
        };
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Builds the layered frame for the current state without drawing it.
    ///
    /// Returns `Ok(None)` while the engine is not ready to draw.
    pub fn build_render_frame(&self) -> TimelineResult<Option<RenderFrame>> {
        if !self.is_ready() {
            return Ok(None);
        }
        let geometry = self.geometry();
        let Some(window) = self.visible_window() else {
            return Ok(None);
        };

        let frame = build_timeline_frame(&FrameInputs {
            geometry,
            window: &window,
            roster: &self.roster,
            store: &self.store,
            selection: &self.selection,
            style: &self.config.style,
            label_offset: self.label_offset,
        });
        frame.validate()?;
        Ok(Some(frame))
    }
}
