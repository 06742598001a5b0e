use resource_timeline::api::{FrameOutcome, InvalidationTopic, TimelineConfig, TimelineEngine};
use resource_timeline::core::{Consumption, DAY_MS, HOUR_MS, Resource, Viewport};
use resource_timeline::error::{TimelineError, TimelineResult};
use resource_timeline::interaction::HostEvent;
use resource_timeline::render::{CanvasLayerKind, NullRenderer, RenderFrame, Renderer};

/// Renderer that fails on request and records the last frame it drew.
#[derive(Debug, Default)]
struct RecordingRenderer {
    surface: Viewport,
    fail_next: bool,
    frames: Vec<RenderFrame>,
}

impl Renderer for RecordingRenderer {
    fn surface_size(&self) -> Viewport {
        self.surface
    }

    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        if std::mem::take(&mut self.fail_next) {
            return Err(TimelineError::Render("surface lost".to_owned()));
        }
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn loaded_engine<R: Renderer>(renderer: R) -> TimelineEngine<R> {
    let mut engine = TimelineEngine::new(renderer, TimelineConfig::default()).expect("engine init");
    engine
        .set_resources(vec![
            Resource::new("r1", "Server-01"),
            Resource::new("r2", "Server-02"),
        ])
        .expect("set resources");
    engine.set_time_range(0, 2 * DAY_MS).expect("set time range");
    engine
        .set_consumptions(vec![
            Consumption::new("c1", "r1", HOUR_MS, 2 * HOUR_MS),
            Consumption::new("c2", "r2", 3 * HOUR_MS, 5 * HOUR_MS),
        ])
        .expect("set consumptions");
    engine
}

#[test]
fn render_requests_are_dropped_until_engine_is_ready() {
    let mut engine = TimelineEngine::new(NullRenderer::with_surface(1110, 400), TimelineConfig::default())
        .expect("engine init");
    engine.request_render();
    assert!(!engine.has_pending_render());

    engine.set_time_range(0, DAY_MS).expect("set time range");
    engine.request_render();
    assert!(!engine.has_pending_render());
    assert_eq!(engine.on_frame(), FrameOutcome::Idle);
    assert_eq!(engine.build_render_frame().expect("build"), None);
    assert_eq!(engine.renderer().render_count, 0);
}

#[test]
fn burst_of_events_collapses_into_one_draw() {
    let mut engine = loaded_engine(NullRenderer::with_surface(1110, 400));
    engine.flush();
    let drawn_before = engine.renderer().render_count;
    let coalesced_before = engine.render_stats().requests_coalesced;

    for step in 0..10 {
        engine.scroll_to(f64::from(step) * 12.0, 0.0);
    }
    engine.click(500.0, 90.0);
    assert!(engine.is_dirty_for(InvalidationTopic::Viewport));
    assert!(engine.is_dirty_for(InvalidationTopic::Selection));

    assert_eq!(engine.on_frame(), FrameOutcome::Rendered);
    assert_eq!(engine.on_frame(), FrameOutcome::Idle);
    assert_eq!(engine.renderer().render_count, drawn_before + 1);
    assert_eq!(
        engine.render_stats().requests_coalesced,
        coalesced_before + 10
    );
}

#[test]
fn pending_topics_are_reported_and_cleared_by_one_full_redraw() {
    let mut engine = loaded_engine(NullRenderer::with_surface(1110, 400));
    engine.flush();
    assert!(engine.pending_invalidation().is_none());

    engine.scroll_to(30.0, 0.0);
    engine.renderer_mut().set_surface(1200, 420);
    engine.resize();
    let pending = engine.pending_invalidation();
    assert!(pending.contains_topic(InvalidationTopic::Viewport));
    assert!(pending.contains_topic(InvalidationTopic::Layout));
    assert!(!pending.contains_topic(InvalidationTopic::Data));

    let drawn_before = engine.renderer().render_count;
    assert_eq!(engine.on_frame(), FrameOutcome::Rendered);
    assert_eq!(engine.renderer().render_count, drawn_before + 1);
    assert!(engine.pending_invalidation().is_none());
    assert!(!engine.is_dirty_for(InvalidationTopic::Viewport));
    assert!(!engine.is_dirty_for(InvalidationTopic::Layout));
}

#[test]
fn frame_layers_follow_paint_order() {
    let engine = loaded_engine(NullRenderer::with_surface(1110, 400));
    let frame = engine.build_render_frame().expect("build").expect("frame");
    let kinds: Vec<_> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(kinds, CanvasLayerKind::CANONICAL_ORDER);

    let bars = frame.layer(CanvasLayerKind::Bars).expect("bars");
    assert_eq!(bars.rects.len(), 2);
    let axis = frame.layer(CanvasLayerKind::Axis).expect("axis");
    assert!(axis.texts.iter().any(|text| text.text == "Server-02"));
}

#[test]
fn failed_render_is_abandoned_without_touching_state() {
    let renderer = RecordingRenderer {
        surface: Viewport::new(1110, 400),
        ..RecordingRenderer::default()
    };
    let mut engine = loaded_engine(renderer);
    assert_eq!(engine.on_frame(), FrameOutcome::Rendered);

    let x = engine.time_to_x(1.5 * HOUR_MS as f64);
    engine.click(x, 80.0);
    engine.scroll_to(40.0, 0.0);
    let state_before = engine.viewport_state();

    engine.renderer_mut().fail_next = true;
    assert_eq!(engine.on_frame(), FrameOutcome::Failed);
    assert!(!engine.has_pending_render());
    assert_eq!(engine.viewport_state(), state_before);
    assert_eq!(engine.selected_bar().map(|c| c.id.as_str()), Some("c1"));

    engine.request_render();
    assert_eq!(engine.on_frame(), FrameOutcome::Rendered);
    let stats = engine.render_stats();
    assert_eq!(stats.frames_rendered, 2);
    assert_eq!(stats.frames_failed, 1);
    assert_eq!(engine.renderer().frames.len(), 2);
}

#[test]
fn explicit_render_propagates_backend_errors() {
    let renderer = RecordingRenderer {
        surface: Viewport::new(1110, 400),
        fail_next: true,
        ..RecordingRenderer::default()
    };
    let mut engine = loaded_engine(renderer);
    assert!(matches!(engine.render(), Err(TimelineError::Render(_))));
    assert!(engine.render().is_ok());
}

#[test]
fn zero_sized_surface_defers_resize_to_next_frame() {
    let mut engine = loaded_engine(NullRenderer::default());
    assert!(engine.has_deferred_resize());
    assert!(engine.content_size().is_none());
    assert_eq!(engine.on_frame(), FrameOutcome::Idle);
    assert!(engine.has_deferred_resize());

    engine.renderer_mut().set_surface(1110, 400);
    engine.handle_event(HostEvent::FrameTick);
    assert!(!engine.has_deferred_resize());
    assert!(engine.content_size().is_some());
    assert_eq!(engine.renderer().render_count, 1);
    assert!(engine.render_stats().resize_retries >= 2);
}
