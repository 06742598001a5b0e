use chrono::FixedOffset;

use crate::core::{ConsumptionStore, ResourceRoster, ViewportGeometry, VisibleWindow};
use crate::interaction::Selection;
use crate::render::{
    CanvasLayerKind, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::RenderStyle;
use super::axis_label_format::{format_hour_label, hour_marks};

/// Everything one draw reads; nothing here is mutated while building.
pub(crate) struct FrameInputs<'a> {
    pub(crate) geometry: ViewportGeometry,
    pub(crate) window: &'a VisibleWindow,
    pub(crate) roster: &'a ResourceRoster,
    pub(crate) store: &'a ConsumptionStore,
    pub(crate) selection: &'a Selection,
    pub(crate) style: &'a RenderStyle,
    pub(crate) label_offset: FixedOffset,
}

/// Runs the four passes in paint order against the visible window only.
pub(crate) fn build_timeline_frame(inputs: &FrameInputs<'_>) -> RenderFrame {
    let mut frame = RenderFrame::new(inputs.geometry.state().viewport);
    let hours = hour_marks(inputs.window.time);

    draw_background(&mut frame, inputs);
    draw_grid(&mut frame, inputs, &hours);
    draw_bars(&mut frame, inputs);
    draw_axes(&mut frame, inputs, &hours);
    frame
}

struct Bounds {
    plot_left: f64,
    plot_top: f64,
    right: f64,
    bottom: f64,
}

impl Bounds {
    fn of(geometry: &ViewportGeometry) -> Self {
        let layout = geometry.layout();
        let state = geometry.state();
        Self {
            plot_left: layout.resource_axis_width,
            plot_top: layout.time_axis_height,
            right: state.width(),
            bottom: state.height(),
        }
    }

    fn plot_width(&self) -> f64 {
        (self.right - self.plot_left).max(0.0)
    }

    fn plot_height(&self) -> f64 {
        (self.bottom - self.plot_top).max(0.0)
    }

    fn contains_x(&self, x: f64) -> bool {
        x >= self.plot_left && x <= self.right
    }

    fn contains_y(&self, y: f64) -> bool {
        y >= self.plot_top && y <= self.bottom
    }
}

fn draw_background(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let bounds = Bounds::of(&inputs.geometry);
    let style = inputs.style;

    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            bounds.plot_left,
            bounds.plot_top,
            bounds.plot_width(),
            bounds.plot_height(),
            style.content_background_color,
        ),
    );
    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            0.0,
            bounds.plot_top,
            bounds.plot_left,
            bounds.plot_height(),
            style.gutter_background_color,
        ),
    );
    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            bounds.plot_left,
            0.0,
            bounds.plot_width(),
            bounds.plot_top,
            style.gutter_background_color,
        ),
    );
}

fn draw_grid(frame: &mut RenderFrame, inputs: &FrameInputs<'_>, hours: &[i64]) {
    let geometry = &inputs.geometry;
    let bounds = Bounds::of(geometry);
    let style = inputs.style;
    let rows = &inputs.window.rows;

    // Row boundaries, including the bottom edge of the last visible row.
    for index in rows.start..=rows.end {
        let y = geometry.resource_index_to_y(index);
        if bounds.contains_y(y) {
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(
                    bounds.plot_left,
                    y,
                    bounds.right,
                    y,
                    style.grid_line_width,
                    style.grid_line_color,
                ),
            );
        }
    }

    for &hour in hours {
        let x = geometry.time_to_x(hour as f64);
        if bounds.contains_x(x) {
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(
                    x,
                    bounds.plot_top,
                    x,
                    bounds.bottom,
                    style.grid_line_width,
                    style.grid_line_color,
                ),
            );
        }
    }
}

fn draw_bars(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let geometry = &inputs.geometry;
    let layout = geometry.layout();
    let bounds = Bounds::of(geometry);
    let style = inputs.style;
    let window = inputs.window;

    for index in window.rows.clone() {
        let Some(resource) = inputs.roster.get(index) else {
            continue;
        };
        let row_y = geometry.resource_index_to_y(index);
        if row_y + layout.resource_height < bounds.plot_top || row_y > bounds.bottom {
            continue;
        }
        let bar_top = row_y + layout.resource_height / 2.0 - layout.bar_height / 2.0;

        for consumption in
            inputs
                .store
                .for_resource_in_window(&resource.id, window.time.start, window.time.end)
        {
            let start_x = geometry.time_to_x(consumption.start_time as f64);
            let end_x = geometry.time_to_x(consumption.end_time as f64);
            if end_x < bounds.plot_left || start_x > bounds.right {
                continue;
            }
            let width = (end_x - start_x).max(layout.min_bar_width);

            let rect = if inputs.selection.is_selected(&consumption.id) {
                RectPrimitive::new(start_x, bar_top, width, layout.bar_height, style.selected_bar_color)
                    .with_border(style.selected_bar_border_width, style.selected_bar_border_color)
            } else {
                RectPrimitive::new(start_x, bar_top, width, layout.bar_height, style.bar_color)
            };
            frame.push_rect(CanvasLayerKind::Bars, rect);
        }
    }
}

fn draw_axes(frame: &mut RenderFrame, inputs: &FrameInputs<'_>, hours: &[i64]) {
    draw_time_axis(frame, inputs, hours);
    draw_resource_axis(frame, inputs);

    let bounds = Bounds::of(&inputs.geometry);
    frame.push_rect(
        CanvasLayerKind::Axis,
        RectPrimitive::new(
            0.0,
            0.0,
            bounds.plot_left,
            bounds.plot_top,
            inputs.style.gutter_background_color,
        ),
    );
}

fn draw_time_axis(frame: &mut RenderFrame, inputs: &FrameInputs<'_>, hours: &[i64]) {
    let geometry = &inputs.geometry;
    let layout = geometry.layout();
    let bounds = Bounds::of(geometry);
    let style = inputs.style;

    frame.push_rect(
        CanvasLayerKind::Axis,
        RectPrimitive::new(
            bounds.plot_left,
            0.0,
            bounds.plot_width(),
            bounds.plot_top,
            style.gutter_background_color,
        ),
    );
    frame.push_line(
        CanvasLayerKind::Axis,
        LinePrimitive::new(
            bounds.plot_left,
            bounds.plot_top,
            bounds.right,
            bounds.plot_top,
            style.gutter_border_width,
            style.gutter_border_color,
        ),
    );

    for &hour in hours {
        let x = geometry.time_to_x(hour as f64);
        if !bounds.contains_x(x) {
            continue;
        }
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(
                x,
                bounds.plot_top - layout.tick_length,
                x,
                bounds.plot_top,
                style.tick_width,
                style.tick_color,
            ),
        );
        if let Some(label) = format_hour_label(hour, inputs.label_offset) {
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    label,
                    x,
                    bounds.plot_top / 2.0,
                    style.time_label_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                ),
            );
        }
    }
}

fn draw_resource_axis(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let geometry = &inputs.geometry;
    let layout = geometry.layout();
    let bounds = Bounds::of(geometry);
    let style = inputs.style;

    frame.push_rect(
        CanvasLayerKind::Axis,
        RectPrimitive::new(
            0.0,
            bounds.plot_top,
            bounds.plot_left,
            bounds.plot_height(),
            style.gutter_background_color,
        ),
    );
    frame.push_line(
        CanvasLayerKind::Axis,
        LinePrimitive::new(
            bounds.plot_left,
            bounds.plot_top,
            bounds.plot_left,
            bounds.bottom,
            style.gutter_border_width,
            style.gutter_border_color,
        ),
    );

    for index in inputs.window.rows.clone() {
        let Some(resource) = inputs.roster.get(index) else {
            continue;
        };
        let y = geometry.resource_index_to_y(index);
        if resource.name.is_empty() || !bounds.contains_y(y) {
            continue;
        }
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                resource.name.clone(),
                bounds.plot_left - layout.label_inset,
                y + layout.resource_height / 2.0,
                style.resource_label_font_size_px,
                style.label_color,
                TextHAlign::Right,
            ),
        );
    }
}
