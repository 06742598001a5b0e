use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::render::Color;

/// Flat colors, stroke widths and font sizes of a timeline frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub content_background_color: Color,
    pub gutter_background_color: Color,
    pub gutter_border_color: Color,
    pub gutter_border_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub tick_color: Color,
    pub tick_width: f64,
    pub label_color: Color,
    pub time_label_font_size_px: f64,
    pub resource_label_font_size_px: f64,
    pub bar_color: Color,
    pub selected_bar_color: Color,
    pub selected_bar_border_color: Color,
    pub selected_bar_border_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            content_background_color: Color::rgb8(0xff, 0xff, 0xff),
            gutter_background_color: Color::rgb8(0xf8, 0xf9, 0xfa),
            gutter_border_color: Color::rgb8(0xde, 0xe2, 0xe6),
            gutter_border_width: 1.0,
            grid_line_color: Color::rgb8(0xe9, 0xec, 0xef),
            grid_line_width: 1.0,
            tick_color: Color::rgb8(0xad, 0xb5, 0xbd),
            tick_width: 1.0,
            label_color: Color::rgb8(0x49, 0x50, 0x57),
            time_label_font_size_px: 12.0,
            resource_label_font_size_px: 13.0,
            bar_color: Color::rgb8(0x74, 0xc0, 0xfc),
            selected_bar_color: Color::rgb8(0x4d, 0xab, 0xf7),
            selected_bar_border_color: Color::rgb8(0x19, 0x71, 0xc2),
            selected_bar_border_width: 2.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> TimelineResult<Self> {
        for color in [
            self.content_background_color,
            self.gutter_background_color,
            self.gutter_border_color,
            self.grid_line_color,
            self.tick_color,
            self.label_color,
            self.bar_color,
            self.selected_bar_color,
            self.selected_bar_border_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("gutter_border_width", self.gutter_border_width),
            ("grid_line_width", self.grid_line_width),
            ("tick_width", self.tick_width),
            ("time_label_font_size_px", self.time_label_font_size_px),
            ("resource_label_font_size_px", self.resource_label_font_size_px),
            ("selected_bar_border_width", self.selected_bar_border_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}
