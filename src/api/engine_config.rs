use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::core::LayoutMetrics;
use crate::error::{TimelineError, TimelineResult};

use super::RenderStyle;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep timeline setup next to their own settings
/// without inventing an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub layout: LayoutMetrics,
    pub style: RenderStyle,
    /// Fixed offset applied to hour-of-day labels. Zero means UTC.
    pub time_label_utc_offset_minutes: i32,
}

impl TimelineConfig {
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutMetrics) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_time_label_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.time_label_utc_offset_minutes = minutes;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        self.layout.validate()?;
        self.style.validate()?;
        self.label_offset()?;
        Ok(self)
    }

    pub fn label_offset(self) -> TimelineResult<FixedOffset> {
        self.time_label_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                TimelineError::InvalidConfig(format!(
                    "time label offset {} minutes is out of range",
                    self.time_label_utc_offset_minutes
                ))
            })
    }

    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}
