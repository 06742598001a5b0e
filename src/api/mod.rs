mod axis_label_format;
mod data_controller;
mod engine;
mod engine_config;
mod frame_builder;
mod interaction_controller;
mod invalidation;
mod render_coordinator;
mod render_scheduler;
mod render_style;

pub use engine::TimelineEngine;
pub use engine_config::TimelineConfig;
pub use invalidation::{InvalidationTopic, InvalidationTopics};
pub use render_scheduler::{FrameOutcome, RenderStats};
pub use render_style::RenderStyle;
