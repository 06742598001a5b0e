mod hit_test;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

pub use hit_test::{ClickResolution, nearest_containing, resolve_click};

/// Selection state: at most one consumption, referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(String),
}

impl Selection {
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Unselected => None,
            Self::Selected(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    /// Applies a click outcome. Returns `true` when the selection changed.
    pub fn apply_click(&mut self, resolution: ClickResolution<'_>) -> bool {
        let next = match resolution.consumption() {
            Some(consumption) => Self::Selected(consumption.id.clone()),
            None => Self::Unselected,
        };
        let changed = *self != next;
        *self = next;
        changed
    }

    pub fn clear(&mut self) {
        *self = Self::Unselected;
    }
}

/// Discrete notifications delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Scroll container moved; offsets in content pixels.
    Scrolled { x: f64, y: f64 },
    /// Surface size may have changed; the engine queries the renderer.
    Resized,
    /// Pointer click in viewport-relative pixels.
    Clicked { x: f64, y: f64 },
    /// Secondary-button request for a context menu.
    ContextMenu,
    /// Display-refresh boundary.
    FrameTick,
}

/// How the host should treat the native default action of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Handled,
    SuppressDefault,
}

/// Pull-based event-source capability.
pub trait EventSource {
    fn next_event(&mut self) -> Option<HostEvent>;
}

impl EventSource for VecDeque<HostEvent> {
    fn next_event(&mut self) -> Option<HostEvent> {
        self.pop_front()
    }
}
