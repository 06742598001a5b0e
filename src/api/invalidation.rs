use serde::{Deserialize, Serialize};

/// Why a redraw was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    /// Scroll offsets changed.
    Viewport,
    /// Surface size or content extent changed.
    Layout,
    /// Dataset contents changed.
    Data,
    /// Selected interval changed or was re-confirmed by a click.
    Selection,
    /// Explicit host request.
    General,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Viewport => 1 << 0,
            Self::Layout => 1 << 1,
            Self::Data => 1 << 2,
            Self::Selection => 1 << 3,
            Self::General => 1 << 4,
        }
    }
}

/// Bitmask of invalidation topics accumulated between two frames.
///
/// Every frame is a full redraw: any pending topic schedules one render of all
/// layers. The topics are kept so hosts can ask why a frame is pending through
/// `TimelineEngine::pending_invalidation` and `TimelineEngine::is_dirty_for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

impl From<InvalidationTopic> for InvalidationTopics {
    fn from(topic: InvalidationTopic) -> Self {
        Self::from_topic(topic)
    }
}
