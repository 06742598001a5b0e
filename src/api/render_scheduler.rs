use serde::{Deserialize, Serialize};

use super::{InvalidationTopic, InvalidationTopics};

/// Result of one display-refresh boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameOutcome {
    /// Nothing was pending, or the engine is not ready to draw.
    Idle,
    Rendered,
    /// The draw was abandoned; the error was logged.
    Failed,
}

/// Counters describing scheduler activity since engine creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderStats {
    pub frames_rendered: u64,
    pub frames_failed: u64,
    /// Requests merged into an already pending redraw.
    pub requests_coalesced: u64,
    pub resize_retries: u64,
}

/// Dirty flag plus single-flight redraw bookkeeping.
///
/// At most one redraw is pending at any time; requests arriving before the
/// next frame merge their topics into it.
#[derive(Debug, Clone, Default)]
pub(crate) struct RenderScheduler {
    pending: InvalidationTopics,
    resize_retry: bool,
    stats: RenderStats,
}

impl RenderScheduler {
    /// Marks the engine dirty. Returns `true` if the request was coalesced.
    pub(crate) fn request(&mut self, topics: impl Into<InvalidationTopics>) -> bool {
        let coalesced = !self.pending.is_none();
        if coalesced {
            self.stats.requests_coalesced += 1;
        }
        self.pending = self.pending.union(topics.into());
        coalesced
    }

    #[must_use]
    pub(crate) fn pending(&self) -> InvalidationTopics {
        self.pending
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = InvalidationTopics::none();
    }

    pub(crate) fn defer_resize(&mut self) {
        self.resize_retry = true;
    }

    #[must_use]
    pub(crate) fn resize_deferred(&self) -> bool {
        self.resize_retry
    }

    pub(crate) fn take_resize_retry(&mut self) -> bool {
        let retry = std::mem::take(&mut self.resize_retry);
        if retry {
            self.stats.resize_retries += 1;
        }
        retry
    }

    pub(crate) fn record(&mut self, outcome: FrameOutcome) {
        match outcome {
            FrameOutcome::Rendered => self.stats.frames_rendered += 1,
            FrameOutcome::Failed => self.stats.frames_failed += 1,
            FrameOutcome::Idle => {}
        }
    }

    #[must_use]
    pub(crate) fn stats(&self) -> RenderStats {
        self.stats
    }

    #[must_use]
    pub(crate) fn is_dirty_for(&self, topic: InvalidationTopic) -> bool {
        self.pending.contains_topic(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameOutcome, RenderScheduler};
    use crate::api::InvalidationTopic;

    #[test]
    fn burst_of_requests_collapses_into_one_pending_redraw() {
        let mut scheduler = RenderScheduler::default();
        assert!(!scheduler.request(InvalidationTopic::Viewport));
        assert!(scheduler.request(InvalidationTopic::Viewport));
        assert!(scheduler.request(InvalidationTopic::Selection));

        let pending = scheduler.pending();
        assert!(pending.contains_topic(InvalidationTopic::Viewport));
        assert!(pending.contains_topic(InvalidationTopic::Selection));
        scheduler.cancel();
        assert!(scheduler.pending().is_none());
        assert_eq!(scheduler.stats().requests_coalesced, 2);
    }

    #[test]
    fn resize_retry_is_consumed_once() {
        let mut scheduler = RenderScheduler::default();
        scheduler.defer_resize();
        assert!(scheduler.resize_deferred());
        assert!(scheduler.take_resize_retry());
        assert!(!scheduler.take_resize_retry());
        assert_eq!(scheduler.stats().resize_retries, 1);
    }

    #[test]
    fn cancel_drops_pending_topics() {
        let mut scheduler = RenderScheduler::default();
        scheduler.request(InvalidationTopic::Data);
        assert!(scheduler.is_dirty_for(InvalidationTopic::Data));
        scheduler.cancel();
        assert!(scheduler.pending().is_none());
    }

    #[test]
    fn outcomes_are_counted() {
        let mut scheduler = RenderScheduler::default();
        scheduler.record(FrameOutcome::Rendered);
        scheduler.record(FrameOutcome::Failed);
        scheduler.record(FrameOutcome::Idle);
        let stats = scheduler.stats();
        assert_eq!(stats.frames_rendered, 1);
        assert_eq!(stats.frames_failed, 1);
    }
}
