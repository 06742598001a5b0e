use chrono::{DateTime, FixedOffset};
use smallvec::SmallVec;

use crate::core::{HOUR_MS, TimeWindow};

/// Hour boundaries inside `window`, in epoch milliseconds.
///
/// A padded one-day window holds about 29 boundaries, so the inline
/// capacity covers the common case.
#[must_use]
pub(crate) fn hour_marks(window: TimeWindow) -> SmallVec<[i64; 32]> {
    let mut marks = SmallVec::new();
    if !window.start.is_finite() || !window.end.is_finite() || window.end < window.start {
        return marks;
    }

    let hour = HOUR_MS as f64;
    let mut current = (window.start / hour).floor() * hour;
    if current < window.start {
        current += hour;
    }
    while current <= window.end {
        marks.push(current as i64);
        current += hour;
    }
    marks
}

/// Two-digit hour-of-day label, e.g. `"07"`.
#[must_use]
pub(crate) fn format_hour_label(time_ms: i64, offset: FixedOffset) -> Option<String> {
    let time = DateTime::from_timestamp_millis(time_ms)?;
    Some(time.with_timezone(&offset).format("%H").to_string())
}
