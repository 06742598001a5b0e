//! Synthetic consumption data for demos, tests and benchmarks.
//!
//! Each resource's time span is cut into equal slots and at most one
//! interval is placed per slot. Placement starts no earlier than the end of
//! the previously accepted interval plus the minimum gap, so one resource's
//! intervals never overlap.

mod resource_names;

use chrono::{DateTime, Days, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Consumption, DAY_MS, Resource, TimeRange, TimelineData};
use crate::error::{TimelineError, TimelineResult};

pub use resource_names::DEFAULT_RESOURCE_NAMES;

pub const DEFAULT_DAYS: u32 = 100;

/// Share of a slot a single interval may occupy.
const MAX_SLOT_USAGE_RATIO: f64 = 0.7;

/// Density and spacing constraints for generated intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionOptions {
    pub min_consumptions_per_day: u32,
    pub max_consumptions_per_day: u32,
    pub min_duration_ms: i64,
    pub max_duration_ms: i64,
    pub min_gap_ms: i64,
}

impl Default for ConsumptionOptions {
    fn default() -> Self {
        Self {
            min_consumptions_per_day: 3,
            max_consumptions_per_day: 8,
            min_duration_ms: 30 * 60 * 1000,
            max_duration_ms: 4 * 60 * 60 * 1000,
            min_gap_ms: 15 * 60 * 1000,
        }
    }
}

impl ConsumptionOptions {
    pub fn validate(self) -> TimelineResult<Self> {
        if self.min_consumptions_per_day == 0
            || self.min_consumptions_per_day > self.max_consumptions_per_day
        {
            return Err(TimelineError::InvalidGeneratorOptions(format!(
                "consumptions per day must satisfy 1 <= min ({}) <= max ({})",
                self.min_consumptions_per_day, self.max_consumptions_per_day
            )));
        }
        if self.min_duration_ms <= 0 || self.min_duration_ms > self.max_duration_ms {
            return Err(TimelineError::InvalidGeneratorOptions(format!(
                "durations must satisfy 0 < min ({}) <= max ({})",
                self.min_duration_ms, self.max_duration_ms
            )));
        }
        if self.min_gap_ms < 0 {
            return Err(TimelineError::InvalidGeneratorOptions(format!(
                "min gap must be >= 0, got {}",
                self.min_gap_ms
            )));
        }
        Ok(self)
    }
}

/// Inputs of `generate_sample_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleDataOptions {
    pub days: u32,
    /// Row names; `None` uses `DEFAULT_RESOURCE_NAMES`.
    pub resource_names: Option<Vec<String>>,
    pub consumption_options: ConsumptionOptions,
    /// Last day of the range; `None` means now.
    pub end_date: Option<DateTime<Utc>>,
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for SampleDataOptions {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            resource_names: None,
            consumption_options: ConsumptionOptions::default(),
            end_date: None,
            seed: None,
        }
    }
}

impl SampleDataOptions {
    #[must_use]
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    #[must_use]
    pub fn with_resource_names(mut self, names: Vec<String>) -> Self {
        self.resource_names = Some(names);
        self
    }

    #[must_use]
    pub fn with_consumption_options(mut self, options: ConsumptionOptions) -> Self {
        self.consumption_options = options;
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One resource per name, with ids `res-1`, `res-2`, ...
#[must_use]
pub fn generate_resources(names: Option<&[String]>) -> Vec<Resource> {
    let to_resource = |(index, name): (usize, &str)| Resource::new(format!("res-{}", index + 1), name);
    match names {
        Some(names) => names
            .iter()
            .map(String::as_str)
            .enumerate()
            .map(to_resource)
            .collect(),
        None => DEFAULT_RESOURCE_NAMES
            .iter()
            .copied()
            .enumerate()
            .map(to_resource)
            .collect(),
    }
}

/// Range from UTC midnight `days` before `end` up to the last millisecond of
/// `end`'s day.
pub fn generate_time_range(days: u32, end: DateTime<Utc>) -> TimelineResult<TimeRange> {
    let end_day = end.date_naive();
    let start_day = end_day
        .checked_sub_days(Days::new(u64::from(days)))
        .ok_or_else(|| {
            TimelineError::InvalidGeneratorOptions(format!("{days} days before {end} is out of range"))
        })?;
    let start = start_day.and_hms_opt(0, 0, 0);
    let end = end_day.and_hms_milli_opt(23, 59, 59, 999);
    let (Some(start), Some(end)) = (start, end) else {
        return Err(TimelineError::InvalidGeneratorOptions(
            "failed to build day boundaries".to_owned(),
        ));
    };
    TimeRange::new(
        start.and_utc().timestamp_millis(),
        end.and_utc().timestamp_millis(),
    )
}

/// `generate_consumptions_with_rng` seeded from the thread-local generator.
pub fn generate_consumptions(
    resources: &[Resource],
    range: TimeRange,
    options: ConsumptionOptions,
) -> TimelineResult<Vec<Consumption>> {
    generate_consumptions_with_rng(resources, range, options, &mut rand::rng())
}

/// Generates intervals for every resource, sorted by start time.
pub fn generate_consumptions_with_rng<G: Rng>(
    resources: &[Resource],
    range: TimeRange,
    options: ConsumptionOptions,
    rng: &mut G,
) -> TimelineResult<Vec<Consumption>> {
    let options = options.validate()?;
    let mut consumptions = Vec::new();
    for resource in resources {
        place_resource_consumptions(resource, range, options, rng, &mut consumptions);
    }
    consumptions.sort_by_key(|consumption| consumption.start_time);
    debug!(
        resource_count = resources.len(),
        consumption_count = consumptions.len(),
        "generated consumptions"
    );
    Ok(consumptions)
}

fn place_resource_consumptions<G: Rng>(
    resource: &Resource,
    range: TimeRange,
    options: ConsumptionOptions,
    rng: &mut G,
    out: &mut Vec<Consumption>,
) {
    let span = range.span_ms();
    let per_day = rng.random_range(options.min_consumptions_per_day..=options.max_consumptions_per_day);
    let total = i64::from(per_day).saturating_mul(range.day_count());
    if total <= 0 {
        return;
    }

    let min_duration = options.min_duration_ms;
    let max_duration = options.max_duration_ms;
    let min_gap = options.min_gap_ms;
    let slot_size = span as f64 / total as f64;
    let average_duration = (min_duration as f64 + max_duration as f64) / 2.0;
    let max_slot_usage = (slot_size * MAX_SLOT_USAGE_RATIO).min(average_duration);
    // Narrow slots would otherwise push the upper bound below the minimum.
    let duration_room = ((max_duration - min_duration) as f64)
        .min(max_slot_usage - min_duration as f64)
        .max(0.0);

    let mut last_end = range.start;
    for slot in 0..total {
        let slot_start = (range.start as f64 + slot as f64 * slot_size) as i64;
        let slot_end = (slot_start as f64 + slot_size) as i64;
        let min_start = slot_start.max(last_end.saturating_add(min_gap));
        let max_start = slot_end
            .saturating_sub(min_duration)
            .saturating_sub(min_gap)
            .min(range.end.saturating_sub(min_duration));
        if max_start <= min_start {
            continue;
        }

        let duration = min_duration
            .saturating_add((rng.random::<f64>() * duration_room) as i64)
            .min(max_duration);
        let start_room = max_start
            .saturating_sub(min_start)
            .saturating_sub(duration)
            .max(0);
        let start_time = min_start
            .saturating_add((rng.random::<f64>() * start_room as f64) as i64)
            .min(max_start);
        let Some(end_time) = start_time
            .checked_add(duration)
            .filter(|&end| end <= range.end)
        else {
            continue;
        };

        out.push(Consumption::new(
            format!("cons-{}-{slot}", resource.id),
            resource.id.clone(),
            start_time,
            end_time,
        ));
        last_end = end_time;
    }
}

/// Resources, range and consumptions in one call.
///
/// Uses `options.seed` when present, the thread-local generator otherwise.
pub fn generate_sample_data(options: &SampleDataOptions) -> TimelineResult<TimelineData> {
    match options.seed {
        Some(seed) => generate_sample_data_with_rng(options, &mut SmallRng::seed_from_u64(seed)),
        None => generate_sample_data_with_rng(options, &mut rand::rng()),
    }
}

pub fn generate_sample_data_with_rng<G: Rng>(
    options: &SampleDataOptions,
    rng: &mut G,
) -> TimelineResult<TimelineData> {
    let resources = generate_resources(options.resource_names.as_deref());
    let time_range = generate_time_range(options.days, options.end_date.unwrap_or_else(Utc::now))?;
    let consumptions =
        generate_consumptions_with_rng(&resources, time_range, options.consumption_options, rng)?;
    debug!(
        days = options.days,
        span_days = time_range.span_ms() / DAY_MS,
        "generated sample data"
    );
    Ok(TimelineData {
        resources,
        time_range,
        consumptions,
    })
}
