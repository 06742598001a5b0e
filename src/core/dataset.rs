use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Consumption, Resource, TimeRange};
use crate::error::{TimelineError, TimelineResult};

/// Ordered resource roster; position is the vertical row index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceRoster {
    by_id: IndexMap<String, Resource>,
}

impl ResourceRoster {
    /// Builds a roster, rejecting duplicate ids.
    pub fn from_resources(resources: Vec<Resource>) -> TimelineResult<Self> {
        let mut by_id = IndexMap::with_capacity(resources.len());
        for resource in resources {
            if by_id.contains_key(&resource.id) {
                return Err(TimelineError::DuplicateResource { id: resource.id });
            }
            by_id.insert(resource.id.clone(), resource);
        }
        Ok(Self { by_id })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Resource> {
        self.by_id.get_index(index).map(|(_, resource)| resource)
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get_index_of(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.by_id.values()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Resource> {
        self.by_id.values().cloned().collect()
    }
}

/// Consumption collection kept sorted by `start_time` ascending.
///
/// Alongside the sorted collection, each resource keeps the positions of its
/// own consumptions, also in start order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumptionStore {
    by_id: IndexMap<String, Consumption>,
    by_resource: IndexMap<String, Vec<usize>>,
}

impl ConsumptionStore {
    /// Validates every consumption against the roster, then sorts.
    ///
    /// Nothing is kept when any entry is invalid.
    pub fn from_consumptions(
        consumptions: Vec<Consumption>,
        roster: &ResourceRoster,
    ) -> TimelineResult<Self> {
        let mut by_id = IndexMap::with_capacity(consumptions.len());
        for consumption in consumptions {
            validate_consumption(&consumption, roster)?;
            if by_id.contains_key(&consumption.id) {
                return Err(TimelineError::DuplicateConsumption { id: consumption.id });
            }
            by_id.insert(consumption.id.clone(), consumption);
        }
        by_id.sort_by(|_, left, _, right| left.start_time.cmp(&right.start_time));

        let mut by_resource: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (position, consumption) in by_id.values().enumerate() {
            by_resource
                .entry(consumption.resource_id.clone())
                .or_default()
                .push(position);
        }

        Ok(Self { by_id, by_resource })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Consumption> {
        self.by_id.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All consumptions in start-time order.
    pub fn iter(&self) -> impl Iterator<Item = &Consumption> {
        self.by_id.values()
    }

    /// Consumptions of one resource, in start-time order.
    pub fn for_resource<'a>(
        &'a self,
        resource_id: &str,
    ) -> impl Iterator<Item = &'a Consumption> + use<'a> {
        self.by_resource
            .get(resource_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|&position| self.by_id.get_index(position).map(|(_, c)| c))
    }

    /// Consumptions of one resource overlapping `[start, end]`.
    ///
    /// Positions are in start order, so the scan stops at the first
    /// consumption starting after `end`.
    pub fn for_resource_in_window<'a>(
        &'a self,
        resource_id: &str,
        start: f64,
        end: f64,
    ) -> impl Iterator<Item = &'a Consumption> + use<'a> {
        let positions = self
            .by_resource
            .get(resource_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let upper = positions.partition_point(|&position| {
            self.by_id
                .get_index(position)
                .is_some_and(|(_, c)| c.start_time as f64 <= end)
        });
        positions[..upper]
            .iter()
            .filter_map(|&position| self.by_id.get_index(position).map(|(_, c)| c))
            .filter(move |c| c.end_time as f64 >= start)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Consumption> {
        self.by_id.values().cloned().collect()
    }
}

fn validate_consumption(consumption: &Consumption, roster: &ResourceRoster) -> TimelineResult<()> {
    if consumption.start_time >= consumption.end_time {
        return Err(TimelineError::InvalidInterval {
            id: consumption.id.clone(),
            start: consumption.start_time,
            end: consumption.end_time,
        });
    }
    if !roster.contains(&consumption.resource_id) {
        return Err(TimelineError::UnknownResource {
            consumption_id: consumption.id.clone(),
            resource_id: consumption.resource_id.clone(),
        });
    }
    Ok(())
}

/// Complete dataset exchanged with hosts and produced by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineData {
    pub resources: Vec<Resource>,
    pub time_range: TimeRange,
    pub consumptions: Vec<Consumption>,
}

impl TimelineData {
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize dataset: {e}")))
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let data: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse dataset: {e}")))?;
        TimeRange::new(data.time_range.start, data.time_range.end)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConsumptionStore, ResourceRoster, TimelineData};
    use crate::core::{Consumption, Resource, TimeRange};
    use crate::error::TimelineError;

    fn roster() -> ResourceRoster {
        ResourceRoster::from_resources(vec![Resource::new("a", "A"), Resource::new("b", "B")])
            .expect("roster")
    }

    #[test]
    fn roster_rejects_duplicate_ids() {
        let err = ResourceRoster::from_resources(vec![
            Resource::new("a", "A"),
            Resource::new("a", "again"),
        ])
        .expect_err("duplicate");
        assert!(matches!(err, TimelineError::DuplicateResource { id } if id == "a"));
    }

    #[test]
    fn roster_index_follows_insertion_order() {
        let roster = roster();
        assert_eq!(roster.index_of("b"), Some(1));
        assert_eq!(roster.get(0).map(|r| r.name.as_str()), Some("A"));
    }

    #[test]
    fn store_sorts_by_start_and_groups_per_resource() {
        let store = ConsumptionStore::from_consumptions(
            vec![
                Consumption::new("c3", "a", 30, 40),
                Consumption::new("c1", "b", 10, 20),
                Consumption::new("c2", "a", 20, 25),
            ],
            &roster(),
        )
        .expect("store");

        let ids: Vec<_> = store.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2", "c3"]);
        let for_a: Vec<_> = store.for_resource("a").map(|c| c.id.as_str()).collect();
        assert_eq!(for_a, ["c2", "c3"]);
        assert_eq!(store.for_resource("missing").count(), 0);
    }

    #[test]
    fn store_window_query_keeps_overlapping_intervals_only() {
        let store = ConsumptionStore::from_consumptions(
            vec![
                Consumption::new("early", "a", 0, 5),
                Consumption::new("spanning", "a", 2, 50),
                Consumption::new("inside", "a", 12, 14),
                Consumption::new("late", "a", 30, 40),
            ],
            &roster(),
        )
        .expect("store");

        let ids: Vec<_> = store
            .for_resource_in_window("a", 10.0, 20.0)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["spanning", "inside"]);
    }

    #[test]
    fn store_rejects_invalid_entries() {
        let roster = roster();
        assert!(matches!(
            ConsumptionStore::from_consumptions(vec![Consumption::new("x", "a", 5, 5)], &roster),
            Err(TimelineError::InvalidInterval { .. })
        ));
        assert!(matches!(
            ConsumptionStore::from_consumptions(vec![Consumption::new("x", "zz", 1, 5)], &roster),
            Err(TimelineError::UnknownResource { .. })
        ));
        assert!(matches!(
            ConsumptionStore::from_consumptions(
                vec![
                    Consumption::new("x", "a", 1, 5),
                    Consumption::new("x", "b", 1, 5)
                ],
                &roster
            ),
            Err(TimelineError::DuplicateConsumption { .. })
        ));
    }

    #[test]
    fn dataset_json_uses_camel_case_fields() {
        let data = TimelineData {
            resources: vec![Resource::new("a", "A")],
            time_range: TimeRange::new(0, 100).expect("range"),
            consumptions: vec![Consumption::new("c", "a", 1, 2)],
        };
        let json = data.to_json_pretty().expect("json");
        assert!(json.contains("\"resourceId\""));
        assert!(json.contains("\"timeRange\""));
        let back = TimelineData::from_json_str(&json).expect("parse");
        assert_eq!(back, data);
    }

    #[test]
    fn dataset_json_rejects_inverted_range() {
        let json = r#"{"resources":[],"timeRange":{"start":10,"end":1},"consumptions":[]}"#;
        assert!(TimelineData::from_json_str(json).is_err());
    }
}
