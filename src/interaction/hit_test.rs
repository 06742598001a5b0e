use ordered_float::OrderedFloat;

use crate::core::{Consumption, ConsumptionStore, ResourceRoster, ViewportGeometry};

/// Where a pointer click landed, resolved through the viewport geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickResolution<'a> {
    /// Inside the time header or the resource gutter.
    Gutter,
    /// In the plot area but above the first or below the last row.
    NoRow,
    /// On a row, but no interval of that resource contains the click time.
    Miss { resource_index: usize, time: f64 },
    Hit {
        resource_index: usize,
        time: f64,
        consumption: &'a Consumption,
    },
}

impl<'a> ClickResolution<'a> {
    #[must_use]
    pub fn consumption(self) -> Option<&'a Consumption> {
        match self {
            Self::Hit { consumption, .. } => Some(consumption),
            _ => None,
        }
    }
}

/// Resolves a viewport-relative click to a resource row and interval.
pub fn resolve_click<'a>(
    geometry: &ViewportGeometry,
    roster: &ResourceRoster,
    store: &'a ConsumptionStore,
    x: f64,
    y: f64,
) -> ClickResolution<'a> {
    if geometry.is_in_gutter(x, y) {
        return ClickResolution::Gutter;
    }
    let Some(resource_index) = geometry.y_to_resource_index(y) else {
        return ClickResolution::NoRow;
    };
    let Some(resource) = roster.get(resource_index) else {
        return ClickResolution::NoRow;
    };

    let time = geometry.x_to_time(x);
    match nearest_containing(geometry, store.for_resource(&resource.id), x) {
        Some(consumption) => ClickResolution::Hit {
            resource_index,
            time,
            consumption,
        },
        None => ClickResolution::Miss {
            resource_index,
            time,
        },
    }
}

/// Among intervals containing the time under `x`, picks the one whose bar
/// center is closest to `x`. Ties keep the earliest candidate.
pub fn nearest_containing<'a>(
    geometry: &ViewportGeometry,
    candidates: impl IntoIterator<Item = &'a Consumption>,
    x: f64,
) -> Option<&'a Consumption> {
    let time = geometry.x_to_time(x);
    candidates
        .into_iter()
        .filter(|consumption| consumption.contains_time(time))
        .min_by_key(|consumption| {
            let start_x = geometry.time_to_x(consumption.start_time as f64);
            let end_x = geometry.time_to_x(consumption.end_time as f64);
            OrderedFloat((x - (start_x + end_x) / 2.0).abs())
        })
}

#[cfg(test)]
mod tests {
    use super::{ClickResolution, nearest_containing, resolve_click};
    use crate::core::{
        Consumption, ConsumptionStore, DAY_MS, HOUR_MS, LayoutMetrics, Resource, ResourceRoster,
        TimeRange, Viewport, ViewportGeometry, ViewportState,
    };

    fn geometry() -> ViewportGeometry {
        ViewportGeometry::new(
            LayoutMetrics::default(),
            Some(TimeRange::new(0, DAY_MS).expect("range")),
            2,
            ViewportState::new(Viewport::new(1110, 600)),
        )
    }

    fn fixtures() -> (ResourceRoster, ConsumptionStore) {
        let roster =
            ResourceRoster::from_resources(vec![Resource::new("a", "A"), Resource::new("b", "B")])
                .expect("roster");
        let store = ConsumptionStore::from_consumptions(
            vec![
                Consumption::new("a-morning", "a", HOUR_MS, 3 * HOUR_MS),
                Consumption::new("b-noon", "b", 11 * HOUR_MS, 13 * HOUR_MS),
            ],
            &roster,
        )
        .expect("store");
        (roster, store)
    }

    #[test]
    fn click_in_gutters_resolves_to_gutter() {
        let (roster, store) = fixtures();
        let geometry = geometry();
        assert_eq!(resolve_click(&geometry, &roster, &store, 100.0, 300.0), ClickResolution::Gutter);
        assert_eq!(resolve_click(&geometry, &roster, &store, 400.0, 20.0), ClickResolution::Gutter);
    }

    #[test]
    fn click_below_last_row_resolves_to_no_row() {
        let (roster, store) = fixtures();
        assert_eq!(
            resolve_click(&geometry(), &roster, &store, 400.0, 500.0),
            ClickResolution::NoRow
        );
    }

    #[test]
    fn click_on_bar_time_hits_that_interval() {
        let (roster, store) = fixtures();
        let geometry = geometry();
        // 2h into the day on row 0.
        let x = geometry.time_to_x(2.0 * HOUR_MS as f64);
        let hit = resolve_click(&geometry, &roster, &store, x, 80.0);
        assert_eq!(hit.consumption().map(|c| c.id.as_str()), Some("a-morning"));
    }

    #[test]
    fn click_on_other_row_misses() {
        let (roster, store) = fixtures();
        let geometry = geometry();
        let x = geometry.time_to_x(2.0 * HOUR_MS as f64);
        assert!(matches!(
            resolve_click(&geometry, &roster, &store, x, 120.0),
            ClickResolution::Miss { resource_index: 1, .. }
        ));
    }

    #[test]
    fn overlapping_candidates_prefer_nearest_center_then_first() {
        let geometry = geometry();
        let wide = Consumption::new("wide", "a", 0, 10 * HOUR_MS);
        let narrow = Consumption::new("narrow", "a", 7 * HOUR_MS, 9 * HOUR_MS);
        let twin = Consumption::new("twin", "a", 7 * HOUR_MS, 9 * HOUR_MS);
        let x = geometry.time_to_x(8.0 * HOUR_MS as f64);

        let picked = nearest_containing(&geometry, [&wide, &narrow, &twin], x);
        assert_eq!(picked.map(|c| c.id.as_str()), Some("narrow"));
    }
}
