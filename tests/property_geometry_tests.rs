use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use resource_timeline::core::{
    DAY_MS, LayoutMetrics, TimeRange, Viewport, ViewportGeometry, ViewportState, visible_window,
};

fn geometry(
    start: i64,
    days: i64,
    resource_count: usize,
    width: u32,
    height: u32,
    scroll_x: f64,
    scroll_y: f64,
) -> ViewportGeometry {
    ViewportGeometry::new(
        LayoutMetrics::default(),
        Some(TimeRange::new(start, start + days * DAY_MS).expect("valid range")),
        resource_count,
        ViewportState::new(Viewport::new(width, height)).with_scroll(scroll_x, scroll_y),
    )
}

proptest! {
    #[test]
    fn time_mapping_round_trips(
        start in 1_500_000_000_000i64..1_800_000_000_000,
        days in 1i64..200,
        width in 151u32..4_000,
        scroll_x in 0.0f64..500_000.0,
        fraction in 0.0f64..=1.0
    ) {
        let geometry = geometry(start, days, 10, width, 600, scroll_x, 0.0);
        let time = start as f64 + fraction * (days * DAY_MS) as f64;
        let back = geometry.x_to_time(geometry.time_to_x(time));
        assert_abs_diff_eq!(back, time, epsilon = 1e-2);
    }

    #[test]
    fn row_mapping_round_trips_for_rows_below_header(
        resource_count in 1usize..500,
        height in 61u32..2_000,
        scroll_y in 0.0f64..10_000.0,
        pick in 0.0f64..1.0
    ) {
        let geometry = geometry(0, 1, resource_count, 1_110, height, 0.0, scroll_y);
        let index = ((resource_count as f64 * pick) as usize).min(resource_count - 1);
        let layout = LayoutMetrics::default();
        let center = geometry.resource_index_to_y(index) + layout.resource_height / 2.0;
        if center >= layout.time_axis_height {
            prop_assert_eq!(geometry.y_to_resource_index(center), Some(index));
        } else {
            prop_assert_eq!(geometry.y_to_resource_index(center), None);
        }
    }

    #[test]
    fn visible_window_stays_inside_dataset(
        start in -1_000_000_000i64..1_000_000_000,
        days in 1i64..400,
        resource_count in 0usize..300,
        width in 151u32..4_000,
        height in 61u32..2_000,
        scroll_x in 0.0f64..2_000_000.0,
        scroll_y in 0.0f64..20_000.0
    ) {
        let geometry = geometry(start, days, resource_count, width, height, scroll_x, scroll_y);
        let window = visible_window(&geometry).expect("window");
        let range = geometry.time_range().expect("range");

        prop_assert!(window.time.start >= range.start as f64);
        prop_assert!(window.time.end <= range.end as f64);
        prop_assert!(window.time.start <= window.time.end);
        prop_assert!(window.rows.start <= window.rows.end);
        prop_assert!(window.rows.end <= resource_count);
    }

    #[test]
    fn degenerate_inputs_never_panic(
        x in -10_000.0f64..10_000.0,
        y in -10_000.0f64..10_000.0,
        width in 0u32..200
    ) {
        let empty = ViewportGeometry::new(
            LayoutMetrics::default(),
            None,
            0,
            ViewportState::new(Viewport::new(width, 0)),
        );
        prop_assert_eq!(empty.time_to_x(x), 0.0);
        prop_assert_eq!(empty.x_to_time(x), 0.0);
        prop_assert_eq!(empty.resource_index_to_y(3), 0.0);
        prop_assert_eq!(empty.y_to_resource_index(y), None);
        prop_assert!(visible_window(&empty).is_none());
        prop_assert!(empty.content_size().is_none());
    }
}
