use chart_series_kit::core::{
    AxisLimit, Dimension, SeriesDataModel, SeriesItem, limit_distance_from_zero_point,
    make_positions_for_default_type,
};
use proptest::prelude::*;

fn model_from_ratios(legends: usize, ratios: &[f64]) -> SeriesDataModel {
    let categories = ratios.len() / legends;
    let rows = (0..legends)
        .map(|legend| {
            ratios[legend * categories..(legend + 1) * categories]
                .iter()
                .map(|ratio| SeriesItem::new(*ratio, "v", *ratio))
                .collect()
        })
        .collect();
    SeriesDataModel::from_legend_rows(rows).expect("rectangular model")
}

proptest! {
    #[test]
    fn default_positions_are_rectangular_and_inside_the_area(
        legends in 1usize..4,
        ratios in proptest::collection::vec(0.0f64..=1.0, 4..48),
        width in 50.0f64..2_000.0,
        height in 50.0f64..1_000.0,
        aligned in any::<bool>()
    ) {
        let categories = ratios.len() / legends;
        prop_assume!(categories >= 1);
        let model = model_from_ratios(legends, &ratios[..categories * legends]);

        let positions = make_positions_for_default_type(
            &model,
            Dimension::new(width, height),
            None,
            aligned,
        );

        prop_assert_eq!(positions.len(), legends);
        for row in &positions {
            prop_assert_eq!(row.len(), categories);
            for position in row {
                prop_assert!(position.left >= 10.0 - 1e-9);
                prop_assert!(position.left <= width + 10.0 + 1e-9);
                prop_assert!(position.top >= 10.0 - 1e-9);
                prop_assert!(position.top <= height + 10.0 + 1e-9);
            }
            for pair in row.windows(2) {
                prop_assert!(pair[1].left > pair[0].left);
            }
        }
    }

    #[test]
    fn category_lefts_are_shared_across_legends(
        ratios in proptest::collection::vec(0.0f64..=1.0, 6..40),
        aligned in any::<bool>()
    ) {
        let legends = 2;
        let categories = ratios.len() / legends;
        let model = model_from_ratios(legends, &ratios[..categories * legends]);

        let positions = make_positions_for_default_type(
            &model,
            Dimension::new(640.0, 320.0),
            None,
            aligned,
        );

        for index in 0..categories {
            prop_assert_eq!(positions[0][index].left, positions[1][index].left);
        }
    }

    #[test]
    fn zero_point_splits_the_axis_when_limit_spans_zero(
        min in -1_000.0f64..0.0,
        max in 0.0f64..1_000.0,
        size in 1.0f64..2_000.0
    ) {
        prop_assume!(max - min > 1e-6);
        let limit = AxisLimit::new(min, max).expect("limit");

        let distance = limit_distance_from_zero_point(size, limit);

        prop_assert!((distance.to_max + distance.to_min - size).abs() <= 1e-6);
        prop_assert!(distance.to_max >= -1e-9 && distance.to_max <= size + 1e-9);
    }
}
