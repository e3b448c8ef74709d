use chart_series_kit::core::{
    AreaVertex, Dimension, Position, SeriesDataModel, SeriesItem, make_positions_for_default_type,
    project_area_geometry,
};

#[test]
fn area_projection_returns_empty_for_empty_row() {
    let geometry = project_area_geometry(&[], 210.0);

    assert!(geometry.line_points.is_empty());
    assert!(geometry.fill_polygon.is_empty());
}

#[test]
fn area_fill_closes_against_zero_line() {
    let positions = [
        Position::new(10.0, 110.0),
        Position::new(160.0, 60.0),
        Position::new(310.0, 10.0),
    ];

    let geometry = project_area_geometry(&positions, 210.0);

    assert_eq!(geometry.line_points.len(), 3);
    assert_eq!(geometry.fill_polygon.len(), 7);
    assert_eq!(
        geometry.fill_polygon[3..6],
        [
            AreaVertex { x: 310.0, y: 210.0 },
            AreaVertex { x: 160.0, y: 210.0 },
            AreaVertex { x: 10.0, y: 210.0 },
        ]
    );
    assert_eq!(geometry.fill_polygon.first(), geometry.fill_polygon.last());
}

#[test]
fn range_area_fill_follows_start_tops() {
    let model = SeriesDataModel::from_legend_rows(vec![vec![
        SeriesItem::new(80.0, "80", 0.8).with_range(20.0, "20", 0.2),
        SeriesItem::new(60.0, "60", 0.6).with_range(40.0, "40", 0.4),
    ]])
    .expect("model");
    let positions =
        make_positions_for_default_type(&model, Dimension::new(200.0, 100.0), None, true);

    let geometry = project_area_geometry(&positions[0], 110.0);

    let baseline: Vec<f64> = geometry.fill_polygon[2..4].iter().map(|v| v.y).collect();
    assert_eq!(baseline, vec![70.0, 90.0]);
}
