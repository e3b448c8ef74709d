use std::sync::Arc;

use chart_series_kit::NormalTooltip;
use chart_series_kit::api::{TOOLTIP_DATA_JSON_SCHEMA_V1, tooltip_data_to_json_contract_v1_pretty};
use chart_series_kit::core::{SeriesDataModel, SeriesItem};
use chart_series_kit::tooltip::{
    ChartType, LabelFormatterFn, SeriesDataSet, TooltipDataSource, TooltipDatum,
};

fn model(rows: &[&[f64]]) -> SeriesDataModel {
    SeriesDataModel::from_legend_rows(
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|value| SeriesItem::new(*value, format!("{value}"), value / 100.0))
                    .collect()
            })
            .collect(),
    )
    .expect("model")
}

#[test]
fn tooltip_data_is_grouped_by_category() {
    let source = SeriesDataSet::new(vec!["Jan".to_owned(), "Feb".to_owned(), "Mar".to_owned()])
        .with_series(
            ChartType::Line,
            vec!["A".to_owned(), "B".to_owned()],
            model(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]),
        )
        .expect("series");
    let mut tooltip = NormalTooltip::new(ChartType::Line, true);
    tooltip.update_tooltip_data(&source);

    let rows = tooltip.data().get(&ChartType::Line).expect("line rows");
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 2));

    let datum = &rows[2][1];
    assert_eq!(datum.legend, "B");
    assert_eq!(datum.label, ":&nbsp;6");
    assert_eq!(datum.category, "Mar");
    assert_eq!(datum.values.value, 6.0);
}

#[test]
fn treemap_data_is_grouped_by_legend() {
    let source = SeriesDataSet::new(vec!["x".to_owned(), "y".to_owned(), "z".to_owned()])
        .with_series(
            ChartType::Treemap,
            vec!["A".to_owned(), "B".to_owned()],
            model(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]),
        )
        .expect("series");
    let mut tooltip = NormalTooltip::new(ChartType::Treemap, true);
    tooltip.update_tooltip_data(&source);

    let rows = tooltip.data().get(&ChartType::Treemap).expect("treemap rows");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.len() == 3));
    assert_eq!(rows[1][0].values.value, 4.0);
}

#[test]
fn combo_data_is_keyed_by_chart_type() {
    let source = SeriesDataSet::new(vec!["Jan".to_owned()])
        .with_series(
            ChartType::Column,
            vec!["Rain".to_owned()],
            model(&[&[10.0]]),
        )
        .expect("column")
        .with_series(
            ChartType::Line,
            vec!["Temp".to_owned(), "Wind".to_owned()],
            model(&[&[20.0], &[30.0]]),
        )
        .expect("line");
    let mut tooltip = NormalTooltip::new(ChartType::Combo, true)
        .with_chart_types(vec![ChartType::Column, ChartType::Line]);
    tooltip.update_tooltip_data(&source);

    let data = tooltip.data();
    let keys: Vec<ChartType> = data.keys().copied().collect();
    assert_eq!(keys, vec![ChartType::Column, ChartType::Line]);
    assert_eq!(data[&ChartType::Column][0][0].legend, "Rain");
    assert_eq!(data[&ChartType::Line][0][1].legend, "Wind");

    let legend = source.legend_item(2).expect("global legend index");
    assert_eq!(legend.chart_type, ChartType::Line);
    assert_eq!(legend.label, "Wind");
}

#[test]
fn heatmap_category_joins_both_axes_by_orientation() {
    let source = SeriesDataSet::new(vec!["Mon".to_owned()])
        .with_y_categories(vec!["AM".to_owned(), "PM".to_owned()]);

    assert_eq!(
        source.make_tooltip_category(0, 1, true).as_deref(),
        Some("Mon, PM")
    );
    assert_eq!(
        source.make_tooltip_category(0, 0, false).as_deref(),
        Some("AM, Mon")
    );
    assert_eq!(source.make_tooltip_category(4, 0, true), None);
}

#[test]
fn invalid_date_pattern_keeps_raw_category() {
    let source = SeriesDataSet::new(vec!["1700000000000".to_owned()]).with_date_format("%Q");

    assert_eq!(
        source.make_tooltip_category(0, 0, true).as_deref(),
        Some("1700000000000")
    );
}

#[test]
fn tooltip_label_overrides_prefixed_label() {
    let item = SeriesItem::new(12.0, "12", 0.12).with_tooltip_label("twelve <units>");
    let source = SeriesDataSet::new(vec!["Jan".to_owned()])
        .with_series(
            ChartType::Line,
            vec!["A".to_owned()],
            SeriesDataModel::from_legend_rows(vec![vec![item]]).expect("model"),
        )
        .expect("series");
    let mut tooltip = NormalTooltip::new(ChartType::Line, true);
    tooltip.update_tooltip_data(&source);

    let datum = &tooltip.data()[&ChartType::Line][0][0];
    assert_eq!(datum.label, "twelve &lt;units&gt;");
}

#[test]
fn label_formatter_rewrites_datum_before_category_is_attached() {
    let formatter: LabelFormatterFn = Arc::new(
        |item: &SeriesItem, datum: TooltipDatum, prefix: &str| TooltipDatum {
            label: format!("{prefix}{} pts", item.value),
            category: "ignored".to_owned(),
            ..datum
        },
    );
    let source = SeriesDataSet::new(vec!["Jan".to_owned()])
        .with_series(ChartType::Line, vec!["A".to_owned()], model(&[&[7.0]]))
        .expect("series");
    let mut tooltip = NormalTooltip::new(ChartType::Line, true).with_label_formatter(formatter);
    tooltip.update_tooltip_data(&source);

    let datum = &tooltip.data()[&ChartType::Line][0][0];
    assert_eq!(datum.label, ":&nbsp;7 pts");
    assert_eq!(datum.category, "Jan");
}

#[test]
fn range_item_values_expose_start_and_end_labels() {
    let item = SeriesItem::new(80.0, "80", 0.8).with_range(20.0, "20", 0.2);
    let values = item.pick_value_map_for_tooltip();

    assert_eq!(values.start_label.as_deref(), Some("20"));
    assert_eq!(values.end_label.as_deref(), Some("80"));
}

#[test]
fn series_registration_rejects_mismatched_legends() {
    let err = SeriesDataSet::new(vec!["Jan".to_owned()])
        .with_series(
            ChartType::Line,
            vec!["only one".to_owned()],
            model(&[&[1.0], &[2.0]]),
        )
        .expect_err("two legends, one label");
    assert!(err.to_string().contains("2 legends"));
}

#[test]
fn tooltip_data_contract_round_trips_through_json() {
    let source = SeriesDataSet::new(vec!["Jan".to_owned()])
        .with_series(ChartType::Area, vec!["A".to_owned()], model(&[&[3.0]]))
        .expect("series");
    let mut tooltip = NormalTooltip::new(ChartType::Area, true);
    tooltip.update_tooltip_data(&source);

    let json = tooltip_data_to_json_contract_v1_pretty(tooltip.data()).expect("json");
    let payload: serde_json::Value = serde_json::from_str(&json).expect("parse");

    assert_eq!(payload["schema_version"], TOOLTIP_DATA_JSON_SCHEMA_V1);
    assert_eq!(payload["data"]["area"][0][0]["legend"], "A");
}
