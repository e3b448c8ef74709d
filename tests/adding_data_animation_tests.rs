use chart_series_kit::LineTypeSeries;
use chart_series_kit::animation::{FrameHandle, ManualFrameScheduler};
use chart_series_kit::core::{
    AxesData, AxisLimit, Dimension, RatioMap, SeriesDataModel, SeriesItem, SeriesItemDetail,
    XAxisData,
};
use chart_series_kit::render::{NullGraphRenderer, RendererCall};
use chart_series_kit::series::{AnimationStatus, LineSeriesOptions, SeriesBounds, SeriesMotion};

type TestSeries = LineTypeSeries<NullGraphRenderer, ManualFrameScheduler>;

fn axes(max: f64) -> AxesData {
    AxesData::new(
        XAxisData::default(),
        AxisLimit::new(0.0, max).expect("limit"),
    )
}

fn model(categories: usize) -> SeriesDataModel {
    let row = (0..categories)
        .map(|index| {
            let value = 10.0 * (index as f64 + 1.0);
            SeriesItem::new(value, format!("{value}"), value / 100.0)
        })
        .collect();
    SeriesDataModel::from_legend_rows(vec![row]).expect("model")
}

fn series(shifting: bool, show_label: bool, coordinate_type: bool) -> TestSeries {
    let options = LineSeriesOptions {
        shifting,
        show_label,
        ..LineSeriesOptions::default()
    };
    LineTypeSeries::new(
        NullGraphRenderer::default(),
        ManualFrameScheduler::new(),
        options,
        coordinate_type,
        SeriesBounds::from_series(Dimension::new(300.0, 200.0)),
        axes(100.0),
    )
    .expect("series")
}

fn label_count(series: &TestSeries) -> usize {
    series.label_container().map_or(0, |labels| labels.len())
}

fn next_frame(series: &mut TestSeries) -> FrameHandle {
    series
        .scheduler_mut()
        .take_pending()
        .expect("pending frame")
}

#[test]
fn shifting_moves_children_left_and_widens_graph() {
    let mut series = series(true, true, false);
    series.render(model(3), axes(100.0)).expect("render");
    assert!(series.is_changed_axis_limit());
    assert_eq!(label_count(&series), 3);

    series
        .animate_for_adding_data(100.0, model(4), axes(100.0), 0.0)
        .expect("adding data");

    assert_eq!(
        series.renderer().calls[1],
        RendererCall::AnimateForAddingData {
            tick_size: 100.0,
            shifting: true,
            zero_top: 210.0,
        }
    );
    let lefts: Vec<f64> = series.group_positions()[0].iter().map(|p| p.left).collect();
    assert_eq!(lefts, vec![60.0, 160.0, 260.0, 360.0]);
    assert_eq!(label_count(&series), 2);
    assert_eq!(
        series.current_motion(),
        Some(SeriesMotion::Shift {
            interval: 100.0,
            before_left: 0.0,
            area_width: 320.0,
        })
    );

    let first = next_frame(&mut series);
    assert_eq!(series.on_animation_frame(first, 150.0), AnimationStatus::Running);
    assert!(
        series
            .series_container()
            .children()
            .iter()
            .all(|child| child.left_px == Some(-50.0))
    );
    assert_eq!(series.renderer().last_size(), Some(370.0));

    assert_eq!(series.on_animation_frame(first, 200.0), AnimationStatus::Stale);

    let second = next_frame(&mut series);
    assert_eq!(series.on_animation_frame(second, 300.0), AnimationStatus::Completed);
    assert_eq!(series.series_container().first_child_left(), -100.0);
    assert_eq!(series.renderer().last_size(), Some(420.0));
    assert!(!series.is_animating());
    assert!(series.scheduler().pending().is_empty());
}

#[test]
fn second_shift_starts_from_previous_offset() {
    let mut series = series(true, false, false);
    series.render(model(3), axes(100.0)).expect("render");

    series
        .animate_for_adding_data(50.0, model(4), axes(100.0), 0.0)
        .expect("adding data");
    let frame = next_frame(&mut series);
    series.on_animation_frame(frame, 1_000.0);

    series
        .animate_for_adding_data(50.0, model(5), axes(100.0), 1_000.0)
        .expect("adding data");

    assert_eq!(
        series.current_motion(),
        Some(SeriesMotion::Shift {
            interval: 50.0,
            before_left: -50.0,
            area_width: 320.0,
        })
    );
}

#[test]
fn changed_axis_limit_clears_labels() {
    let mut series = series(true, true, false);
    series.render(model(3), axes(100.0)).expect("render");
    assert!(series.is_changed_axis_limit());

    series
        .animate_for_adding_data(100.0, model(4), axes(200.0), 0.0)
        .expect("adding data");

    assert_eq!(label_count(&series), 0);
    assert!(series.is_animating());
}

#[test]
fn first_animation_treats_limits_as_changed() {
    let mut series = series(true, true, false);
    series.render(model(3), axes(100.0)).expect("render");

    series
        .animate_for_adding_data(100.0, model(4), axes(100.0), 0.0)
        .expect("adding data");

    assert_eq!(label_count(&series), 0);
    assert!(!series.is_changed_axis_limit());
}

#[test]
fn resizing_narrows_label_container() {
    let mut series = series(false, true, false);
    series.render(model(3), axes(100.0)).expect("render");

    series
        .animate_for_adding_data(100.0, model(4), axes(100.0), 0.0)
        .expect("adding data");

    let lefts: Vec<f64> = series.group_positions()[0].iter().map(|p| p.left).collect();
    assert_eq!(lefts, vec![47.5, 122.5, 197.5, 272.5]);

    let first = next_frame(&mut series);
    assert_eq!(series.on_animation_frame(first, 150.0), AnimationStatus::Running);
    assert_eq!(
        series.label_container().and_then(|labels| labels.width()),
        Some(270.0)
    );

    let second = next_frame(&mut series);
    assert_eq!(series.on_animation_frame(second, 400.0), AnimationStatus::Completed);
    assert_eq!(
        series.label_container().and_then(|labels| labels.width()),
        Some(220.0)
    );
    assert_eq!(series.renderer().last_size(), None);
}

#[test]
fn resizing_without_labels_does_nothing() {
    let mut series = series(false, false, false);
    series.render(model(3), axes(100.0)).expect("render");

    series
        .animate_for_adding_data(100.0, model(4), axes(100.0), 0.0)
        .expect("adding data");

    assert!(!series.is_animating());
    assert!(series.scheduler().pending().is_empty());
    assert!(series.is_changed_axis_limit());
}

#[test]
fn coordinate_resizing_clears_labels_without_motion() {
    let coordinate_model = SeriesDataModel::from_legend_rows(vec![vec![
        SeriesItem::new(20.0, "20", 0.2).with_detail(SeriesItemDetail::Coordinate {
            x: Some("1".to_owned()),
            y: Some("20".to_owned()),
            r: None,
            ratio_map: RatioMap {
                x: 0.1,
                y: 0.2,
                start: None,
            },
        }),
    ]])
    .expect("model");
    let mut series = series(false, true, true);
    series
        .render(coordinate_model.clone(), axes(100.0))
        .expect("render");
    assert_eq!(label_count(&series), 1);

    series
        .animate_for_adding_data(10.0, coordinate_model, axes(100.0), 0.0)
        .expect("adding data");

    assert_eq!(label_count(&series), 0);
    assert!(!series.is_animating());
    assert_eq!(
        series.on_animation_frame(FrameHandle(1), 10.0),
        AnimationStatus::Idle
    );
}

#[test]
fn new_data_cancels_in_flight_animation() {
    let mut series = series(true, false, false);
    series.render(model(3), axes(100.0)).expect("render");

    series
        .animate_for_adding_data(100.0, model(4), axes(100.0), 0.0)
        .expect("adding data");
    let first = series.scheduler().pending()[0];

    series
        .animate_for_adding_data(100.0, model(5), axes(100.0), 50.0)
        .expect("adding data");

    assert_eq!(series.scheduler().cancelled(), &[first]);
    assert_eq!(series.scheduler().pending().len(), 1);
    assert_ne!(series.scheduler().pending()[0], first);
    assert_eq!(series.on_animation_frame(first, 100.0), AnimationStatus::Stale);
}

#[test]
fn zoom_cancels_animation_and_rerenders_without_animation() {
    let mut series = series(true, false, false);
    series.render(model(3), axes(100.0)).expect("render");
    series.select_legend(Some(0));
    series
        .animate_for_adding_data(100.0, model(4), axes(100.0), 0.0)
        .expect("adding data");
    let in_flight = series.scheduler().pending()[0];

    series.zoom(model(2), axes(100.0)).expect("zoom");

    assert!(!series.is_animating());
    assert_eq!(series.scheduler().cancelled(), &[in_flight]);
    assert_eq!(series.series_container().first_child_left(), 0.0);
    let calls = &series.renderer().calls;
    assert_eq!(
        &calls[calls.len() - 4..],
        &[
            RendererCall::Clear,
            RendererCall::RenderGraph {
                legend_count: 1,
                zero_top: 210.0,
            },
            RendererCall::ShowWithoutAnimation,
            RendererCall::SelectLegend(Some(0)),
        ]
    );
}

#[test]
fn cancel_without_animation_is_a_no_op() {
    let mut series = series(true, false, false);
    series.cancel_moving_animation();

    assert!(series.scheduler().cancelled().is_empty());
}

#[test]
fn animation_duration_comes_from_options() {
    let options = LineSeriesOptions {
        shifting: true,
        animation_duration_ms: 0.0,
        ..LineSeriesOptions::default()
    };
    let mut series = LineTypeSeries::new(
        NullGraphRenderer::default(),
        ManualFrameScheduler::new(),
        options,
        false,
        SeriesBounds::from_series(Dimension::new(300.0, 200.0)),
        axes(100.0),
    )
    .expect("series");
    series.render(model(2), axes(100.0)).expect("render");
    series
        .animate_for_adding_data(40.0, model(3), axes(100.0), 0.0)
        .expect("adding data");

    let frame = next_frame(&mut series);
    assert_eq!(series.on_animation_frame(frame, 0.0), AnimationStatus::Completed);
    assert_eq!(series.series_container().first_child_left(), -40.0);
}

fn range_model(legends: usize, categories: usize) -> SeriesDataModel {
    let rows = (0..legends)
        .map(|legend| {
            (0..categories)
                .map(|index| {
                    let value = 50.0 + 10.0 * (index + legend) as f64;
                    SeriesItem::new(value, format!("{value}"), value / 100.0).with_range(
                        10.0,
                        "10",
                        0.1,
                    )
                })
                .collect()
        })
        .collect();
    SeriesDataModel::from_legend_rows(rows).expect("model")
}

#[test]
fn shifting_drops_first_label_of_every_row_with_range_sibling() {
    let mut series = series(true, true, false);
    series.render(range_model(2, 3), axes(100.0)).expect("render");
    assert!(series.is_changed_axis_limit());
    assert_eq!(label_count(&series), 12);

    series
        .animate_for_adding_data(100.0, range_model(2, 4), axes(100.0), 0.0)
        .expect("adding data");

    let remaining: Vec<(usize, usize, bool)> = series
        .label_container()
        .expect("label container")
        .elements()
        .iter()
        .map(|element| (element.group_index, element.index, element.is_range))
        .collect();
    assert_eq!(
        remaining,
        vec![
            (0, 1, false),
            (0, 1, true),
            (0, 2, false),
            (0, 2, true),
            (1, 1, false),
            (1, 1, true),
            (1, 2, false),
            (1, 2, true),
        ]
    );
}
