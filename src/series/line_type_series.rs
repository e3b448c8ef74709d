use tracing::{debug, warn};

use crate::animation::FrameScheduler;
use crate::core::{
    AxesData, AxisLimit, Bound, EstimatedLabelMeasurer, GroupPositions, LabelMeasurer,
    LabelPlacement, PositionMode, SeriesDataModel, make_basic_positions, make_label_position,
    zero_top_for_adding_data,
};
use crate::error::ChartResult;
use crate::render::{
    ContainerChildRole, GraphRenderRequest, GraphRenderer, LabelElement, SeriesContainer,
    SeriesLabelContainer,
};

use super::adding_data::MovingAnimation;
use super::series_label::make_series_label_html;
use super::{LineSeriesOptions, SeriesBounds};

/// Line or area series: owns geometry, value labels and streaming animation.
///
/// The graph itself is drawn by `G`; frames for transitions come from `S`.
pub struct LineTypeSeries<G: GraphRenderer, S: FrameScheduler> {
    pub(super) renderer: G,
    pub(super) scheduler: S,
    pub(super) options: LineSeriesOptions,
    pub(super) coordinate_type: bool,
    pub(super) model: SeriesDataModel,
    pub(super) bounds: SeriesBounds,
    pub(super) axes: AxesData,
    pub(super) before_axes: Option<AxesData>,
    pub(super) group_positions: GroupPositions,
    pub(super) series_container: SeriesContainer,
    pub(super) label_container: Option<SeriesLabelContainer>,
    pub(super) selected_legend_index: Option<usize>,
    pub(super) moving_animation: Option<MovingAnimation>,
    measurer: Box<dyn LabelMeasurer>,
}

impl<G: GraphRenderer, S: FrameScheduler> LineTypeSeries<G, S> {
    pub fn new(
        renderer: G,
        scheduler: S,
        options: LineSeriesOptions,
        coordinate_type: bool,
        bounds: SeriesBounds,
        axes: AxesData,
    ) -> ChartResult<Self> {
        options.validate()?;
        bounds.validate()?;

        let label_container = options.show_label.then(SeriesLabelContainer::new);
        Ok(Self {
            renderer,
            scheduler,
            options,
            coordinate_type,
            model: SeriesDataModel::default(),
            bounds,
            axes,
            before_axes: None,
            group_positions: Vec::new(),
            series_container: SeriesContainer::new(),
            label_container,
            selected_legend_index: None,
            moving_animation: None,
            measurer: Box::new(EstimatedLabelMeasurer),
        })
    }

    /// Replaces the label measurer (real text metrics from the host UI).
    #[must_use]
    pub fn with_label_measurer(mut self, measurer: Box<dyn LabelMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    #[must_use]
    pub fn options(&self) -> &LineSeriesOptions {
        &self.options
    }

    #[must_use]
    pub fn model(&self) -> &SeriesDataModel {
        &self.model
    }

    #[must_use]
    pub fn bounds(&self) -> SeriesBounds {
        self.bounds
    }

    #[must_use]
    pub fn axes(&self) -> AxesData {
        self.axes
    }

    #[must_use]
    pub fn group_positions(&self) -> &GroupPositions {
        &self.group_positions
    }

    #[must_use]
    pub fn series_container(&self) -> &SeriesContainer {
        &self.series_container
    }

    #[must_use]
    pub fn label_container(&self) -> Option<&SeriesLabelContainer> {
        self.label_container.as_ref()
    }

    #[must_use]
    pub fn selected_legend_index(&self) -> Option<usize> {
        self.selected_legend_index
    }

    #[must_use]
    pub fn renderer(&self) -> &G {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut G {
        &mut self.renderer
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn set_bounds(&mut self, bounds: SeriesBounds) -> ChartResult<()> {
        bounds.validate()?;
        self.bounds = bounds;
        Ok(())
    }

    #[must_use]
    pub fn position_mode(&self) -> PositionMode {
        if self.coordinate_type {
            PositionMode::Coordinate {
                x_axis: self.axes.x_axis,
            }
        } else {
            PositionMode::Default {
                aligned: self.options.aligned,
            }
        }
    }

    /// Base positions of every legend row; `series_width` overrides the
    /// series area width.
    pub fn make_basic_positions(&self, series_width: Option<f64>) -> ChartResult<GroupPositions> {
        make_basic_positions(
            &self.model,
            self.bounds.series,
            series_width,
            self.position_mode(),
        )
    }

    #[must_use]
    pub fn zero_top(&self) -> f64 {
        zero_top_for_adding_data(self.bounds.series.height, self.axes.y_axis.limit)
    }

    /// Renders the series area: graph surface first, then value labels.
    pub fn render(&mut self, model: SeriesDataModel, axes: AxesData) -> ChartResult<()> {
        self.model = model;
        self.axes = axes;
        self.group_positions = self.make_basic_positions(None)?;

        self.series_container.clear();
        self.series_container.push_child(ContainerChildRole::Graph);
        if self.label_container.is_some() {
            self.series_container.push_child(ContainerChildRole::Labels);
        }

        let request = GraphRenderRequest {
            dimension: self.bounds.extended,
            group_positions: &self.group_positions,
            zero_top: self.zero_top(),
        };
        self.renderer.render_graph(&request)?;
        self.render_series_labels()?;

        debug!(
            categories = self.model.group_count(),
            legends = self.model.legend_count(),
            coordinate_type = self.coordinate_type,
            "rendered line-type series"
        );
        Ok(())
    }

    /// Rebuilds every value label from the current positions.
    ///
    /// Range items get a second, start label right after their end label.
    pub fn render_series_labels(&mut self) -> ChartResult<()> {
        if self.label_container.is_none() {
            return Ok(());
        }

        let theme = &self.options.label_theme;
        let first_label = self.model.first_item_label().unwrap_or_default();
        let label_height = self.measurer.label_height(first_label, theme);
        let stacked = self.options.is_stacked();
        let extended = self.bounds.extended;

        let mut elements = Vec::new();
        for (group_index, group) in self.model.pivot_groups().iter().enumerate() {
            for (index, item) in group.iter().enumerate() {
                let Some(base) = self
                    .group_positions
                    .get(group_index)
                    .and_then(|row| row.get(index))
                    .copied()
                else {
                    warn!(group_index, index, "skipping label without position");
                    continue;
                };

                let label = item.end_or_label();
                let placement = LabelPlacement {
                    base,
                    label_width: self.measurer.label_width(label, theme),
                    label_height,
                    value: item.value,
                    is_start: false,
                    stacked,
                };
                let position = make_label_position(placement, extended)?;
                elements.push(LabelElement {
                    group_index,
                    index,
                    is_range: false,
                    html: make_series_label_html(position, label, group_index, index, false),
                });

                if let (Some(start_label), Some(start_top)) = (item.start_label(), base.start_top) {
                    let mut start_base = base;
                    start_base.top = start_top;
                    let placement = LabelPlacement {
                        base: start_base,
                        label_width: self.measurer.label_width(start_label, theme),
                        is_start: true,
                        ..placement
                    };
                    let position = make_label_position(placement, extended)?;
                    elements.push(LabelElement {
                        group_index,
                        index,
                        is_range: true,
                        html: make_series_label_html(
                            position,
                            start_label,
                            group_index,
                            index,
                            true,
                        ),
                    });
                }
            }
        }

        if let Some(container) = self.label_container.as_mut() {
            container.set_elements(elements);
        }
        Ok(())
    }

    /// Forwards to the renderer's group tooltip line, when it has one.
    pub fn on_show_group_tooltip_line(&mut self, bound: Bound) {
        if let Some(line) = self.renderer.group_tooltip_line() {
            line.show_group_tooltip_line(bound);
        }
    }

    pub fn on_hide_group_tooltip_line(&mut self) {
        if let Some(line) = self.renderer.group_tooltip_line() {
            line.hide_group_tooltip_line();
        }
    }

    /// Highlights one legend row; `None` clears the selection.
    pub fn select_legend(&mut self, legend_index: Option<usize>) {
        if let Some(index) = legend_index {
            if index >= self.model.legend_count() {
                warn!(index, "ignoring selection of unknown legend");
                return;
            }
        }
        self.selected_legend_index = legend_index;
        self.renderer.select_legend(legend_index);
    }

    /// Re-renders for a zoomed data window without animation.
    pub fn zoom(&mut self, model: SeriesDataModel, axes: AxesData) -> ChartResult<()> {
        self.cancel_moving_animation();
        self.renderer.clear();
        self.series_container.clear();
        self.render(model, axes)?;
        self.renderer.show_graph_without_animation();

        if self.selected_legend_index.is_some() {
            self.renderer.select_legend(self.selected_legend_index);
        }
        debug!(categories = self.model.group_count(), "zoomed line-type series");
        Ok(())
    }

    /// Whether the axis limits moved since the previous check.
    ///
    /// The first check always reports a change. The x axis only counts when
    /// the current x axis has a limit (coordinate charts).
    pub fn is_changed_axis_limit(&mut self) -> bool {
        let before_axes = self.before_axes.replace(self.axes);

        let Some(before) = before_axes else {
            return true;
        };

        let mut changed = is_changed_limit(before.y_axis.limit, self.axes.y_axis.limit);
        if let Some(after_x) = self.axes.x_axis.limit {
            changed = changed
                || before
                    .x_axis
                    .limit
                    .is_none_or(|before_x| is_changed_limit(before_x, after_x));
        }
        changed
    }
}

fn is_changed_limit(before: AxisLimit, after: AxisLimit) -> bool {
    before.min != after.min || before.max != after.max
}
