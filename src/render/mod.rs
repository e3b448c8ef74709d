mod label_container;
mod null_renderer;
mod series_container;

pub use label_container::{LabelElement, SeriesLabelContainer};
pub use null_renderer::{NullGraphRenderer, RendererCall};
pub use series_container::{ContainerChild, ContainerChildRole, SeriesContainer};

use crate::core::{Bound, Dimension, GroupPositions};
use crate::error::ChartResult;

/// Graph drawing request for a full (re)render of a line-type series.
#[derive(Debug, Clone, Copy)]
pub struct GraphRenderRequest<'a> {
    pub dimension: Dimension,
    pub group_positions: &'a GroupPositions,
    pub zero_top: f64,
}

/// Parameters handed to the renderer when streaming data is appended.
#[derive(Debug, Clone, Copy)]
pub struct AddingDataFrame<'a> {
    pub dimension: Dimension,
    pub tick_size: f64,
    pub group_positions: &'a GroupPositions,
    pub shifting: bool,
    pub zero_top: f64,
}

/// Contract implemented by any graph drawing backend (SVG, canvas, GPU).
///
/// Series geometry is fully materialized before it reaches the backend, so
/// drawing code stays isolated from layout and animation logic.
pub trait GraphRenderer {
    fn render_graph(&mut self, request: &GraphRenderRequest<'_>) -> ChartResult<()>;

    fn animate_for_adding_data(&mut self, frame: &AddingDataFrame<'_>) -> ChartResult<()>;

    /// Resizes the drawing surface width in pixels.
    fn set_size(&mut self, width: f64);

    fn clear(&mut self);

    fn show_graph_without_animation(&mut self) {}

    fn select_legend(&mut self, _legend_index: Option<usize>) {}

    /// Optional overlay line shown by grouped tooltips.
    ///
    /// Backends without the overlay keep the default `None`.
    fn group_tooltip_line(&mut self) -> Option<&mut dyn GroupTooltipLine> {
        None
    }
}

pub trait GroupTooltipLine {
    fn show_group_tooltip_line(&mut self, bound: Bound);
    fn hide_group_tooltip_line(&mut self);
}
