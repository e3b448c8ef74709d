//! Single-item tooltip content.
//!
//! Tooltip data is prepared once per data update (`update_tooltip_data`) and
//! rendered on hover (`make_single_tooltip_html`). Showing, hiding and
//! positioning the overlay element is left to the host.

mod align;
mod chart_type;
mod data_source;
mod datum;
mod normal_tooltip;
pub mod template;

pub use align::{HorizontalAlign, TooltipAlign, VerticalAlign};
pub use chart_type::ChartType;
pub use data_source::{LegendItem, LegendLabels, SeriesDataSet, TooltipDataSource};
pub use datum::{LABEL_PREFIX, LabelFormatterFn, TooltipDatum, make_tooltip_datum};
pub use normal_tooltip::{
    COORDINATE_VALUE_TYPES, NormalTooltip, ShowTooltipParams, TooltipData, TooltipIndexes,
    TooltipTemplateFn,
};
pub use template::TooltipItem;
