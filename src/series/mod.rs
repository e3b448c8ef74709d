//! Line-type series: positions, value labels and streaming transitions.

mod adding_data;
mod line_type_series;
mod options;
mod series_label;

pub use adding_data::{AnimationStatus, SeriesMotion};
pub use line_type_series::LineTypeSeries;
pub use options::{LineSeriesOptions, SeriesBounds, StackType};
pub use series_label::{css_text_for_line_type, make_series_label_html};
