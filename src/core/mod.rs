pub mod area_series;
pub mod label_layout;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod series_data_model;
pub mod series_item;
pub mod types;

pub use area_series::{AreaGeometry, AreaVertex, project_area_geometry};
pub use label_layout::{
    EstimatedLabelMeasurer, LabelMeasurer, LabelPlacement, LabelPosition, LabelTheme,
    calculate_label_position_top, make_label_position,
};
pub use line_series::{
    GroupPositions, PositionMode, make_basic_positions, make_positions_for_coordinate_type,
    make_positions_for_default_type,
};
pub use primitives::{SERIES_EXPAND_SIZE, SERIES_LABEL_PADDING};
pub use scale::{
    RatioScale, ZeroPointDistance, limit_distance_from_zero_point, zero_top_for_adding_data,
};
pub use series_data_model::{SeriesDataModel, SeriesGroup};
pub use series_item::{
    BoxplotLabels, Outlier, RatioMap, SeriesItem, SeriesItemDetail, TooltipValueMap,
};
pub use types::{AxesData, AxisLimit, Bound, Dimension, Position, XAxisData, YAxisData};
