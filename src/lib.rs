//! chart-series-kit: geometry, streaming animation and tooltip content for
//! line-type chart series.
//!
//! The crate converts normalized series ratios into pixel positions, drives
//! the shift/resize transitions used when data streams in, and assembles
//! tooltip HTML for pie, boxplot, coordinate and default chart schemas.
//! Rendering surfaces, frame scheduling and data processing stay behind
//! traits so hosts can plug in their own UI layer.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod series;
pub mod telemetry;
pub mod tooltip;

pub use api::ChartConfig;
pub use error::{ChartError, ChartResult};
pub use series::LineTypeSeries;
pub use tooltip::NormalTooltip;
