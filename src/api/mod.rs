//! Host-facing configuration and JSON contracts.

mod chart_config;
mod json_contract;

pub use chart_config::{ChartConfig, TooltipOptions};
pub use json_contract::{
    CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1, TOOLTIP_DATA_JSON_SCHEMA_V1,
    TooltipDataJsonContractV1, tooltip_data_to_json_contract_v1_pretty,
};
