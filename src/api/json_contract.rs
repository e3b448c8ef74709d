use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::tooltip::{ShowTooltipParams, TooltipData};

use super::ChartConfig;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const TOOLTIP_DATA_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}

/// Snapshot of prepared tooltip data, keyed by chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipDataJsonContractV1 {
    pub schema_version: u32,
    pub data: TooltipData,
}

impl ChartConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts both a bare config and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<ChartConfig>(input) {
            config.validate()?;
            return Ok(config);
        }
        let payload: ChartConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        payload.config.validate()?;
        Ok(payload.config)
    }
}

pub fn tooltip_data_to_json_contract_v1_pretty(data: &TooltipData) -> ChartResult<String> {
    let payload = TooltipDataJsonContractV1 {
        schema_version: TOOLTIP_DATA_JSON_SCHEMA_V1,
        data: data.clone(),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        ChartError::InvalidData(format!("failed to serialize tooltip data contract v1: {e}"))
    })
}

impl ShowTooltipParams {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize tooltip params: {e}"))
        })
    }
}
