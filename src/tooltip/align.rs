use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Tooltip placement relative to the hovered item, written as
/// `"<horizontal> <vertical>"` (for example `"center top"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TooltipAlign {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl TooltipAlign {
    /// Default for vertical charts (columns, lines).
    pub const CENTER_TOP: Self = Self {
        horizontal: HorizontalAlign::Center,
        vertical: VerticalAlign::Top,
    };

    /// Default for horizontal charts (bars).
    pub const RIGHT_MIDDLE: Self = Self {
        horizontal: HorizontalAlign::Right,
        vertical: VerticalAlign::Middle,
    };

    #[must_use]
    pub fn default_for(is_vertical: bool) -> Self {
        if is_vertical {
            Self::CENTER_TOP
        } else {
            Self::RIGHT_MIDDLE
        }
    }
}

impl fmt::Display for TooltipAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let horizontal = match self.horizontal {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        };
        let vertical = match self.vertical {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        };
        write!(f, "{horizontal} {vertical}")
    }
}

impl FromStr for TooltipAlign {
    type Err = ChartError;

    /// Words may come in any order; a missing axis falls back to `center`
    /// or `top`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut horizontal = None;
        let mut vertical = None;

        for word in value.split_whitespace() {
            match word.to_ascii_lowercase().as_str() {
                "left" => horizontal = Some(HorizontalAlign::Left),
                "center" => horizontal = Some(HorizontalAlign::Center),
                "right" => horizontal = Some(HorizontalAlign::Right),
                "top" => vertical = Some(VerticalAlign::Top),
                "middle" => vertical = Some(VerticalAlign::Middle),
                "bottom" => vertical = Some(VerticalAlign::Bottom),
                other => {
                    return Err(ChartError::InvalidData(format!(
                        "unknown tooltip align word `{other}`"
                    )));
                }
            }
        }

        if horizontal.is_none() && vertical.is_none() {
            return Err(ChartError::InvalidData(
                "tooltip align must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            horizontal: horizontal.unwrap_or(HorizontalAlign::Center),
            vertical: vertical.unwrap_or(VerticalAlign::Top),
        })
    }
}

impl TryFrom<String> for TooltipAlign {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TooltipAlign> for String {
    fn from(value: TooltipAlign) -> Self {
        value.to_string()
    }
}
