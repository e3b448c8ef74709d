use serde::{Deserialize, Serialize};

use crate::core::SeriesItem;
use crate::error::{ChartError, ChartResult};

/// Items sharing one index: a category in the stored layout, a legend entry
/// once pivoted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub items: Vec<SeriesItem>,
}

impl SeriesGroup {
    #[must_use]
    pub fn new(items: Vec<SeriesItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SeriesItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesItem> {
        self.items.iter()
    }
}

/// Category-major series data.
///
/// `groups[category][legend]`. Every group holds the same number of items so
/// the pivoted (legend-major) view is always rectangular.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SeriesDataModel {
    groups: Vec<SeriesGroup>,
    #[serde(skip)]
    pivot: Vec<SeriesGroup>,
}

impl SeriesDataModel {
    pub fn new(groups: Vec<SeriesGroup>) -> ChartResult<Self> {
        if let Some(first) = groups.first() {
            let width = first.len();
            if let Some(index) = groups.iter().position(|group| group.len() != width) {
                return Err(ChartError::InvalidData(format!(
                    "series group {index} has {} items, expected {width}",
                    groups[index].len()
                )));
            }
        }

        for item in groups.iter().flat_map(SeriesGroup::iter) {
            if !item.ratio.is_finite() {
                return Err(ChartError::InvalidData(
                    "series item ratio must be finite".to_owned(),
                ));
            }
        }

        let pivot = transpose(&groups);
        Ok(Self { groups, pivot })
    }

    /// Builds the model from legend-major rows (`rows[legend][category]`).
    pub fn from_legend_rows(rows: Vec<Vec<SeriesItem>>) -> ChartResult<Self> {
        let legend_groups: Vec<SeriesGroup> = rows.into_iter().map(SeriesGroup::new).collect();
        if let Some(first) = legend_groups.first() {
            let width = first.len();
            if legend_groups.iter().any(|group| group.len() != width) {
                return Err(ChartError::InvalidData(
                    "legend rows must share the same category count".to_owned(),
                ));
            }
        }
        Self::new(transpose(&legend_groups))
    }

    /// Number of categories.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of legend entries.
    #[must_use]
    pub fn legend_count(&self) -> usize {
        self.pivot.len()
    }

    #[must_use]
    pub fn groups(&self) -> &[SeriesGroup] {
        &self.groups
    }

    #[must_use]
    pub fn pivot_groups(&self) -> &[SeriesGroup] {
        &self.pivot
    }

    /// Returns category-major groups, or legend-major groups when `pivot` is set.
    #[must_use]
    pub fn groups_by(&self, pivot: bool) -> &[SeriesGroup] {
        if pivot { &self.pivot } else { &self.groups }
    }

    #[must_use]
    pub fn item(&self, group_index: usize, index: usize) -> Option<&SeriesItem> {
        self.groups.get(group_index)?.get(index)
    }

    #[must_use]
    pub fn first_item_label(&self) -> Option<&str> {
        self.groups
            .first()
            .and_then(|group| group.get(0))
            .map(|item| item.label.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn transpose(groups: &[SeriesGroup]) -> Vec<SeriesGroup> {
    let width = groups.first().map_or(0, SeriesGroup::len);
    (0..width)
        .map(|column| {
            SeriesGroup::new(
                groups
                    .iter()
                    .filter_map(|group| group.get(column).cloned())
                    .collect(),
            )
        })
        .collect()
}
