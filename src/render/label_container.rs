use serde::{Deserialize, Serialize};

/// One value label rendered into the series label container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelElement {
    pub group_index: usize,
    pub index: usize,
    /// Start label of a range item.
    pub is_range: bool,
    pub html: String,
}

/// In-memory model of the series label layer.
///
/// Elements keep render order: legend rows one after another, each range
/// start label directly after its end label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesLabelContainer {
    elements: Vec<LabelElement>,
    width_px: Option<f64>,
}

impl SeriesLabelContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn elements(&self) -> &[LabelElement] {
        &self.elements
    }

    pub fn set_elements(&mut self, elements: Vec<LabelElement>) {
        self.elements = elements;
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Removes the elements at `indices`; out-of-range indices are ignored.
    pub fn remove_indices(&mut self, indices: &[usize]) {
        let mut position = 0;
        self.elements.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
    }

    #[must_use]
    pub fn inner_html(&self) -> String {
        self.elements
            .iter()
            .map(|element| element.html.as_str())
            .collect()
    }

    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.width_px
    }

    pub fn set_width(&mut self, width_px: f64) {
        self.width_px = Some(width_px);
    }
}
