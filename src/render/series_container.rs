use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerChildRole {
    Graph,
    Labels,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerChild {
    pub role: ContainerChildRole,
    /// Horizontal CSS offset in pixels; `None` until first moved.
    pub left_px: Option<f64>,
}

/// In-memory model of the element holding the graph surface and label layer.
///
/// Shifting animations translate every child together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesContainer {
    children: Vec<ContainerChild>,
}

impl SeriesContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_child(&mut self, role: ContainerChildRole) {
        self.children.push(ContainerChild {
            role,
            left_px: None,
        });
    }

    #[must_use]
    pub fn children(&self) -> &[ContainerChild] {
        &self.children
    }

    #[must_use]
    pub fn first_child_left(&self) -> f64 {
        self.children
            .first()
            .and_then(|child| child.left_px)
            .filter(|left| left.is_finite())
            .unwrap_or(0.0)
    }

    pub fn set_children_left(&mut self, left_px: f64) {
        for child in &mut self.children {
            child.left_px = Some(left_px);
        }
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
