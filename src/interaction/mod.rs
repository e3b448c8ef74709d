use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::GroupPositions;
use crate::tooltip::TooltipIndexes;

/// Change produced by pointer or legend input.
///
/// Hosts only redraw the overlay when an event is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionEvent {
    TooltipShown(TooltipIndexes),
    TooltipHidden,
    LegendSelected(Option<usize>),
}

/// Public hover state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub hovered: Option<TooltipIndexes>,
}

/// Pointer and legend state driving the single-item tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipInteraction {
    hover: HoverState,
    selected_legend: Option<usize>,
}

impl TooltipInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn selected_legend(self) -> Option<usize> {
        self.selected_legend
    }

    /// Resolves the item nearest to the pointer.
    ///
    /// Returns an event only when the hovered item changed.
    pub fn on_pointer_move(
        &mut self,
        x: f64,
        y: f64,
        positions: &GroupPositions,
    ) -> Option<InteractionEvent> {
        self.hover.x = x;
        self.hover.y = y;

        let Some(indexes) = nearest_item(positions, x, y, self.selected_legend) else {
            return self.on_pointer_leave();
        };
        if self.hover.visible && self.hover.hovered == Some(indexes) {
            return None;
        }

        self.hover.visible = true;
        self.hover.hovered = Some(indexes);
        trace!(
            group_index = indexes.group_index,
            index = indexes.index,
            "tooltip target changed"
        );
        Some(InteractionEvent::TooltipShown(indexes))
    }

    pub fn on_pointer_leave(&mut self) -> Option<InteractionEvent> {
        if !self.hover.visible {
            return None;
        }
        self.hover.visible = false;
        self.hover.hovered = None;
        Some(InteractionEvent::TooltipHidden)
    }

    /// Clicking the selected legend again clears the selection.
    pub fn on_legend_click(&mut self, legend_index: usize) -> InteractionEvent {
        self.selected_legend = if self.selected_legend == Some(legend_index) {
            None
        } else {
            Some(legend_index)
        };
        InteractionEvent::LegendSelected(self.selected_legend)
    }
}

/// Nearest item by horizontal distance, then vertical distance.
///
/// Positions are indexed `[legend][category]`; the returned indexes address
/// tooltip data as `group_index = category`, `index = legend`. Ties resolve
/// to the lower category, then the lower legend. With a selected legend only
/// that row is considered.
#[must_use]
pub fn nearest_item(
    positions: &GroupPositions,
    x: f64,
    y: f64,
    selected_legend: Option<usize>,
) -> Option<TooltipIndexes> {
    let mut best: SmallVec<[(OrderedFloat<f64>, OrderedFloat<f64>, usize, usize); 1]> =
        SmallVec::new();

    for (legend_index, row) in positions.iter().enumerate() {
        if selected_legend.is_some_and(|selected| selected != legend_index) {
            continue;
        }
        for (category_index, position) in row.iter().enumerate() {
            if !position.left.is_finite() || !position.top.is_finite() {
                continue;
            }
            let candidate = (
                OrderedFloat((position.left - x).abs()),
                OrderedFloat((position.top - y).abs()),
                category_index,
                legend_index,
            );
            match best.first_mut() {
                Some(current) if candidate < *current => *current = candidate,
                Some(_) => {}
                None => best.push(candidate),
            }
        }
    }

    best.first()
        .map(|&(_, _, group_index, index)| TooltipIndexes::new(group_index, index))
}
