use crate::core::Bound;
use crate::error::ChartResult;
use crate::render::{AddingDataFrame, GraphRenderRequest, GraphRenderer, GroupTooltipLine};

/// Call recorded by `NullGraphRenderer`.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererCall {
    RenderGraph { legend_count: usize, zero_top: f64 },
    AnimateForAddingData { tick_size: f64, shifting: bool, zero_top: f64 },
    SetSize(f64),
    Clear,
    ShowWithoutAnimation,
    SelectLegend(Option<usize>),
    ShowGroupTooltipLine(Bound),
    HideGroupTooltipLine,
}

/// No-op renderer used by tests and headless hosts.
///
/// It validates incoming geometry and records every call so tests can assert
/// on what a real backend would have been asked to draw.
#[derive(Debug, Default)]
pub struct NullGraphRenderer {
    pub calls: Vec<RendererCall>,
    supports_group_tooltip_line: bool,
}

impl NullGraphRenderer {
    /// Renderer exposing the optional group tooltip line overlay.
    #[must_use]
    pub fn with_group_tooltip_line() -> Self {
        Self {
            calls: Vec::new(),
            supports_group_tooltip_line: true,
        }
    }

    #[must_use]
    pub fn last_size(&self) -> Option<f64> {
        self.calls.iter().rev().find_map(|call| match call {
            RendererCall::SetSize(width) => Some(*width),
            _ => None,
        })
    }
}

impl GraphRenderer for NullGraphRenderer {
    fn render_graph(&mut self, request: &GraphRenderRequest<'_>) -> ChartResult<()> {
        request.dimension.validate()?;
        self.calls.push(RendererCall::RenderGraph {
            legend_count: request.group_positions.len(),
            zero_top: request.zero_top,
        });
        Ok(())
    }

    fn animate_for_adding_data(&mut self, frame: &AddingDataFrame<'_>) -> ChartResult<()> {
        frame.dimension.validate()?;
        self.calls.push(RendererCall::AnimateForAddingData {
            tick_size: frame.tick_size,
            shifting: frame.shifting,
            zero_top: frame.zero_top,
        });
        Ok(())
    }

    fn set_size(&mut self, width: f64) {
        self.calls.push(RendererCall::SetSize(width));
    }

    fn clear(&mut self) {
        self.calls.push(RendererCall::Clear);
    }

    fn show_graph_without_animation(&mut self) {
        self.calls.push(RendererCall::ShowWithoutAnimation);
    }

    fn select_legend(&mut self, legend_index: Option<usize>) {
        self.calls.push(RendererCall::SelectLegend(legend_index));
    }

    fn group_tooltip_line(&mut self) -> Option<&mut dyn GroupTooltipLine> {
        if self.supports_group_tooltip_line {
            Some(self)
        } else {
            None
        }
    }
}

impl GroupTooltipLine for NullGraphRenderer {
    fn show_group_tooltip_line(&mut self, bound: Bound) {
        self.calls.push(RendererCall::ShowGroupTooltipLine(bound));
    }

    fn hide_group_tooltip_line(&mut self) {
        self.calls.push(RendererCall::HideGroupTooltipLine);
    }
}
