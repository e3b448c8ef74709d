use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::animation::{Animation, FrameHandle, FrameScheduler};
use crate::core::{AxesData, SeriesDataModel};
use crate::error::ChartResult;
use crate::render::{AddingDataFrame, GraphRenderer};

use super::LineTypeSeries;

/// Per-frame motion applied while streaming data is appended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesMotion {
    /// Translate every container child left and widen the graph surface.
    Shift {
        interval: f64,
        before_left: f64,
        area_width: f64,
    },
    /// Narrow the label container.
    Resize { interval: f64, area_width: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct MovingAnimation {
    pub(super) animation: Animation,
    pub(super) motion: SeriesMotion,
}

/// Outcome of delivering one frame to the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// No animation is in flight.
    Idle,
    /// The handle belongs to a cancelled or replaced animation.
    Stale,
    /// Another frame has been requested.
    Running,
    Completed,
}

impl<G: GraphRenderer, S: FrameScheduler> LineTypeSeries<G, S> {
    /// Applies a streaming update and starts the matching transition.
    ///
    /// Shifting series widen by `tick_size` and scroll left; others keep
    /// their width and squeeze the label layer.
    pub fn animate_for_adding_data(
        &mut self,
        tick_size: f64,
        model: SeriesDataModel,
        axes: AxesData,
        now_ms: f64,
    ) -> ChartResult<()> {
        self.model = model;
        self.axes = axes;

        let shifting = self.options.shifting;
        let mut series_width = self.bounds.series.width;
        if shifting {
            series_width += tick_size;
        }

        self.group_positions = self.make_basic_positions(Some(series_width))?;
        let frame = AddingDataFrame {
            dimension: self.bounds.extended,
            tick_size,
            group_positions: &self.group_positions,
            shifting,
            zero_top: self.zero_top(),
        };
        self.renderer.animate_for_adding_data(&frame)?;
        debug!(tick_size, shifting, series_width, "adding data");

        if shifting {
            self.animate_for_moving(tick_size, now_ms);
        } else {
            self.animate_for_resizing(tick_size, now_ms);
        }
        Ok(())
    }

    pub(super) fn animate_for_moving(&mut self, interval: f64, now_ms: f64) {
        self.hide_first_labels();

        let motion = SeriesMotion::Shift {
            interval,
            before_left: self.series_container.first_child_left(),
            area_width: self.bounds.extended.width,
        };
        self.animate(Some(motion), now_ms);
    }

    pub(super) fn animate_for_resizing(&mut self, interval: f64, now_ms: f64) {
        if self.label_container.is_none() {
            return;
        }

        let motion = (!self.coordinate_type).then_some(SeriesMotion::Resize {
            interval,
            area_width: self.bounds.extended.width,
        });
        self.animate(motion, now_ms);
    }

    fn animate(&mut self, motion: Option<SeriesMotion>, now_ms: f64) {
        if self.is_changed_axis_limit() {
            if let Some(container) = self.label_container.as_mut() {
                container.clear();
            }
        }

        let Some(motion) = motion else {
            return;
        };

        self.cancel_moving_animation();
        let animation = Animation::start(
            &mut self.scheduler,
            now_ms,
            self.options.animation_duration_ms,
            self.options.easing,
        );
        self.moving_animation = Some(MovingAnimation { animation, motion });
    }

    /// Delivers a display frame at `now_ms`.
    pub fn on_animation_frame(&mut self, handle: FrameHandle, now_ms: f64) -> AnimationStatus {
        let Some(mut moving) = self.moving_animation else {
            return AnimationStatus::Idle;
        };
        if moving.animation.handle() != handle {
            return AnimationStatus::Stale;
        }

        let ratio = moving.animation.ratio(now_ms);
        self.apply_motion(moving.motion, ratio);

        if moving.animation.progress(now_ms) >= 1.0 {
            self.moving_animation = None;
            debug!("adding-data animation completed");
            return AnimationStatus::Completed;
        }

        moving.animation.continue_with(&mut self.scheduler);
        self.moving_animation = Some(moving);
        trace!(ratio, "adding-data animation frame");
        AnimationStatus::Running
    }

    fn apply_motion(&mut self, motion: SeriesMotion, ratio: f64) {
        match motion {
            SeriesMotion::Shift {
                interval,
                before_left,
                area_width,
            } => {
                let left = interval * ratio;
                self.series_container.set_children_left(before_left - left);
                self.renderer.set_size(area_width + left);
            }
            SeriesMotion::Resize {
                interval,
                area_width,
            } => {
                if let Some(container) = self.label_container.as_mut() {
                    container.set_width(area_width - interval * ratio);
                }
            }
        }
    }

    /// Stops the in-flight transition, leaving elements where they are.
    pub fn cancel_moving_animation(&mut self) {
        if let Some(moving) = self.moving_animation.take() {
            moving.animation.cancel(&mut self.scheduler);
            debug!("adding-data animation cancelled");
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.moving_animation.is_some()
    }

    #[must_use]
    pub fn current_motion(&self) -> Option<SeriesMotion> {
        self.moving_animation.map(|moving| moving.motion)
    }

    /// Label element indices that scroll out first: the leading end label of
    /// every legend row, each with its range start label.
    #[must_use]
    pub fn pick_first_label_elements(&self) -> SmallVec<[usize; 8]> {
        let mut picked = SmallVec::new();
        let Some(container) = self.label_container.as_ref() else {
            return picked;
        };

        let item_count = self.model.group_count().saturating_sub(1);
        if item_count == 0 {
            return picked;
        }

        let elements = container.elements();
        let end_labels = elements
            .iter()
            .enumerate()
            .filter(|(_, element)| !element.is_range)
            .map(|(position, _)| position);

        for (k, position) in end_labels.enumerate() {
            if (k + 1) % item_count != 1 {
                continue;
            }
            picked.push(position);
            let next = position + 1;
            if elements.get(next).is_some_and(|element| element.is_range) {
                picked.push(next);
            }
        }
        picked
    }

    pub(super) fn hide_first_labels(&mut self) {
        let picked = self.pick_first_label_elements();
        if let Some(container) = self.label_container.as_mut() {
            container.remove_indices(&picked);
        }
    }
}
