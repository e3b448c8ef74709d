//! Frame-driven animation primitives.
//!
//! Animations never read a clock themselves: hosts pass the frame timestamp
//! (milliseconds) they received from their refresh callback. This keeps every
//! transition deterministic under test.

use serde::{Deserialize, Serialize};

pub const ADDING_DATA_ANIMATION_DURATION_MS: f64 = 300.0;

/// Identifier of a requested display frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(pub u64);

/// Cooperative scheduler keyed to the display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler for headless hosts and tests.
///
/// Frames are only recorded; the host drives them by calling the animation
/// step with a timestamp of its choosing.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    #[must_use]
    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }

    /// Marks a pending frame as delivered.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|pending| *pending != handle);
        self.cancelled.push(handle);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseOutQuad,
}

impl Easing {
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => t * (2.0 - t),
        }
    }
}

/// Time-based animation whose next frame is pending in a scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    handle: FrameHandle,
    started_at_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Animation {
    pub fn start<S: FrameScheduler>(
        scheduler: &mut S,
        now_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Self {
        Self {
            handle: scheduler.request_frame(),
            started_at_ms: now_ms,
            duration_ms,
            easing,
        }
    }

    #[must_use]
    pub fn handle(&self) -> FrameHandle {
        self.handle
    }

    /// Raw time progress in `[0, 1]`.
    ///
    /// A non-positive duration or a non-finite timestamp completes the
    /// animation.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let progress = (now_ms - self.started_at_ms) / self.duration_ms;
        if progress.is_nan() {
            return 1.0;
        }
        progress.clamp(0.0, 1.0)
    }

    /// Eased ratio handed to motion callbacks.
    #[must_use]
    pub fn ratio(&self, now_ms: f64) -> f64 {
        self.easing.apply(self.progress(now_ms))
    }

    /// Requests the next frame after a non-final step.
    pub fn continue_with<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        self.handle = scheduler.request_frame();
    }

    pub fn cancel<S: FrameScheduler>(self, scheduler: &mut S) {
        scheduler.cancel_frame(self.handle);
    }
}
