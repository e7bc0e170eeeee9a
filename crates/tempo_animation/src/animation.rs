//! Timed animation instances
//!
//! An [`Animation`] advances by caller-supplied deltas, runs its elapsed time
//! through an [`Easing`] curve, and hands the eased value to an update hook.
//!
//! ```text
//!            start()                 update() reaches duration
//!   Idle ─────────────▶ Running ───────────────────────────▶ Completed
//!                        │   ▲
//!                 stop() │   │ start()
//!                        ▼   │
//!                        Paused
//! ```
//!
//! `start()` never rewinds. Calling it on a completed animation re-completes
//! on the next update; use [`Animation::reset`] to replay from the beginning.

use std::fmt;

use crate::easing::Easing;
use crate::error::{AnimationError, Result};

/// Callback receiving the eased progress value
pub type UpdateHook = Box<dyn FnMut(f32)>;

/// Where an animation sits in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Not running, nothing elapsed
    Idle,
    /// Advancing on every update
    Running,
    /// Stopped part way through
    Paused,
    /// Elapsed has reached the duration
    Completed,
}

/// A single timed transition driven by an update hook
pub struct Animation {
    /// Duration in seconds
    duration: f32,
    /// Seconds advanced so far, always within `0.0..=duration`
    elapsed: f32,
    easing: Easing,
    hook: UpdateHook,
    running: bool,
}

impl Animation {
    /// Create a stopped animation.
    ///
    /// Fails with [`AnimationError::InvalidDuration`] unless `duration` is
    /// positive and finite.
    pub fn new(duration: f32, easing: Easing, hook: impl FnMut(f32) + 'static) -> Result<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(AnimationError::InvalidDuration(duration));
        }

        Ok(Self {
            duration,
            elapsed: 0.0,
            easing,
            hook: Box::new(hook),
            running: false,
        })
    }

    pub fn start(&mut self) {
        if !self.running {
            tracing::trace!(elapsed = self.elapsed, duration = self.duration, "animation started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::trace!(elapsed = self.elapsed, duration = self.duration, "animation stopped");
        }
        self.running = false;
    }

    /// Rewind to the idle state so a later `start()` plays from the beginning
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the animation by delta time (in seconds)
    ///
    /// Does nothing while stopped. The call that reaches the duration clamps
    /// elapsed, clears the running flag, and still fires the hook with the
    /// curve's value at `1.0`. Negative or non-finite deltas are ignored.
    pub fn update(&mut self, dt: f32) {
        if !self.running {
            return;
        }

        if !(dt.is_finite() && dt >= 0.0) {
            tracing::warn!(dt, "ignoring invalid animation delta");
            return;
        }

        self.elapsed += dt;

        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.running = false;
            tracing::trace!(duration = self.duration, easing = %self.easing, "animation completed");
        }

        let value = self.value();
        (self.hook)(value);
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress, `elapsed / duration`
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    /// Eased value at the current elapsed time
    pub fn value(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn state(&self) -> AnimationState {
        if self.running {
            AnimationState::Running
        } else if self.is_complete() {
            AnimationState::Completed
        } else if self.elapsed > 0.0 {
            AnimationState::Paused
        } else {
            AnimationState::Idle
        }
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("easing", &self.easing)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
