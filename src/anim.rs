//! Tween state machines, the central scheduler, and the frame gate.
//!
//! DESIGN
//! ======
//! An animation is a [`Tween`] value advanced by [`Scheduler::tick`] once
//! per display frame, instead of a callback that re-requests itself. The DOM
//! layer owns one scheduler, keeps a single animation-frame loop alive while
//! it has work, and writes each [`TweenFrame`] to the element named by its
//! key.
//!
//! Starting a tween under a key that is already animating replaces the old
//! one. There is no cancel.

#[cfg(test)]
#[path = "anim_test.rs"]
mod anim_test;

use crate::easing::Curve;

/// Lifecycle of a single tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenState {
    /// Created but not yet ticked; the first tick fixes the time origin.
    Scheduled,
    /// Waiting out the start delay.
    Delayed { until_ms: f64 },
    /// Interpolating since `start_ms`.
    Running { start_ms: f64 },
    /// Reached `to`; produces no more frames.
    Done,
}

/// Interpolation of one value from `from` to `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub curve: Curve,
    pub state: TweenState,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: f64, curve: Curve) -> Self {
        Self { from, to, duration_ms, delay_ms: 0.0, curve, state: TweenState::Scheduled }
    }

    /// Hold the tween at `from` for `delay_ms` before interpolating.
    #[must_use]
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == TweenState::Done
    }

    /// Advance to `now_ms` and return the value to display, if any.
    ///
    /// Returns `None` while delayed and after completion. The frame that
    /// completes the tween returns exactly `to`.
    pub fn advance(&mut self, now_ms: f64) -> Option<f64> {
        match self.state {
            TweenState::Scheduled => {
                if self.delay_ms > 0.0 {
                    self.state = TweenState::Delayed { until_ms: now_ms + self.delay_ms };
                    return None;
                }
                self.state = TweenState::Running { start_ms: now_ms };
                self.advance(now_ms)
            }
            TweenState::Delayed { until_ms } => {
                if now_ms < until_ms {
                    return None;
                }
                self.state = TweenState::Running { start_ms: now_ms };
                self.advance(now_ms)
            }
            TweenState::Running { start_ms } => {
                let elapsed = (now_ms - start_ms).max(0.0);
                if elapsed >= self.duration_ms {
                    self.state = TweenState::Done;
                    return Some(self.to);
                }
                let progress = self.curve.apply(elapsed / self.duration_ms);
                Some(self.from + (self.to - self.from) * progress)
            }
            TweenState::Done => None,
        }
    }
}

/// One value produced by a scheduler tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenFrame<K> {
    pub key: K,
    pub value: f64,
    /// This is the tween's final frame.
    pub finished: bool,
}

/// Set of active tweens, polled once per frame.
#[derive(Debug)]
pub struct Scheduler<K> {
    active: Vec<(K, Tween)>,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self { active: Vec::new() }
    }
}

impl<K: Clone + PartialEq> Scheduler<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tween, replacing any tween already running under `key`.
    pub fn start(&mut self, key: K, tween: Tween) {
        if let Some(slot) = self.active.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = tween;
        } else {
            self.active.push((key, tween));
        }
    }

    /// Advance every tween to `now_ms`, dropping the ones that finish.
    ///
    /// Frames come out in registration order.
    pub fn tick(&mut self, now_ms: f64) -> Vec<TweenFrame<K>> {
        let mut frames = Vec::new();
        for (key, tween) in &mut self.active {
            if let Some(value) = tween.advance(now_ms) {
                frames.push(TweenFrame { key: key.clone(), value, finished: tween.is_done() });
            }
        }
        self.active.retain(|(_, tween)| !tween.is_done());
        frames
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

/// Pending-frame flag that coalesces bursts of events into one frame.
///
/// The event handler calls [`FrameGate::request`] and schedules a frame only
/// when it returns `true`; the frame callback calls [`FrameGate::complete`]
/// before doing its work.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Mark a frame as wanted. Returns `true` if no frame was already pending.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Clear the pending flag; called from the frame callback.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
