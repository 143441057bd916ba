#![forbid(unsafe_code)]

//! Present and dismiss transitions.
//!
//! A dialog moves through a fixed phase sequence: presenting runs an
//! overshoot animation and then a short settle back to identity; dismissing
//! runs a single fade-out (alerts) or slide-out (sheets). The controller
//! emits [`AnimationSpec`]s describing each leg; the host drives them with
//! its own clock, either by sampling an [`ActiveAnimation`] per frame or by
//! handing the spec to a platform animator, and reports completion back
//! through [`TransitionController::complete_phase`].
//!
//! # Invariants
//!
//! - Phases only advance along `Idle -> PresentingOvershoot ->
//!   PresentingSettle -> Presented -> Dismissing -> Dismissed`; `Dismissed`
//!   is terminal.
//! - A dismiss requested mid-presentation is queued (at most one) and fires
//!   as soon as the dialog reaches `Presented`.
//! - A `finished: false` completion is recorded and surfaced through
//!   [`TransitionController::finished_cleanly`], never swallowed.

use scrim_core::Rect;
use tracing::debug;
use web_time::{Duration, Instant};

use crate::DialogVariant;

/// Duration of the first presentation leg (hidden to overshoot).
pub const PRESENT_OVERSHOOT_DURATION: Duration = Duration::from_millis(250);
/// Duration of the settle leg (overshoot back to identity).
pub const PRESENT_SETTLE_DURATION: Duration = Duration::from_millis(200);
/// Duration of the dismiss animation.
pub const DISMISS_DURATION: Duration = Duration::from_millis(250);

/// A snapshot of the animatable properties of the overlay and the panel.
///
/// `scale` and `translate_y` apply to the panel around its center; the host
/// composes them onto the laid-out frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub overlay_alpha: f32,
    pub dialog_alpha: f32,
    pub scale: f32,
    pub translate_y: f32,
}

impl TransitionFrame {
    /// The resting state of a presented dialog.
    #[must_use]
    pub const fn resting() -> Self {
        Self {
            overlay_alpha: 1.0,
            dialog_alpha: 1.0,
            scale: 1.0,
            translate_y: 0.0,
        }
    }

    /// Linear blend between two frames; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        // Exact at both endpoints.
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Self {
            overlay_alpha: mix(self.overlay_alpha, to.overlay_alpha),
            dialog_alpha: mix(self.dialog_alpha, to.dialog_alpha),
            scale: mix(self.scale, to.scale),
            translate_y: mix(self.translate_y, to.translate_y),
        }
    }
}

/// One leg of a transition: endpoints and a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub from: TransitionFrame,
    pub to: TransitionFrame,
}

impl AnimationSpec {
    /// Eased frame at normalized progress `t`.
    #[must_use]
    pub fn sample(&self, t: f32) -> TransitionFrame {
        let t = t.clamp(0.0, 1.0);
        // Smoothstep stands in for the platform ease-in-out curve.
        let eased = t * t * (3.0 - 2.0 * t);
        self.from.lerp(self.to, eased)
    }
}

/// An [`AnimationSpec`] bound to a start instant, for hosts that sample
/// per frame instead of delegating to a platform animator.
#[derive(Debug, Clone, Copy)]
pub struct ActiveAnimation {
    spec: AnimationSpec,
    started: Instant,
}

impl ActiveAnimation {
    #[must_use]
    pub fn new(spec: AnimationSpec, now: Instant) -> Self {
        Self { spec, started: now }
    }

    #[must_use]
    pub const fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    /// Normalized progress at `now`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn frame_at(&self, now: Instant) -> TransitionFrame {
        self.spec.sample(self.progress(now))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Lifecycle phase of a dialog transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    Idle,
    PresentingOvershoot,
    PresentingSettle,
    Presented,
    Dismissing,
    Dismissed,
}

/// What a completed phase leads to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseOutcome {
    /// Another leg to run; happens after the overshoot leg, and after the
    /// settle leg when a dismiss was queued mid-presentation.
    Next(AnimationSpec),
    /// The transition reached a resting phase.
    Settled { finished: bool },
}

/// Drives the present/dismiss phase machine for one dialog.
#[derive(Debug)]
pub struct TransitionController {
    variant: DialogVariant,
    phase: TransitionPhase,
    finished_cleanly: bool,
    pending_dismiss: bool,
}

impl TransitionController {
    #[must_use]
    pub const fn new(variant: DialogVariant) -> Self {
        Self {
            variant,
            phase: TransitionPhase::Idle,
            finished_cleanly: true,
            pending_dismiss: false,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// False once any phase completed with `finished: false`.
    #[must_use]
    pub const fn finished_cleanly(&self) -> bool {
        self.finished_cleanly
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.phase, TransitionPhase::Dismissed)
    }

    #[must_use]
    pub const fn has_pending_dismiss(&self) -> bool {
        self.pending_dismiss
    }

    /// Start presenting. Returns the overshoot leg, or `None` when the
    /// dialog is not idle.
    pub fn begin_present(&mut self, frame: Rect) -> Option<AnimationSpec> {
        if self.phase != TransitionPhase::Idle {
            return None;
        }
        self.phase = TransitionPhase::PresentingOvershoot;
        debug!(variant = ?self.variant, "presenting");
        Some(AnimationSpec {
            duration: PRESENT_OVERSHOOT_DURATION,
            from: self.hidden_frame(frame),
            to: self.overshoot_frame(frame),
        })
    }

    /// Start dismissing. From `Presented` this returns the dismiss leg;
    /// mid-presentation it queues the dismiss instead and returns `None`,
    /// as does any repeated or out-of-phase call.
    pub fn begin_dismiss(&mut self, frame: Rect) -> Option<AnimationSpec> {
        match self.phase {
            TransitionPhase::Presented => {
                self.phase = TransitionPhase::Dismissing;
                debug!(variant = ?self.variant, "dismissing");
                Some(self.dismiss_spec(frame))
            }
            TransitionPhase::PresentingOvershoot | TransitionPhase::PresentingSettle => {
                if !self.pending_dismiss {
                    self.pending_dismiss = true;
                    debug!(variant = ?self.variant, "dismiss queued until presented");
                }
                None
            }
            _ => None,
        }
    }

    /// Record that the current phase's animation ended.
    ///
    /// Returns the next leg to run, a settled notification, or `None` when
    /// no transition is in flight.
    pub fn complete_phase(&mut self, finished: bool, frame: Rect) -> Option<PhaseOutcome> {
        if !finished {
            self.finished_cleanly = false;
            debug!(variant = ?self.variant, phase = ?self.phase, "phase ended unfinished");
        }
        match self.phase {
            TransitionPhase::PresentingOvershoot => {
                self.phase = TransitionPhase::PresentingSettle;
                Some(PhaseOutcome::Next(AnimationSpec {
                    duration: PRESENT_SETTLE_DURATION,
                    from: self.overshoot_frame(frame),
                    to: TransitionFrame::resting(),
                }))
            }
            TransitionPhase::PresentingSettle => {
                self.phase = TransitionPhase::Presented;
                if self.pending_dismiss {
                    self.pending_dismiss = false;
                    self.phase = TransitionPhase::Dismissing;
                    debug!(variant = ?self.variant, "queued dismiss firing");
                    Some(PhaseOutcome::Next(self.dismiss_spec(frame)))
                } else {
                    Some(PhaseOutcome::Settled {
                        finished: self.finished_cleanly,
                    })
                }
            }
            TransitionPhase::Dismissing => {
                self.phase = TransitionPhase::Dismissed;
                debug!(variant = ?self.variant, clean = self.finished_cleanly, "dismissed");
                Some(PhaseOutcome::Settled {
                    finished: self.finished_cleanly,
                })
            }
            _ => None,
        }
    }

    fn hidden_frame(&self, frame: Rect) -> TransitionFrame {
        match self.variant {
            DialogVariant::Alert => TransitionFrame {
                overlay_alpha: 0.0,
                dialog_alpha: 0.0,
                scale: 0.5,
                translate_y: 0.0,
            },
            DialogVariant::ActionSheet => TransitionFrame {
                overlay_alpha: 0.0,
                dialog_alpha: 1.0,
                scale: 1.0,
                translate_y: frame.height,
            },
        }
    }

    fn overshoot_frame(&self, frame: Rect) -> TransitionFrame {
        match self.variant {
            DialogVariant::Alert => TransitionFrame {
                scale: 1.05,
                ..TransitionFrame::resting()
            },
            DialogVariant::ActionSheet => TransitionFrame {
                // Taller panels bounce further; a 480pt panel overshoots 20pt.
                translate_y: -(frame.height / 480.0 * 10.0 + 10.0),
                ..TransitionFrame::resting()
            },
        }
    }

    fn dismiss_spec(&self, frame: Rect) -> AnimationSpec {
        let to = match self.variant {
            DialogVariant::Alert => TransitionFrame {
                overlay_alpha: 0.0,
                dialog_alpha: 0.0,
                scale: 0.9,
                translate_y: 0.0,
            },
            DialogVariant::ActionSheet => TransitionFrame {
                overlay_alpha: 0.0,
                dialog_alpha: 1.0,
                scale: 1.0,
                translate_y: frame.height,
            },
        };
        AnimationSpec {
            duration: DISMISS_DURATION,
            from: TransitionFrame::resting(),
            to,
        }
    }
}
