//! Entrance animation variants and timed transitions
//!
//! `animation_style` is the pure mapping from visibility to visual attributes.
//! `Transition` adds the time dimension: a fixed-length ease-out between the
//! hidden and resting states, offset by a per-instance delay.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::animation::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    FadeIn,
    ScaleUp,
    SlideUp,
    RotateIn,
}

impl Animation {
    #[cfg(test)]
    pub const ALL: [Animation; 7] = [
        Animation::FadeUp,
        Animation::FadeLeft,
        Animation::FadeRight,
        Animation::FadeIn,
        Animation::ScaleUp,
        Animation::SlideUp,
        Animation::RotateIn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Animation::FadeUp => "fade-up",
            Animation::FadeLeft => "fade-left",
            Animation::FadeRight => "fade-right",
            Animation::FadeIn => "fade-in",
            Animation::ScaleUp => "scale-up",
            Animation::SlideUp => "slide-up",
            Animation::RotateIn => "rotate-in",
        }
    }

    /// Where the region sits before it has been revealed
    pub fn hidden_style(&self) -> AnimationStyle {
        let hidden = AnimationStyle {
            opacity: 0.0,
            ..AnimationStyle::RESTING
        };
        match self {
            Animation::FadeUp => AnimationStyle {
                offset: [0.0, FADE_UP_OFFSET],
                ..hidden
            },
            Animation::FadeLeft => AnimationStyle {
                offset: [FADE_SIDE_OFFSET, 0.0],
                ..hidden
            },
            Animation::FadeRight => AnimationStyle {
                offset: [-FADE_SIDE_OFFSET, 0.0],
                ..hidden
            },
            Animation::FadeIn => hidden,
            Animation::ScaleUp => AnimationStyle {
                scale: HIDDEN_SCALE,
                ..hidden
            },
            Animation::SlideUp => AnimationStyle {
                offset: [0.0, SLIDE_UP_OFFSET],
                ..hidden
            },
            Animation::RotateIn => AnimationStyle {
                scale: HIDDEN_SCALE,
                rotation_deg: HIDDEN_ROTATION_DEG,
                ..hidden
            },
        }
    }

    /// Style at `progress` between hidden (0.0) and resting (1.0)
    pub fn style_at(&self, progress: f32) -> AnimationStyle {
        self.hidden_style().lerp(&AnimationStyle::RESTING, progress.clamp(0.0, 1.0))
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual attributes applied to an animated region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStyle {
    pub opacity: f32,
    /// Translation in pixels (x, y)
    pub offset: [f32; 2],
    pub scale: f32,
    pub rotation_deg: f32,
}

impl AnimationStyle {
    pub const RESTING: AnimationStyle = AnimationStyle {
        opacity: 1.0,
        offset: [0.0, 0.0],
        scale: 1.0,
        rotation_deg: 0.0,
    };

    pub fn lerp(&self, to: &AnimationStyle, t: f32) -> AnimationStyle {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        AnimationStyle {
            opacity: mix(self.opacity, to.opacity),
            offset: [mix(self.offset[0], to.offset[0]), mix(self.offset[1], to.offset[1])],
            scale: mix(self.scale, to.scale),
            rotation_deg: mix(self.rotation_deg, to.rotation_deg),
        }
    }

    pub fn is_resting(&self) -> bool {
        *self == Self::RESTING
    }
}

/// Settled style for a visibility state, ignoring transition timing
pub fn animation_style(is_visible: bool, animation: Animation) -> AnimationStyle {
    if is_visible {
        AnimationStyle::RESTING
    } else {
        animation.hidden_style()
    }
}

/// Cubic ease-out
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Timing parameters shared by every transition on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub duration_secs: f64,
    /// Minimum spacing between visibility flips; 0 disables debouncing
    pub replay_cooldown_secs: f64,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration_secs: DURATION_MS as f64 / 1000.0,
            replay_cooldown_secs: 0.0,
        }
    }
}

/// Progress of one region between hidden (0.0) and resting (1.0)
///
/// Reversing mid-flight starts from the current value, the way a CSS
/// transition does. Times are seconds on any monotonic clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    target: bool,
    from: f32,
    starts_at: f64,
    delay_secs: f64,
    timing: TransitionTiming,
    last_flip: Option<f64>,
    pending: Option<bool>,
}

impl Transition {
    /// A transition already settled at `visible`
    pub fn settled(visible: bool, delay_ms: u64, timing: TransitionTiming) -> Self {
        Self {
            target: visible,
            from: if visible { 1.0 } else { 0.0 },
            starts_at: f64::NEG_INFINITY,
            delay_secs: delay_ms as f64 / 1000.0,
            timing,
            last_flip: None,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> bool {
        self.target
    }

    /// Point the transition at a new visibility state
    pub fn set_target(&mut self, visible: bool, now: f64) {
        if visible == self.target {
            // A bounce back inside the cooldown cancels whatever was queued
            self.pending = None;
            return;
        }

        let cooldown = self.timing.replay_cooldown_secs;
        if cooldown > 0.0 {
            if let Some(last) = self.last_flip {
                if now - last < cooldown {
                    self.pending = Some(visible);
                    return;
                }
            }
        }
        self.flip(visible, now);
    }

    /// Apply a debounced flip once its cooldown has passed
    pub fn tick(&mut self, now: f64) {
        if let (Some(visible), Some(last)) = (self.pending, self.last_flip) {
            if now - last >= self.timing.replay_cooldown_secs {
                self.pending = None;
                self.flip(visible, now);
            }
        }
    }

    fn flip(&mut self, visible: bool, now: f64) {
        self.from = self.progress(now);
        self.target = visible;
        self.starts_at = now + self.delay_secs;
        self.last_flip = Some(now);
    }

    pub fn progress(&self, now: f64) -> f32 {
        let to = if self.target { 1.0 } else { 0.0 };
        if now < self.starts_at {
            return self.from;
        }
        let duration = self.timing.duration_secs;
        let t = if duration <= 0.0 {
            1.0
        } else {
            ((now - self.starts_at) / duration) as f32
        };
        self.from + (to - self.from) * ease_out(t)
    }

    /// True while the value is still moving or waiting on a delay/cooldown
    pub fn is_animating(&self, now: f64) -> bool {
        self.pending.is_some() || now < self.starts_at + self.timing.duration_secs
    }

    pub fn style(&self, animation: Animation, now: f64) -> AnimationStyle {
        if self.is_animating(now) {
            animation.style_at(self.progress(now))
        } else {
            animation_style(self.target, animation)
        }
    }
}
