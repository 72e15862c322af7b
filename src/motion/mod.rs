//! Deterministic motion parameter tables.
//!
//! Nothing here owns a clock. Every animation is a pure function of an
//! elapsed-seconds sample supplied by the host, so scenes stay reproducible
//! and testable. Animations are visual-only and never feed back into
//! interaction state; a state-driven rebuild supersedes them.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseOut,
    /// Under-damped spring normalized to the transition duration; higher
    /// stiffness oscillates faster before settling.
    Spring { stiffness: f64 },
}

impl Easing {
    /// Maps normalized time `t` in `[0, 1]` to progress.
    ///
    /// Spring easing may overshoot 1.0 mid-flight; callers treat `t >= 1`
    /// as settled.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::Spring { stiffness } => {
                let omega = stiffness.max(0.0).sqrt();
                1.0 - (-4.0 * t).exp() * (omega * t).cos()
            }
        }
    }
}

/// One delayed, finite visual transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub delay_s: f64,
    pub duration_s: f64,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub const fn new(delay_s: f64, duration_s: f64, easing: Easing) -> Self {
        Self {
            delay_s,
            duration_s,
            easing,
        }
    }

    #[must_use]
    pub fn delayed_by(mut self, extra_delay_s: f64) -> Self {
        self.delay_s += extra_delay_s;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.delay_s.is_finite() || self.delay_s < 0.0 {
            return Err(ChartError::InvalidData(
                "transition delay must be finite and >= 0".to_owned(),
            ));
        }
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Progress at `elapsed_s` since mount: 0 before the delay, exactly 1
    /// once settled, eased in between.
    #[must_use]
    pub fn progress_at(self, elapsed_s: f64) -> f64 {
        if !elapsed_s.is_finite() || elapsed_s <= self.delay_s {
            return 0.0;
        }
        if elapsed_s >= self.delay_s + self.duration_s {
            return 1.0;
        }
        self.easing.apply((elapsed_s - self.delay_s) / self.duration_s)
    }
}

/// Incremental per-index delay so grouped elements reveal sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub base_delay_s: f64,
    pub step_s: f64,
}

impl Stagger {
    #[must_use]
    pub const fn new(base_delay_s: f64, step_s: f64) -> Self {
        Self {
            base_delay_s,
            step_s,
        }
    }

    #[must_use]
    pub fn delay_for(self, index: usize) -> f64 {
        self.base_delay_s + self.step_s * index as f64
    }
}

/// Sampled fade-and-slide values for one scene element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Fade-and-slide entrance: opacity and offset interpolate from their
/// `from_*` values to rest as the transition progresses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadeSlide {
    pub from_opacity: f64,
    pub from_offset_x: f64,
    pub from_offset_y: f64,
    pub transition: Transition,
}

impl FadeSlide {
    #[must_use]
    pub const fn new(
        from_opacity: f64,
        from_offset_x: f64,
        from_offset_y: f64,
        transition: Transition,
    ) -> Self {
        Self {
            from_opacity,
            from_offset_x,
            from_offset_y,
            transition,
        }
    }

    #[must_use]
    pub fn sample(self, elapsed_s: f64) -> MotionSample {
        let progress = self.transition.progress_at(elapsed_s);
        MotionSample {
            opacity: self.from_opacity + (1.0 - self.from_opacity) * progress,
            offset_x: self.from_offset_x * (1.0 - progress),
            offset_y: self.from_offset_y * (1.0 - progress),
        }
    }
}

/// Infinite constant-speed rotation; never settles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub period_s: f64,
}

impl Spin {
    #[must_use]
    pub const fn new(period_s: f64) -> Self {
        Self { period_s }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.period_s.is_finite() || self.period_s <= 0.0 {
            return Err(ChartError::InvalidData(
                "spin period must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Rotation angle in degrees at `elapsed_s`, wrapped to `[0, 360)`.
    #[must_use]
    pub fn angle_deg_at(self, elapsed_s: f64) -> f64 {
        let elapsed = elapsed_s.max(0.0);
        (elapsed / self.period_s).rem_euclid(1.0) * 360.0
    }
}

/// Infinite breathing scale cycle around 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    pub period_s: f64,
    pub amplitude: f64,
}

impl Pulse {
    #[must_use]
    pub const fn new(period_s: f64, amplitude: f64) -> Self {
        Self {
            period_s,
            amplitude,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.period_s.is_finite() || self.period_s <= 0.0 {
            return Err(ChartError::InvalidData(
                "pulse period must be finite and > 0".to_owned(),
            ));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(ChartError::InvalidData(
                "pulse amplitude must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Scale at `elapsed_s`: rises from 1.0 to `1.0 + amplitude` at the
    /// half-cycle and back, repeating forever.
    #[must_use]
    pub fn scale_at(self, elapsed_s: f64) -> f64 {
        let phase = (elapsed_s.max(0.0) / self.period_s).rem_euclid(1.0);
        let triangle = 1.0 - (2.0 * phase - 1.0).abs();
        1.0 + self.amplitude * triangle
    }
}

/// The chart's complete motion table.
///
/// Values mirror the reference design: spring bar entrances settling in
/// about half a second, 0.2 s staggered chrome reveals, a 20 s icon spin,
/// and a gentle 2 s pulse on the footer total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMotion {
    pub card_entrance: Transition,
    pub bar_entrance: Transition,
    pub hover_emphasis: Transition,
    pub mount_stagger: Stagger,
    pub tooltip_entry: Transition,
    pub tooltip_stagger: Stagger,
    pub icon_spin: Spin,
    pub total_pulse: Pulse,
}

impl Default for ChartMotion {
    fn default() -> Self {
        Self {
            card_entrance: Transition::new(0.0, 0.5, Easing::EaseOut),
            bar_entrance: Transition::new(0.0, 0.5, Easing::Spring { stiffness: 120.0 }),
            hover_emphasis: Transition::new(0.0, 0.2, Easing::Linear),
            mount_stagger: Stagger::new(0.2, 0.2),
            tooltip_entry: Transition::new(0.0, 0.3, Easing::EaseOut),
            tooltip_stagger: Stagger::new(0.0, 0.1),
            icon_spin: Spin::new(20.0),
            total_pulse: Pulse::new(2.0, 0.03),
        }
    }
}

impl ChartMotion {
    pub fn validate(self) -> ChartResult<()> {
        self.card_entrance.validate()?;
        self.bar_entrance.validate()?;
        self.hover_emphasis.validate()?;
        self.tooltip_entry.validate()?;
        self.icon_spin.validate()?;
        self.total_pulse.validate()
    }
}
