use serde::{Deserialize, Serialize};

use crate::core::SeriesKey;

/// Serializable snapshot of the transient view state, used by diagnostics
/// tooling and host applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSnapshot {
    pub hovered_series: Option<SeriesKey>,
    pub selected_period: Option<String>,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

/// Transient hover/selection/pointer state owned exclusively by the chart
/// view and mutated only through its event handlers.
///
/// Hover and selection are independent slices: hover churn never disturbs an
/// active selection and vice versa.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    hovered_series: Option<SeriesKey>,
    selected_period: Option<String>,
    pointer_x: f64,
    pointer_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovered_series: None,
            selected_period: None,
            pointer_x: 0.0,
            pointer_y: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn hovered_series(&self) -> Option<SeriesKey> {
        self.hovered_series
    }

    #[must_use]
    pub fn selected_period(&self) -> Option<&str> {
        self.selected_period.as_deref()
    }

    #[must_use]
    pub fn pointer(&self) -> (f64, f64) {
        (self.pointer_x, self.pointer_y)
    }

    pub fn on_series_enter(&mut self, key: SeriesKey) {
        self.hovered_series = Some(key);
    }

    /// Clears hover only when `key` is the series currently hovered; a stale
    /// leave event for another series is a no-op.
    pub fn on_series_leave(&mut self, key: SeriesKey) {
        if self.hovered_series == Some(key) {
            self.hovered_series = None;
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    pub fn on_select(&mut self, label: impl Into<String>) {
        self.selected_period = Some(label.into());
    }

    /// Clears the selection. Returns `false` when nothing was selected.
    pub fn on_reset(&mut self) -> bool {
        self.selected_period.take().is_some()
    }

    /// Cosmetic whole-scene translation derived from the pointer position.
    ///
    /// The offset is `factor` of the raw pointer displacement, clamped to
    /// `max_px` per axis so it can never push content out of view.
    #[must_use]
    pub fn parallax_offset(&self, factor: f64, max_px: f64) -> (f64, f64) {
        let clamp = max_px.abs();
        (
            (self.pointer_x * factor).clamp(-clamp, clamp),
            (self.pointer_y * factor).clamp(-clamp, clamp),
        )
    }

    #[must_use]
    pub fn snapshot(&self) -> InteractionSnapshot {
        InteractionSnapshot {
            hovered_series: self.hovered_series,
            selected_period: self.selected_period.clone(),
            pointer_x: self.pointer_x,
            pointer_y: self.pointer_y,
        }
    }
}
