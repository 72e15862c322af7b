use tracing::{debug, trace, warn};

use crate::core::SeriesKey;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::ChartView;

/// Keys that activate a focused bar, mirroring click selection for keyboard
/// users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
}

impl<R: Renderer> ChartView<R> {
    /// Pointer entered a bar belonging to `key`.
    pub fn pointer_enter_series(&mut self, key: SeriesKey) {
        trace!(?key, "series hover enter");
        self.interaction.on_series_enter(key);
    }

    /// Pointer left a bar belonging to `key`.
    ///
    /// Ignored unless `key` is the currently hovered series, so a stale
    /// leave arriving after the next enter cannot clear fresh hover state.
    pub fn pointer_leave_series(&mut self, key: SeriesKey) {
        trace!(?key, "series hover leave");
        self.interaction.on_series_leave(key);
    }

    /// Pointer moved over the chart; drives the parallax shift and tooltip
    /// category resolution.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }
        self.interaction.on_pointer_move(x, y);
        Ok(())
    }

    /// Click anywhere on the view. Selects the period whose band contains
    /// the click; clicks that resolve to no category leave state unchanged.
    ///
    /// Returns the newly selected label, or `None` when nothing resolved.
    pub fn click_at(&mut self, x: f64, y: f64) -> ChartResult<Option<String>> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "click coordinates must be finite".to_owned(),
            ));
        }
        if self.dataset.is_empty() {
            return Ok(None);
        }

        let resolved = self
            .plot
            .contains(x, y)
            .then(|| self.band_scale().ok()?.category_at_pixel(x))
            .flatten()
            .and_then(|index| self.dataset.label_at(index))
            .map(str::to_owned);

        match resolved {
            Some(label) => {
                debug!(%label, "click selected period");
                self.interaction.on_select(label.clone());
                Ok(Some(label))
            }
            None => {
                warn!(x, y, "click resolved to no category");
                Ok(None)
            }
        }
    }

    /// Selects a period by label; the keyboard/programmatic counterpart of
    /// `click_at`.
    pub fn select_period(&mut self, label: &str) -> ChartResult<()> {
        if !self.dataset.contains_label(label) {
            return Err(ChartError::InvalidData(format!(
                "unknown period label `{label}`"
            )));
        }
        debug!(%label, "period selected");
        self.interaction.on_select(label);
        Ok(())
    }

    /// Enter/Space on a focused bar selects that bar's period, matching
    /// click selection.
    pub fn key_activate(&mut self, key: ActivationKey, period_label: &str) -> ChartResult<()> {
        trace!(?key, %period_label, "keyboard activation");
        self.select_period(period_label)
    }

    /// Clears the active selection. Returns `false` when none was active.
    pub fn reset_selection(&mut self) -> bool {
        let cleared = self.interaction.on_reset();
        if cleared {
            debug!("selection reset");
        }
        cleared
    }
}
