use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::types::PlotArea;
use crate::error::{ChartError, ChartResult};

/// Horizontal slot for one bar inside a category band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSlot {
    pub x_left: f64,
    pub width: f64,
}

impl BarSlot {
    #[must_use]
    pub fn center(self) -> f64 {
        self.x_left + self.width * 0.5
    }
}

/// Splits a plot area into equal-width category bands and grouped per-series
/// bar slots, and resolves pointer positions back to category indexes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBandScale {
    left: f64,
    width: f64,
    category_count: usize,
    group_padding_ratio: f64,
    slot_gap_px: f64,
}

impl CategoryBandScale {
    pub fn new(
        category_count: usize,
        plot: PlotArea,
        group_padding_ratio: f64,
        slot_gap_px: f64,
    ) -> ChartResult<Self> {
        if category_count == 0 {
            return Err(ChartError::InvalidData(
                "band scale requires at least one category".to_owned(),
            ));
        }
        if !plot.is_valid() {
            return Err(ChartError::InvalidData(
                "plot area must have finite positive size".to_owned(),
            ));
        }
        if !group_padding_ratio.is_finite() || !(0.0..1.0).contains(&group_padding_ratio) {
            return Err(ChartError::InvalidData(
                "group padding ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !slot_gap_px.is_finite() || slot_gap_px < 0.0 {
            return Err(ChartError::InvalidData(
                "slot gap must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            left: plot.left,
            width: plot.width,
            category_count,
            group_padding_ratio,
            slot_gap_px,
        })
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.category_count
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.width / self.category_count as f64
    }

    pub fn band_left(&self, index: usize) -> ChartResult<f64> {
        if index >= self.category_count {
            return Err(ChartError::InvalidData(format!(
                "category index {index} out of range 0..{}",
                self.category_count
            )));
        }
        Ok(self.left + index as f64 * self.band_width())
    }

    pub fn band_center(&self, index: usize) -> ChartResult<f64> {
        Ok(self.band_left(index)? + self.band_width() * 0.5)
    }

    /// One slot per series, centered inside the padded band interior.
    ///
    /// Slots degrade to zero width rather than failing when gaps exceed the
    /// interior, so crowded viewports stay renderable.
    pub fn series_slots(
        &self,
        index: usize,
        series_count: usize,
    ) -> ChartResult<SmallVec<[BarSlot; 4]>> {
        if series_count == 0 {
            return Err(ChartError::InvalidData(
                "band slots require at least one series".to_owned(),
            ));
        }

        let band_left = self.band_left(index)?;
        let band_width = self.band_width();
        let interior = band_width * (1.0 - self.group_padding_ratio);
        let interior_left = band_left + (band_width - interior) * 0.5;

        let total_gap = self.slot_gap_px * (series_count - 1) as f64;
        let slot_width = ((interior - total_gap) / series_count as f64).max(0.0);

        let mut slots = SmallVec::new();
        for slot in 0..series_count {
            slots.push(BarSlot {
                x_left: interior_left + slot as f64 * (slot_width + self.slot_gap_px),
                width: slot_width,
            });
        }
        Ok(slots)
    }

    /// Resolves a pointer x to the category band containing it.
    ///
    /// Returns `None` for non-finite input or positions outside every band,
    /// so stray clicks never change state.
    #[must_use]
    pub fn category_at_pixel(&self, x: f64) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }

        let half_band = self.band_width() * 0.5;
        let nearest = (0..self.category_count).min_by_key(|index| {
            let center = self.left + (*index as f64 + 0.5) * self.band_width();
            OrderedFloat((x - center).abs())
        })?;

        let center = self.left + (nearest as f64 + 0.5) * self.band_width();
        ((x - center).abs() <= half_band).then_some(nearest)
    }
}
