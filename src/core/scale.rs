use crate::core::types::PlotArea;
use crate::error::{ChartError, ChartResult};

/// Maps non-negative magnitudes (cups) onto vertical pixels inside a plot
/// area. Zero sits on the plot baseline; `domain_max` touches the plot top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeScale {
    domain_max: f64,
}

impl MagnitudeScale {
    pub fn new(domain_max: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(ChartError::InvalidData(
                "magnitude scale domain must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self { domain_max })
    }

    #[must_use]
    pub fn domain_max(self) -> f64 {
        self.domain_max
    }

    /// Bar height in pixels for `value`.
    pub fn value_to_height(self, value: f64, plot: PlotArea) -> ChartResult<f64> {
        if !plot.is_valid() {
            return Err(ChartError::InvalidData(
                "plot area must have finite positive size".to_owned(),
            ));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(
                "magnitude value must be finite and >= 0".to_owned(),
            ));
        }

        Ok((value / self.domain_max) * plot.height)
    }

    /// Pixel y of the top edge of a bar of `value`, measured from the
    /// baseline at the bottom of the plot area.
    pub fn value_to_pixel_y(self, value: f64, plot: PlotArea) -> ChartResult<f64> {
        let height = self.value_to_height(value, plot)?;
        Ok(plot.bottom() - height)
    }
}
