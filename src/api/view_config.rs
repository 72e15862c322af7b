use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::motion::ChartMotion;

/// Pixel margins between the plot area and its surrounding chrome bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 20.0,
            // leaves room for magnitude axis labels
            left: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartViewConfig {
    pub viewport: Viewport,
    pub margins: PlotMargins,
    pub header_height_px: f64,
    pub footer_height_px: f64,
    /// Fraction of each category band kept clear around the bar group.
    pub group_padding_ratio: f64,
    pub slot_gap_px: f64,
    pub bar_corner_radius_px: f64,
    /// Scale-up applied to bars of the hovered series.
    pub hover_scale: f64,
    /// Brightness boost applied to bars of the selected period.
    pub selection_brightness: f64,
    pub hover_marker_radius_px: f64,
    pub hover_marker_offset_px: f64,
    /// Pointer-displacement fraction used for the cosmetic parallax shift.
    pub parallax_factor: f64,
    /// Per-axis clamp keeping the parallax shift from obscuring content.
    pub parallax_max_px: f64,
    pub footer_caption: String,
    pub motion: ChartMotion,
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            header_height_px: 80.0,
            footer_height_px: 96.0,
            group_padding_ratio: 0.2,
            slot_gap_px: 2.0,
            bar_corner_radius_px: 4.0,
            hover_scale: 1.05,
            selection_brightness: 0.2,
            hover_marker_radius_px: 5.0,
            hover_marker_offset_px: 10.0,
            parallax_factor: 0.01,
            parallax_max_px: 8.0,
            footer_caption: "January - June 2024".to_owned(),
            motion: ChartMotion::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_motion(mut self, motion: ChartMotion) -> Self {
        self.motion = motion;
        self
    }

    #[must_use]
    pub fn with_hover_scale(mut self, hover_scale: f64) -> Self {
        self.hover_scale = hover_scale;
        self
    }

    #[must_use]
    pub fn with_parallax(mut self, factor: f64, max_px: f64) -> Self {
        self.parallax_factor = factor;
        self.parallax_max_px = max_px;
        self
    }

    #[must_use]
    pub fn with_footer_caption(mut self, caption: impl Into<String>) -> Self {
        self.footer_caption = caption.into();
        self
    }

    /// Plot region between the header band, axis margins, and footer band.
    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        let width =
            f64::from(self.viewport.width) - self.margins.left - self.margins.right;
        let height = f64::from(self.viewport.height)
            - self.header_height_px
            - self.footer_height_px
            - self.margins.top
            - self.margins.bottom;

        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        Ok(PlotArea::new(
            self.margins.left,
            self.header_height_px + self.margins.top,
            width,
            height,
        ))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.plot_area()?;

        for (name, value) in [
            ("header height", self.header_height_px),
            ("footer height", self.footer_height_px),
            ("slot gap", self.slot_gap_px),
            ("bar corner radius", self.bar_corner_radius_px),
            ("selection brightness", self.selection_brightness),
            ("hover marker radius", self.hover_marker_radius_px),
            ("hover marker offset", self.hover_marker_offset_px),
            ("parallax max", self.parallax_max_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !self.group_padding_ratio.is_finite() || !(0.0..1.0).contains(&self.group_padding_ratio)
        {
            return Err(ChartError::InvalidData(
                "group padding ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !self.hover_scale.is_finite() || self.hover_scale <= 0.0 {
            return Err(ChartError::InvalidData(
                "hover scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.parallax_factor.is_finite() {
            return Err(ChartError::InvalidData(
                "parallax factor must be finite".to_owned(),
            ));
        }
        if self.footer_caption.is_empty() {
            return Err(ChartError::InvalidData(
                "footer caption must not be empty".to_owned(),
            ));
        }

        self.motion.validate()
    }
}
