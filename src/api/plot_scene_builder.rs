use crate::core::{MagnitudeScale, SeriesKey, series_fill, series_style};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, LineStrokeStyle, Renderer};

use super::axis_ticks::{abbreviate_label, magnitude_ticks};
use super::scene::{BarNode, HoverMarker, PlotScene, TickLabel};
use super::ChartView;

impl<R: Renderer> ChartView<R> {
    /// Settled plot geometry: grid, axis ticks, and one bar per
    /// `(period, series)` pair, with interaction flags and entrance specs
    /// attached.
    pub fn plot_scene(&self) -> ChartResult<PlotScene> {
        if self.dataset.is_empty() {
            return Err(ChartError::InvalidData(
                "plot scene requires a non-empty dataset".to_owned(),
            ));
        }

        let plot = self.plot;
        let tokens = self.theme.tokens();
        let ticks = magnitude_ticks(self.dataset.max_amount().unwrap_or(0));
        let domain_max = ticks.last().copied().unwrap_or(1).max(1);
        let scale = MagnitudeScale::new(domain_max as f64)?;
        let bands = self.band_scale()?;

        let mut grid = Vec::with_capacity(ticks.len());
        let mut y_ticks = Vec::with_capacity(ticks.len());
        for tick in &ticks {
            let y = scale.value_to_pixel_y(*tick as f64, plot)?;
            if *tick > 0 {
                grid.push(
                    LinePrimitive::new(plot.left, y, plot.right(), y, 1.0, tokens.border)
                        .with_stroke_style(LineStrokeStyle::Dashed {
                            dash_px: 3.0,
                            gap_px: 3.0,
                        }),
                );
            }
            y_ticks.push(TickLabel {
                text: tick.to_string(),
                x: plot.left - 8.0,
                y,
            });
        }

        let mut x_ticks = Vec::with_capacity(self.dataset.len());
        let mut bars = Vec::with_capacity(self.dataset.len() * SeriesKey::count());
        for (category, period) in self.dataset.periods().iter().enumerate() {
            x_ticks.push(TickLabel {
                text: abbreviate_label(period.label()),
                x: bands.band_center(category)?,
                y: plot.bottom() + 16.0,
            });

            let slots = bands.series_slots(category, SeriesKey::count())?;
            for (slot, (key, amount)) in slots.iter().zip(period.amounts()) {
                let height = scale.value_to_height(amount as f64, plot)?;
                bars.push(BarNode {
                    period_label: period.label().to_owned(),
                    series: key,
                    amount,
                    x: slot.x_left,
                    y: plot.bottom() - height,
                    width: slot.width,
                    height,
                    fill: series_fill(key),
                    corner_radius_px: self.config.bar_corner_radius_px,
                    hovered: self.interaction.hovered_series() == Some(key),
                    selected: self.interaction.selected_period() == Some(period.label()),
                    entrance: self.config.motion.bar_entrance,
                });
            }
        }

        let hover_markers = bars
            .iter()
            .filter(|bar| bar.hovered)
            .map(|bar| HoverMarker {
                cx: bar.center_x(),
                cy: bar.y - self.config.hover_marker_offset_px,
                radius: self.config.hover_marker_radius_px,
                color: series_style(bar.series).color,
                enter: self.config.motion.hover_emphasis,
            })
            .collect();

        Ok(PlotScene {
            area: plot,
            grid,
            x_ticks,
            y_ticks,
            bars,
            hover_markers,
        })
    }
}
