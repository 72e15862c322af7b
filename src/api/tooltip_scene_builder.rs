use crate::core::series_style;
use crate::motion::FadeSlide;
use crate::render::Renderer;

use super::ChartView;
use super::scene::{TooltipEntry, TooltipScene};

impl<R: Renderer> ChartView<R> {
    /// Tooltip for the category under the pointer.
    ///
    /// `None` whenever the pointer does not resolve to a category, including
    /// the placeholder state, so no tooltip outlives its hover.
    #[must_use]
    pub fn tooltip_scene(&self) -> Option<TooltipScene> {
        let index = self.hovered_category_index()?;
        let period = self.dataset.periods().get(index)?;
        let (pointer_x, pointer_y) = self.interaction.pointer();
        let motion = self.config.motion;

        let entries = period
            .amounts()
            .enumerate()
            .map(|(entry_index, (key, amount))| {
                let style = series_style(key);
                TooltipEntry {
                    series: key,
                    display_label: style.display_label.to_owned(),
                    amount,
                    swatch: style.color,
                    enter: FadeSlide::new(
                        0.0,
                        -10.0,
                        0.0,
                        motion
                            .tooltip_entry
                            .delayed_by(motion.tooltip_stagger.delay_for(entry_index)),
                    ),
                }
            })
            .collect();

        Some(TooltipScene {
            period_label: period.label().to_owned(),
            anchor_x: pointer_x + 12.0,
            anchor_y: pointer_y - 12.0,
            entries,
            enter: FadeSlide::new(0.0, 0.0, 10.0, motion.tooltip_entry),
        })
    }
}
