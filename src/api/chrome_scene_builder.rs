use crate::core::{SeriesKey, series_style};
use crate::motion::FadeSlide;
use crate::render::Renderer;

use super::ChartView;
use super::scene::{
    ChromeScene, FooterScene, HeaderScene, IconKind, LegendEntry, SelectionIndicator,
};

const TITLE: &str = "Global Beverage Trends";
const SUBTITLE: &str = "Espresso, Latte, and Tea Consumption (Past 6 Months)";

impl<R: Renderer> ChartView<R> {
    /// Header, legend, footer, and selection indicator at `elapsed_s` since
    /// mount. Mount reveals are staggered so the card assembles
    /// sequentially; the icon spin and footer pulse never settle.
    #[must_use]
    pub fn chrome_scene(&self, elapsed_s: f64) -> ChromeScene {
        let motion = self.config.motion;
        let stagger = motion.mount_stagger;
        let tokens = self.theme.tokens();
        let staged = |stage: usize, dx: f64, dy: f64| {
            FadeSlide::new(
                0.0,
                dx,
                dy,
                motion.card_entrance.delayed_by(stagger.delay_for(stage)),
            )
        };

        let header = HeaderScene {
            icon: IconKind::Coffee,
            icon_angle_deg: motion.icon_spin.angle_deg_at(elapsed_s),
            icon_spin: motion.icon_spin,
            title: TITLE.to_owned(),
            subtitle: SUBTITLE.to_owned(),
            title_enter: staged(1, 0.0, -20.0),
            subtitle_enter: staged(2, 0.0, 20.0),
        };

        let hovered = self.interaction.hovered_series();
        let legend = SeriesKey::ALL
            .into_iter()
            .enumerate()
            .map(|(index, key)| {
                let style = series_style(key);
                LegendEntry {
                    series: key,
                    label: style.display_label.to_owned(),
                    icon: match key {
                        SeriesKey::Tea => IconKind::Leaf,
                        _ => IconKind::Coffee,
                    },
                    swatch: style.color,
                    text_color: if hovered == Some(key) {
                        style.color
                    } else {
                        tokens.muted_foreground
                    },
                    enter: FadeSlide::new(
                        0.0,
                        -20.0,
                        0.0,
                        motion
                            .card_entrance
                            .delayed_by(stagger.delay_for(5) + 0.1 * index as f64),
                    ),
                }
            })
            .collect();

        let footer = FooterScene {
            total_text: format!("{} cups", self.total_cups.unwrap_or(0)),
            total_scale: motion.total_pulse.scale_at(elapsed_s),
            caption: self.config.footer_caption.clone(),
            trend_icon: IconKind::TrendingUp,
            enter: staged(4, 0.0, 20.0),
        };

        let selection = self.interaction.selected_period().map(|label| {
            SelectionIndicator {
                text: format!("Selected: {label}"),
                reset_label: "Reset".to_owned(),
                reset_icon: IconKind::Close,
                enter: FadeSlide::new(0.0, 0.0, 20.0, motion.tooltip_entry),
            }
        });

        ChromeScene {
            header,
            legend,
            footer,
            selection,
        }
    }
}
