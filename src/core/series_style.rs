use crate::core::SeriesKey;
use crate::render::{Color, Fill};

/// Display label and base color for one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub display_label: &'static str,
    pub color: Color,
}

/// Exhaustive style table; every `SeriesKey` has exactly one entry.
#[must_use]
pub fn series_style(key: SeriesKey) -> SeriesStyle {
    match key {
        SeriesKey::Espresso => SeriesStyle {
            display_label: "Espresso",
            // rich brown
            color: Color::from_hsl(25.0, 0.70, 0.45),
        },
        SeriesKey::Latte => SeriesStyle {
            display_label: "Latte",
            // creamy light brown
            color: Color::from_hsl(43.0, 0.80, 0.70),
        },
        SeriesKey::Tea => SeriesStyle {
            display_label: "Tea",
            // refreshing green
            color: Color::from_hsl(150.0, 0.50, 0.45),
        },
    }
}

/// Bar body fill: the series color fading from 0.8 alpha at the top of the
/// bar to 0.3 at its base.
#[must_use]
pub fn series_fill(key: SeriesKey) -> Fill {
    let base = series_style(key).color;
    Fill::VerticalGradient {
        top: base.with_alpha(0.8),
        bottom: base.with_alpha(0.3),
    }
}
