//! Typed scene model: the declarative description of everything the chart
//! shows, with motion specs attached where a tweening backend needs them.
//! `ChartView::render_frame` flattens this into draw primitives.

use crate::core::{PlotArea, SeriesKey, Viewport};
use crate::motion::{FadeSlide, Spin, Transition};
use crate::render::{Color, Fill, LinePrimitive};

/// Icon glyphs referenced by the chrome; rasterization is a backend concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Coffee,
    Leaf,
    TrendingUp,
    Close,
}

/// One axis tick label anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// One bar cell: the settled geometry for a `(period, series)` pair plus its
/// interaction flags and entrance spec.
#[derive(Debug, Clone, PartialEq)]
pub struct BarNode {
    pub period_label: String,
    pub series: SeriesKey,
    pub amount: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Fill,
    pub corner_radius_px: f64,
    pub hovered: bool,
    pub selected: bool,
    pub entrance: Transition,
}

impl BarNode {
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }
}

/// Dot shown above every bar of the hovered series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverMarker {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: Color,
    pub enter: Transition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotScene {
    pub area: PlotArea,
    pub grid: Vec<LinePrimitive>,
    pub x_ticks: Vec<TickLabel>,
    pub y_ticks: Vec<TickLabel>,
    pub bars: Vec<BarNode>,
    pub hover_markers: Vec<HoverMarker>,
}

/// One series row inside the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub series: SeriesKey,
    pub display_label: String,
    pub amount: u64,
    pub swatch: Color,
    pub enter: FadeSlide,
}

/// Tooltip shown while the pointer resolves to a category.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipScene {
    pub period_label: String,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub entries: Vec<TooltipEntry>,
    pub enter: FadeSlide,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderScene {
    pub icon: IconKind,
    pub icon_angle_deg: f64,
    pub icon_spin: Spin,
    pub title: String,
    pub subtitle: String,
    pub title_enter: FadeSlide,
    pub subtitle_enter: FadeSlide,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub series: SeriesKey,
    pub label: String,
    pub icon: IconKind,
    pub swatch: Color,
    /// Series color while its bars are hovered, muted otherwise.
    pub text_color: Color,
    pub enter: FadeSlide,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterScene {
    pub total_text: String,
    /// Breathing-pulse scale sampled at the current elapsed time.
    pub total_scale: f64,
    pub caption: String,
    pub trend_icon: IconKind,
    pub enter: FadeSlide,
}

/// "Selected: {period}" row with its reset control; present only while a
/// selection is active.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionIndicator {
    pub text: String,
    pub reset_label: String,
    pub reset_icon: IconKind,
    pub enter: FadeSlide,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChromeScene {
    pub header: HeaderScene,
    pub legend: Vec<LegendEntry>,
    pub footer: FooterScene,
    pub selection: Option<SelectionIndicator>,
}

/// Terminal rendering state for an absent dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderScene {
    pub title: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneContent {
    Placeholder(PlaceholderScene),
    Chart {
        plot: PlotScene,
        tooltip: Option<TooltipScene>,
        chrome: ChromeScene,
    },
}

/// The complete chart description for one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub viewport: Viewport,
    /// Bounded cosmetic translation applied to chart-area content.
    pub parallax: (f64, f64),
    pub content: SceneContent,
}

impl ChartScene {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, SceneContent::Placeholder(_))
    }

    /// Bars in the chart content, empty for the placeholder.
    #[must_use]
    pub fn bars(&self) -> &[BarNode] {
        match &self.content {
            SceneContent::Placeholder(_) => &[],
            SceneContent::Chart { plot, .. } => &plot.bars,
        }
    }
}
