use tracing::debug;

use crate::core::{CategoryBandScale, Dataset, PlotArea, SeriesKey, Viewport};
use crate::error::ChartResult;
use crate::interaction::{InteractionSnapshot, InteractionState};
use crate::render::Renderer;
use crate::theme::ThemeContext;

use super::ChartViewConfig;

/// The interactive chart view: owns the dataset, theme handle, interaction
/// state, and derived totals, and produces scenes/frames on demand.
///
/// All event handling is synchronous on the caller's thread; nothing here
/// spawns work or keeps a clock.
pub struct ChartView<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartViewConfig,
    pub(super) dataset: Dataset,
    pub(super) theme: ThemeContext,
    pub(super) interaction: InteractionState,
    pub(super) plot: PlotArea,
    pub(super) total_cups: Option<u64>,
}

impl<R: Renderer> ChartView<R> {
    /// View over the built-in beverage table.
    pub fn new(renderer: R, config: ChartViewConfig, theme: ThemeContext) -> ChartResult<Self> {
        Self::with_dataset(renderer, config, Dataset::default_beverages(), theme)
    }

    /// View over a caller-supplied dataset.
    ///
    /// The dataset invariants are enforced by `Dataset::new`; an empty
    /// dataset is accepted and pins the view to its placeholder scene. The
    /// derived total is computed once here and cached for the view's
    /// lifetime; it is never computed for an empty dataset.
    pub fn with_dataset(
        renderer: R,
        config: ChartViewConfig,
        dataset: Dataset,
        theme: ThemeContext,
    ) -> ChartResult<Self> {
        config.validate()?;
        let plot = config.plot_area()?;
        let total_cups = (!dataset.is_empty()).then(|| dataset.total());

        debug!(
            periods = dataset.len(),
            total_cups, "chart view mounted"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            theme,
            interaction: InteractionState::default(),
            plot,
            total_cups,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartViewConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Cached sum of every amount; `None` when the dataset is empty.
    #[must_use]
    pub fn total_cups(&self) -> Option<u64> {
        self.total_cups
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.dataset.is_empty()
    }

    #[must_use]
    pub fn theme(&self) -> ThemeContext {
        self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeContext {
        &mut self.theme
    }

    #[must_use]
    pub fn hovered_series(&self) -> Option<SeriesKey> {
        self.interaction.hovered_series()
    }

    #[must_use]
    pub fn selected_period(&self) -> Option<&str> {
        self.interaction.selected_period()
    }

    #[must_use]
    pub fn pointer(&self) -> (f64, f64) {
        self.interaction.pointer()
    }

    #[must_use]
    pub fn interaction_snapshot(&self) -> InteractionSnapshot {
        self.interaction.snapshot()
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    pub(super) fn band_scale(&self) -> ChartResult<CategoryBandScale> {
        CategoryBandScale::new(
            self.dataset.len(),
            self.plot,
            self.config.group_padding_ratio,
            self.config.slot_gap_px,
        )
    }

    /// Category index under the pointer, when the pointer is inside the plot
    /// area and the view is not in its placeholder state.
    #[must_use]
    pub fn hovered_category_index(&self) -> Option<usize> {
        if self.dataset.is_empty() {
            return None;
        }
        let (x, y) = self.interaction.pointer();
        if !self.plot.contains(x, y) {
            return None;
        }
        self.band_scale().ok()?.category_at_pixel(x)
    }

    /// Period label under the pointer, if any.
    #[must_use]
    pub fn hovered_category(&self) -> Option<&str> {
        self.dataset.label_at(self.hovered_category_index()?)
    }

    /// Builds the frame for `elapsed_s` since mount and hands it to the
    /// backend.
    pub fn render(&mut self, elapsed_s: f64) -> ChartResult<()> {
        let frame = self.render_frame(elapsed_s)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
