use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};
use crate::theme::ThemeTokens;

use super::ChartView;
use super::scene::{
    ChartScene, ChromeScene, PlaceholderScene, PlotScene, SceneContent, TooltipScene,
};

const TOOLTIP_WIDTH_PX: f64 = 150.0;
const TOOLTIP_PADDING_PX: f64 = 12.0;
const TOOLTIP_ROW_HEIGHT_PX: f64 = 18.0;

impl<R: Renderer> ChartView<R> {
    /// The typed scene at `elapsed_s` since mount.
    ///
    /// An empty dataset yields the placeholder content with no parallax;
    /// otherwise plot, optional tooltip, and chrome are assembled from the
    /// current interaction state.
    pub fn scene(&self, elapsed_s: f64) -> ChartResult<ChartScene> {
        if !elapsed_s.is_finite() || elapsed_s < 0.0 {
            return Err(ChartError::InvalidData(
                "elapsed seconds must be finite and >= 0".to_owned(),
            ));
        }

        if self.dataset.is_empty() {
            return Ok(ChartScene {
                viewport: self.config.viewport,
                parallax: (0.0, 0.0),
                content: SceneContent::Placeholder(PlaceholderScene {
                    title: "No Data Available".to_owned(),
                    caption: "Please check back later for updated beverage consumption trends."
                        .to_owned(),
                }),
            });
        }

        let plot = self.plot_scene()?;
        let tooltip = self.tooltip_scene();
        let chrome = self.chrome_scene(elapsed_s);
        let parallax = self
            .interaction
            .parallax_offset(self.config.parallax_factor, self.config.parallax_max_px);

        trace!(
            elapsed_s,
            bars = plot.bars.len(),
            tooltip = tooltip.is_some(),
            "scene built"
        );

        Ok(ChartScene {
            viewport: self.config.viewport,
            parallax,
            content: SceneContent::Chart {
                plot,
                tooltip,
                chrome,
            },
        })
    }

    /// Flattens the scene into validated draw primitives.
    ///
    /// Mount-anchored animations (entrances, stagger, spin, pulse) are
    /// sampled at `elapsed_s`; interaction-driven emphasis renders at its
    /// settled target, since a state change triggers a fresh frame that
    /// supersedes any in-flight transition. Icon glyphs stay in the typed
    /// scene; the frame carries geometry and text only.
    pub fn render_frame(&self, elapsed_s: f64) -> ChartResult<RenderFrame> {
        let scene = self.scene(elapsed_s)?;
        let tokens = self.theme.tokens();
        let mut frame = RenderFrame::new(scene.viewport);

        match &scene.content {
            SceneContent::Placeholder(placeholder) => {
                self.flatten_placeholder(&mut frame, placeholder, &tokens);
            }
            SceneContent::Chart {
                plot,
                tooltip,
                chrome,
            } => {
                let card = self.config.motion.card_entrance.progress_at(elapsed_s);
                self.flatten_plot(&mut frame, plot, scene.parallax, elapsed_s, card, &tokens);
                if let Some(tooltip) = tooltip {
                    self.flatten_tooltip(&mut frame, tooltip, scene.parallax, card, &tokens);
                }
                self.flatten_chrome(&mut frame, chrome, scene.parallax, elapsed_s, card, &tokens);
            }
        }

        frame.validate()?;
        Ok(frame)
    }

    fn flatten_placeholder(
        &self,
        frame: &mut RenderFrame,
        placeholder: &PlaceholderScene,
        tokens: &ThemeTokens,
    ) {
        let center_x = f64::from(self.config.viewport.width) * 0.5;
        let center_y = f64::from(self.config.viewport.height) * 0.5;

        frame.texts.push(TextPrimitive::new(
            placeholder.title.clone(),
            center_x,
            center_y - 12.0,
            20.0,
            tokens.foreground,
            TextHAlign::Center,
        ));
        frame.texts.push(TextPrimitive::new(
            placeholder.caption.clone(),
            center_x,
            center_y + 14.0,
            14.0,
            tokens.muted_foreground,
            TextHAlign::Center,
        ));
    }

    fn flatten_plot(
        &self,
        frame: &mut RenderFrame,
        plot: &PlotScene,
        (dx, dy): (f64, f64),
        elapsed_s: f64,
        card: f64,
        tokens: &ThemeTokens,
    ) {
        for line in &plot.grid {
            let mut line = *line;
            line.x1 += dx;
            line.x2 += dx;
            line.y1 += dy;
            line.y2 += dy;
            line.color = line.color.faded(card);
            frame.lines.push(line);
        }

        for tick in &plot.y_ticks {
            frame.texts.push(TextPrimitive::new(
                tick.text.clone(),
                tick.x + dx,
                tick.y + dy,
                12.0,
                tokens.muted_foreground.faded(card),
                TextHAlign::Right,
            ));
        }
        for tick in &plot.x_ticks {
            frame.texts.push(TextPrimitive::new(
                tick.text.clone(),
                tick.x + dx,
                tick.y + dy,
                10.0,
                tokens.muted_foreground.faded(card),
                TextHAlign::Center,
            ));
        }

        for bar in &plot.bars {
            let progress = bar.entrance.progress_at(elapsed_s);
            let emphasis = if bar.hovered {
                self.config.hover_scale
            } else {
                1.0
            };
            let height = (bar.height * progress * emphasis).max(0.0);
            let width = bar.width * emphasis;
            let mut fill = bar.fill;
            if bar.selected {
                fill = fill.brightened(self.config.selection_brightness);
            }

            frame.rects.push(
                RectPrimitive::new(
                    bar.center_x() - width * 0.5 + dx,
                    bar.baseline() - height + dy,
                    width,
                    height,
                    fill.faded(card),
                )
                .with_corner_radius(bar.corner_radius_px),
            );
        }

        for marker in &plot.hover_markers {
            frame.circles.push(CirclePrimitive::new(
                marker.cx + dx,
                marker.cy + dy,
                marker.radius,
                marker.color.faded(card),
            ));
        }
    }

    fn flatten_tooltip(
        &self,
        frame: &mut RenderFrame,
        tooltip: &TooltipScene,
        (dx, dy): (f64, f64),
        card: f64,
        tokens: &ThemeTokens,
    ) {
        let x = tooltip.anchor_x + dx;
        let header_height = 20.0;
        let body_height = tooltip.entries.len() as f64 * TOOLTIP_ROW_HEIGHT_PX;
        let height = header_height + body_height + TOOLTIP_PADDING_PX * 2.0;
        let top = tooltip.anchor_y + dy - height;

        frame.rects.push(
            RectPrimitive::new(
                x,
                top,
                TOOLTIP_WIDTH_PX,
                height,
                crate::render::Fill::Solid(tokens.background.faded(0.9 * card)),
            )
            .with_corner_radius(8.0),
        );

        frame.texts.push(TextPrimitive::new(
            tooltip.period_label.clone(),
            x + TOOLTIP_PADDING_PX,
            top + TOOLTIP_PADDING_PX + 8.0,
            14.0,
            tokens.foreground.faded(card),
            TextHAlign::Left,
        ));

        for (index, entry) in tooltip.entries.iter().enumerate() {
            let row_y = top + TOOLTIP_PADDING_PX + header_height + index as f64 * TOOLTIP_ROW_HEIGHT_PX
                + TOOLTIP_ROW_HEIGHT_PX * 0.5;
            frame.circles.push(CirclePrimitive::new(
                x + TOOLTIP_PADDING_PX + 4.0,
                row_y,
                4.0,
                entry.swatch.faded(card),
            ));
            frame.texts.push(TextPrimitive::new(
                format!("{}: {} cups", entry.display_label, entry.amount),
                x + TOOLTIP_PADDING_PX + 14.0,
                row_y + 4.0,
                12.0,
                entry.swatch.faded(card),
                TextHAlign::Left,
            ));
        }
    }

    fn flatten_chrome(
        &self,
        frame: &mut RenderFrame,
        chrome: &ChromeScene,
        (dx, dy): (f64, f64),
        elapsed_s: f64,
        card: f64,
        tokens: &ThemeTokens,
    ) {
        let viewport_width = f64::from(self.config.viewport.width);
        let viewport_height = f64::from(self.config.viewport.height);
        let left = self.config.margins.left;

        let title = chrome.header.title_enter.sample(elapsed_s);
        frame.texts.push(TextPrimitive::new(
            chrome.header.title.clone(),
            left + 36.0 + title.offset_x,
            34.0 + title.offset_y,
            22.0,
            tokens.foreground.faded(title.opacity * card),
            TextHAlign::Left,
        ));

        let subtitle = chrome.header.subtitle_enter.sample(elapsed_s);
        frame.texts.push(TextPrimitive::new(
            chrome.header.subtitle.clone(),
            left + 36.0 + subtitle.offset_x,
            58.0 + subtitle.offset_y,
            14.0,
            tokens.muted_foreground.faded(subtitle.opacity * card),
            TextHAlign::Left,
        ));

        // legend sits inside the chart container, so it shares the parallax
        let legend_width = chrome.legend.len() as f64 * 90.0;
        let legend_y = viewport_height - self.config.footer_height_px + 16.0;
        for (index, entry) in chrome.legend.iter().enumerate() {
            let sample = entry.enter.sample(elapsed_s);
            let cell_left =
                (viewport_width - legend_width) * 0.5 + index as f64 * 90.0 + sample.offset_x;
            frame.circles.push(CirclePrimitive::new(
                cell_left + 8.0 + dx,
                legend_y + dy,
                4.0,
                entry.swatch.faded(sample.opacity * card),
            ));
            frame.texts.push(TextPrimitive::new(
                entry.label.clone(),
                cell_left + 18.0 + dx,
                legend_y + 4.0 + dy,
                12.0,
                entry.text_color.faded(sample.opacity * card),
                TextHAlign::Left,
            ));
        }

        let footer = chrome.footer.enter.sample(elapsed_s);
        let footer_top = viewport_height - self.config.footer_height_px;
        frame.texts.push(TextPrimitive::new(
            format!("Overall consumption: {}", chrome.footer.total_text),
            left + footer.offset_x,
            footer_top + 44.0 + footer.offset_y,
            14.0 * chrome.footer.total_scale,
            tokens.foreground.faded(footer.opacity * card),
            TextHAlign::Left,
        ));
        frame.texts.push(TextPrimitive::new(
            chrome.footer.caption.clone(),
            left + footer.offset_x,
            footer_top + 64.0 + footer.offset_y,
            12.0,
            tokens.muted_foreground.faded(footer.opacity * card),
            TextHAlign::Left,
        ));

        if let Some(selection) = &chrome.selection {
            let sample = selection.enter.sample(elapsed_s);
            let row_y = footer_top + 86.0 + sample.offset_y;
            frame.texts.push(TextPrimitive::new(
                selection.text.clone(),
                viewport_width * 0.5 - 8.0,
                row_y,
                13.0,
                tokens.foreground.faded(sample.opacity * card),
                TextHAlign::Right,
            ));
            frame.rects.push(
                RectPrimitive::new(
                    viewport_width * 0.5 + 8.0,
                    row_y - 14.0,
                    64.0,
                    22.0,
                    crate::render::Fill::Solid(tokens.muted.faded(sample.opacity * card)),
                )
                .with_corner_radius(6.0),
            );
            frame.texts.push(TextPrimitive::new(
                selection.reset_label.clone(),
                viewport_width * 0.5 + 40.0,
                row_y,
                12.0,
                tokens.foreground.faded(sample.opacity * card),
                TextHAlign::Center,
            ));
        }
    }
}
