//! Headless diagnostic: replays a scripted interaction sequence against the
//! default beverage view and prints one JSON trace line per step, so scene
//! output can be diffed across revisions without a drawing backend.

use std::error::Error;

use brewchart::api::{ActivationKey, ChartView, ChartViewConfig};
use brewchart::core::{SeriesKey, Viewport};
use brewchart::render::NullRenderer;
use brewchart::theme::ThemeContext;
use serde_json::json;

const SAMPLE_ELAPSED_S: f64 = 1.5;

fn emit(view: &ChartView<NullRenderer>, step: &str) -> Result<(), Box<dyn Error>> {
    let frame = view.render_frame(SAMPLE_ELAPSED_S)?;
    let line = json!({
        "step": step,
        "state": serde_json::to_value(view.interaction_snapshot())?,
        "hovered_category": view.hovered_category(),
        "total_cups": view.total_cups(),
        "frame": {
            "lines": frame.lines.len(),
            "rects": frame.rects.len(),
            "circles": frame.circles.len(),
            "texts": frame.texts.len(),
        },
    });
    println!("{line}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = brewchart::telemetry::init_default_tracing();

    let config = ChartViewConfig::new(Viewport::new(960, 640));
    let mut view = ChartView::new(NullRenderer::default(), config, ThemeContext::light())?;
    emit(&view, "mount")?;

    view.pointer_enter_series(SeriesKey::Espresso);
    emit(&view, "hover-espresso")?;

    let plot = view.plot_area();
    let (center_x, center_y) = (plot.left + plot.width * 0.5, plot.top + plot.height * 0.5);
    view.pointer_move(center_x, center_y)?;
    emit(&view, "pointer-center")?;

    view.click_at(center_x, center_y)?;
    emit(&view, "click-center")?;

    view.key_activate(ActivationKey::Enter, "March")?;
    emit(&view, "key-activate-march")?;

    view.reset_selection();
    view.pointer_leave_series(SeriesKey::Espresso);
    emit(&view, "reset-and-leave")?;

    Ok(())
}
