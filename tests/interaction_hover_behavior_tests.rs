use brewchart::api::{ChartView, ChartViewConfig};
use brewchart::core::{SeriesKey, Viewport};
use brewchart::render::NullRenderer;
use brewchart::theme::ThemeContext;

fn view() -> ChartView<NullRenderer> {
    let config = ChartViewConfig::new(Viewport::new(960, 640));
    ChartView::new(NullRenderer::default(), config, ThemeContext::light()).expect("view init")
}

#[test]
fn hover_enter_then_leave_round_trips_to_none() {
    let mut view = view();
    assert_eq!(view.hovered_series(), None);

    view.pointer_enter_series(SeriesKey::Espresso);
    assert_eq!(view.hovered_series(), Some(SeriesKey::Espresso));

    view.pointer_leave_series(SeriesKey::Espresso);
    assert_eq!(view.hovered_series(), None);
}

#[test]
fn stale_leave_for_another_series_is_a_noop() {
    let mut view = view();
    view.pointer_enter_series(SeriesKey::Tea);
    view.pointer_leave_series(SeriesKey::Espresso);
    assert_eq!(view.hovered_series(), Some(SeriesKey::Tea));
}

#[test]
fn hover_marks_every_bar_of_the_series_and_adds_markers() {
    let mut view = view();
    view.pointer_enter_series(SeriesKey::Latte);

    let plot = view.plot_scene().expect("plot scene");
    let hovered: Vec<_> = plot.bars.iter().filter(|bar| bar.hovered).collect();
    assert_eq!(hovered.len(), view.dataset().len());
    assert!(hovered.iter().all(|bar| bar.series == SeriesKey::Latte));
    assert_eq!(plot.hover_markers.len(), view.dataset().len());

    for (marker, bar) in plot.hover_markers.iter().zip(&hovered) {
        assert!((marker.cx - bar.center_x()).abs() <= 1e-9);
        assert!(marker.cy < bar.y);
    }
}

#[test]
fn hover_recolors_only_the_matching_legend_entry() {
    let mut view = view();
    view.pointer_enter_series(SeriesKey::Espresso);

    let chrome = view.chrome_scene(2.0);
    for entry in &chrome.legend {
        if entry.series == SeriesKey::Espresso {
            assert_eq!(entry.text_color, entry.swatch);
        } else {
            assert_ne!(entry.text_color, entry.swatch);
        }
    }
}

#[test]
fn hover_leave_removes_markers_and_reverts_legend() {
    let mut view = view();
    view.pointer_enter_series(SeriesKey::Espresso);
    view.pointer_leave_series(SeriesKey::Espresso);

    let plot = view.plot_scene().expect("plot scene");
    assert!(plot.hover_markers.is_empty());
    assert!(plot.bars.iter().all(|bar| !bar.hovered));

    let chrome = view.chrome_scene(2.0);
    assert!(chrome.legend.iter().all(|entry| entry.text_color != entry.swatch));
}
