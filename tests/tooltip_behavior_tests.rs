use brewchart::api::{ChartView, ChartViewConfig};
use brewchart::core::{SeriesKey, Viewport};
use brewchart::render::NullRenderer;
use brewchart::theme::ThemeContext;

fn view() -> ChartView<NullRenderer> {
    let config = ChartViewConfig::new(Viewport::new(960, 640));
    ChartView::new(NullRenderer::default(), config, ThemeContext::light()).expect("view init")
}

fn move_to_band(view: &mut ChartView<NullRenderer>, index: usize) {
    let plot = view.plot_area();
    let band_width = plot.width / view.dataset().len() as f64;
    let x = plot.left + band_width * (index as f64 + 0.5);
    let y = plot.top + plot.height * 0.5;
    view.pointer_move(x, y).expect("pointer move");
}

#[test]
fn tooltip_lists_every_series_with_amounts_and_swatches() {
    let mut view = view();
    move_to_band(&mut view, 1);

    let tooltip = view.tooltip_scene().expect("tooltip present");
    assert_eq!(tooltip.period_label, "February");
    assert_eq!(tooltip.entries.len(), SeriesKey::count());

    let rows: Vec<(SeriesKey, &str, u64)> = tooltip
        .entries
        .iter()
        .map(|entry| (entry.series, entry.display_label.as_str(), entry.amount))
        .collect();
    assert_eq!(
        rows,
        vec![
            (SeriesKey::Espresso, "Espresso", 305),
            (SeriesKey::Latte, "Latte", 200),
            (SeriesKey::Tea, "Tea", 150),
        ]
    );

    for entry in &tooltip.entries {
        assert_eq!(entry.swatch.alpha, 1.0);
    }
}

#[test]
fn tooltip_entries_reveal_sequentially_within_the_budget() {
    let mut view = view();
    move_to_band(&mut view, 0);

    let tooltip = view.tooltip_scene().expect("tooltip present");
    let delays: Vec<f64> = tooltip
        .entries
        .iter()
        .map(|entry| entry.enter.transition.delay_s)
        .collect();

    for pair in delays.windows(2) {
        assert!(pair[1] > pair[0], "entries must stagger sequentially");
    }
    for entry in &tooltip.entries {
        assert!(entry.enter.transition.duration_s <= 0.3 + 1e-9);
    }
}

#[test]
fn no_tooltip_when_pointer_is_outside_every_category() {
    let mut view = view();
    assert!(view.tooltip_scene().is_none());

    view.pointer_move(4.0, 4.0).expect("pointer move");
    assert!(view.tooltip_scene().is_none());

    let below = view.plot_area().bottom() + 5.0;
    view.pointer_move(100.0, below).expect("pointer move");
    assert!(view.tooltip_scene().is_none());
}

#[test]
fn tooltip_rows_flatten_with_cup_suffixes() {
    let mut view = view();
    move_to_band(&mut view, 1);

    let frame = view.render_frame(2.0).expect("frame");
    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(texts.contains(&"Espresso: 305 cups"));
    assert!(texts.contains(&"Latte: 200 cups"));
    assert!(texts.contains(&"Tea: 150 cups"));
}

#[test]
fn tooltip_follows_the_hovered_category() {
    let mut view = view();
    move_to_band(&mut view, 2);
    assert_eq!(
        view.tooltip_scene().expect("tooltip").period_label,
        "March"
    );

    move_to_band(&mut view, 5);
    assert_eq!(view.tooltip_scene().expect("tooltip").period_label, "June");
}
