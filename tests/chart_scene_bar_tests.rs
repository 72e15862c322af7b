use std::collections::HashSet;

use brewchart::api::{ChartView, ChartViewConfig};
use brewchart::core::{SeriesKey, Viewport};
use brewchart::render::NullRenderer;
use brewchart::theme::ThemeContext;

fn view() -> ChartView<NullRenderer> {
    let config = ChartViewConfig::new(Viewport::new(960, 640));
    ChartView::new(NullRenderer::default(), config, ThemeContext::light()).expect("view init")
}

#[test]
fn chart_renders_one_bar_per_period_and_series() {
    let view = view();
    let plot = view.plot_scene().expect("plot scene");

    let periods = view.dataset().len();
    assert_eq!(plot.bars.len(), periods * SeriesKey::count());

    let cells: HashSet<(String, SeriesKey)> = plot
        .bars
        .iter()
        .map(|bar| (bar.period_label.clone(), bar.series))
        .collect();
    assert_eq!(cells.len(), plot.bars.len());
}

#[test]
fn bar_heights_are_strictly_monotone_in_amount() {
    let view = view();
    let plot = view.plot_scene().expect("plot scene");

    for a in &plot.bars {
        for b in &plot.bars {
            if a.amount > b.amount {
                assert!(
                    a.height > b.height,
                    "bar of {} cups must be taller than bar of {} cups",
                    a.amount,
                    b.amount
                );
            }
            if a.amount == b.amount {
                assert!((a.height - b.height).abs() <= 1e-9);
            }
        }
    }
}

#[test]
fn bars_sit_on_the_plot_baseline_inside_their_band() {
    let view = view();
    let plot = view.plot_scene().expect("plot scene");
    let area = plot.area;
    let band_width = area.width / view.dataset().len() as f64;

    for (category, period) in view.dataset().periods().iter().enumerate() {
        let band_left = area.left + category as f64 * band_width;
        let band_right = band_left + band_width;

        for bar in plot.bars.iter().filter(|bar| bar.period_label == period.label()) {
            assert!((bar.baseline() - area.bottom()).abs() <= 1e-9);
            assert!(bar.x >= band_left - 1e-9);
            assert!(bar.x + bar.width <= band_right + 1e-9);
            assert!(bar.y >= area.top - 1e-9);
        }
    }
}

#[test]
fn axis_ticks_cover_every_period_with_abbreviated_labels() {
    let view = view();
    let plot = view.plot_scene().expect("plot scene");

    let labels: Vec<&str> = plot.x_ticks.iter().map(|tick| tick.text.as_str()).collect();
    assert_eq!(labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);

    let tick_values: Vec<&str> = plot.y_ticks.iter().map(|tick| tick.text.as_str()).collect();
    assert_eq!(tick_values, vec!["0", "100", "200", "300", "400"]);
    // grid draws one dashed line per non-zero tick
    assert_eq!(plot.grid.len(), 4);
}

#[test]
fn bars_carry_gradient_fills_and_rounded_tops() {
    let view = view();
    let plot = view.plot_scene().expect("plot scene");

    for bar in &plot.bars {
        assert!((bar.corner_radius_px - 4.0).abs() <= 1e-9);
        match bar.fill {
            brewchart::render::Fill::VerticalGradient { top, bottom } => {
                assert!((top.alpha - 0.8).abs() <= 1e-9);
                assert!((bottom.alpha - 0.3).abs() <= 1e-9);
            }
            brewchart::render::Fill::Solid(_) => panic!("bars use gradient fills"),
        }
    }
}
