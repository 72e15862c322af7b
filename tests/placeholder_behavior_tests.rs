use brewchart::api::{ChartView, ChartViewConfig, SceneContent};
use brewchart::core::{Dataset, Viewport};
use brewchart::render::NullRenderer;
use brewchart::theme::ThemeContext;

fn empty_view() -> ChartView<NullRenderer> {
    let config = ChartViewConfig::new(Viewport::new(960, 640));
    ChartView::with_dataset(
        NullRenderer::default(),
        config,
        Dataset::empty(),
        ThemeContext::light(),
    )
    .expect("empty dataset is a valid mount")
}

#[test]
fn empty_dataset_mounts_into_the_placeholder_state() {
    let view = empty_view();
    assert!(view.is_placeholder());
    assert_eq!(view.total_cups(), None);
    assert_eq!(view.hovered_category(), None);
}

#[test]
fn placeholder_scene_shows_the_no_data_message() {
    let view = empty_view();
    let scene = view.scene(0.0).expect("scene");
    assert!(scene.is_placeholder());
    assert!(scene.bars().is_empty());

    match &scene.content {
        SceneContent::Placeholder(placeholder) => {
            assert_eq!(placeholder.title, "No Data Available");
            assert!(placeholder.caption.contains("check back later"));
        }
        SceneContent::Chart { .. } => panic!("empty dataset must render the placeholder"),
    }
}

#[test]
fn placeholder_frame_carries_text_only() {
    let view = empty_view();
    let frame = view.render_frame(1.0).expect("frame");

    assert!(frame.lines.is_empty());
    assert!(frame.rects.is_empty());
    assert!(frame.circles.is_empty());
    assert_eq!(frame.texts.len(), 2);
}

#[test]
fn placeholder_ignores_clicks_and_shows_no_tooltip() {
    let mut view = empty_view();

    view.pointer_move(480.0, 320.0).expect("pointer move");
    assert!(view.tooltip_scene().is_none());

    let selected = view.click_at(480.0, 320.0).expect("click");
    assert_eq!(selected, None);
    assert_eq!(view.selected_period(), None);

    assert!(view.plot_scene().is_err());
}

#[test]
fn placeholder_scene_never_shifts_with_the_pointer() {
    let mut view = empty_view();
    view.pointer_move(800.0, 600.0).expect("pointer move");

    let scene = view.scene(2.0).expect("scene");
    assert_eq!(scene.parallax, (0.0, 0.0));
}
