use brewchart::api::{ChartView, ChartViewConfig};
use brewchart::core::Viewport;
use brewchart::render::NullRenderer;
use brewchart::theme::{ResolvedTheme, ThemeContext, ThemeMode, tokens_for};

#[test]
fn toggle_flips_the_resolved_appearance() {
    let mut context = ThemeContext::light();
    assert_eq!(context.resolved(), ResolvedTheme::Light);

    context.toggle();
    assert_eq!(context.resolved(), ResolvedTheme::Dark);

    context.toggle();
    assert_eq!(context.resolved(), ResolvedTheme::Light);
}

#[test]
fn system_mode_follows_the_host_preference() {
    let context = ThemeContext::system(ResolvedTheme::Dark);
    assert_eq!(context.mode(), ThemeMode::System);
    assert_eq!(context.resolved(), ResolvedTheme::Dark);

    let context = ThemeContext::system(ResolvedTheme::Light);
    assert_eq!(context.resolved(), ResolvedTheme::Light);
}

#[test]
fn toggling_out_of_system_pins_an_explicit_mode() {
    let mut context = ThemeContext::system(ResolvedTheme::Dark);
    context.toggle();

    assert_eq!(context.mode(), ThemeMode::Light);
    assert_eq!(context.resolved(), ResolvedTheme::Light);
}

#[test]
fn token_sets_differ_between_modes() {
    let light = tokens_for(ResolvedTheme::Light);
    let dark = tokens_for(ResolvedTheme::Dark);

    assert_ne!(light.background, dark.background);
    assert_ne!(light.foreground, dark.foreground);
    assert_ne!(light.muted_foreground, dark.muted_foreground);
}

#[test]
fn view_renders_with_the_context_it_is_handed() {
    let config = ChartViewConfig::new(Viewport::new(960, 640));
    let mut view = ChartView::new(
        NullRenderer::default(),
        config,
        ThemeContext::dark(),
    )
    .expect("view init");

    // sample past every entrance so chrome text sits at full opacity
    let frame = view.render_frame(10.0).expect("frame");
    let dark_foreground = tokens_for(ResolvedTheme::Dark).foreground;
    assert!(frame.texts.iter().any(|text| text.color == dark_foreground));

    view.theme_mut().toggle();
    let frame = view.render_frame(10.0).expect("frame");
    let light_foreground = tokens_for(ResolvedTheme::Light).foreground;
    assert!(frame.texts.iter().any(|text| text.color == light_foreground));
    assert!(!frame.texts.iter().any(|text| text.color == dark_foreground));
}
