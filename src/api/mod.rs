pub mod axis_ticks;
mod chrome_scene_builder;
mod events;
mod plot_scene_builder;
mod render_frame_builder;
pub mod scene;
mod tooltip_scene_builder;
mod view;
mod view_config;

pub use events::ActivationKey;
pub use scene::{
    BarNode, ChartScene, ChromeScene, FooterScene, HeaderScene, HoverMarker, IconKind,
    LegendEntry, PlaceholderScene, PlotScene, SceneContent, SelectionIndicator, TickLabel,
    TooltipEntry, TooltipScene,
};
pub use view::ChartView;
pub use view_config::{ChartViewConfig, PlotMargins};
