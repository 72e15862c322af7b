//! brewchart: headless interactive bar-chart view.
//!
//! This crate owns the state machine, derived data, declarative scene model,
//! and motion parameter tables of an animated beverage-consumption chart.
//! Drawing backends stay behind the `render::Renderer` seam so the view can
//! be driven and asserted against without a windowing toolkit.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod motion;
pub mod render;
pub mod telemetry;
pub mod theme;

pub use api::{ChartView, ChartViewConfig};
pub use error::{ChartError, ChartResult};
