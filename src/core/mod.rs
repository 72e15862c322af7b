pub mod band_scale;
pub mod dataset;
pub mod scale;
pub mod series_style;
pub mod types;

pub use band_scale::{BarSlot, CategoryBandScale};
pub use dataset::{Dataset, Period, SeriesKey};
pub use scale::MagnitudeScale;
pub use series_style::{SeriesStyle, series_fill, series_style};
pub use types::{PlotArea, Viewport};
