//! Calendar heat map of monthly global land-surface temperature anomalies.
//!
//! Fetch the dataset with [`HeatMapClient`], then render it with [`Chart`] as a
//! bare SVG document or as a self-contained HTML page with a hover tooltip and
//! a color legend.

mod chart;
mod client;
mod dataset;
mod error;
mod types;

#[cfg(test)]
mod test_support;

pub use client::HeatMapClient;
pub use error::HeatMapError;

pub use chart::axis::{Axis, Orient, Tick};
pub use chart::cells::Cell;
pub use chart::layout::{ChartLayout, TooltipFormat};
pub use chart::page::TITLE;
pub use chart::scale::{nice_ticks, BandScale, LinearScale};
pub use chart::tooltip::{
    truncate_temperature, tooltip_text, Pointer, Tooltip, TooltipPosition,
};
pub use chart::Chart;

pub use dataset::error::DatasetError;
pub use dataset::loader::{DatasetLoader, DEFAULT_DATA_URL};

pub use types::calendar::{Month, Year, MONTHS_PER_YEAR};
pub use types::color::{
    bucket_color, legend_bounds, ColorBucket, Rgb, COLOR_BUCKETS, FALLBACK_COLOR,
};
pub use types::dataset::{Dataset, MonthlyVariance, TemperatureRecord};
