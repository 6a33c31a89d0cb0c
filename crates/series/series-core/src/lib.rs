//! Time Series Core Engine
//!
//! Alignment (merge/join), regridding (resample/interpolate/step) and
//! windowed aggregation (rolling window/moving average) over
//! [`series_spi::TimeSeries`], exposed as extension traits.

// ============================================================================
// Engine Modules
// ============================================================================
mod align;
mod resample;
mod window;

pub use align::SeriesAlign;
pub use resample::SeriesResample;
pub use window::SeriesWindow;
