//! Time Series Facade
//!
//! Unified re-exports for the series family.

// Re-export everything from SPI
pub use series_spi::*;

// Re-export everything from API
pub use series_api::*;

// Re-export everything from Core
pub use series_core::*;
