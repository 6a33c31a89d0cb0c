//! Series operation configuration types.

mod config;

pub use config::{
    DropConfig, FlatlineConfig, MovingAverageConfig, ResampleConfig, RobustZScoreConfig,
    SmoothingConfig, SpikeConfig, ZScoreConfig,
};
