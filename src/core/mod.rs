pub mod heartbeat;
pub mod render;
pub mod word_frequency;

pub use crate::domain::model::{
    CountingMode, FrequencyReport, HeartbeatLine, HeartbeatSummary, OpaqueToken, ReportFormat,
    WordCount,
};
pub use crate::domain::ports::{Clock, RandomSource, Sleeper};
pub use crate::utils::error::Result;
