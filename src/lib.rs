pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{HeartbeatArgs, WordFrequencyArgs};

pub use crate::adapters::{OsRandomSource, SystemClock, TokioSleeper};
pub use crate::config::TallyConfig;
pub use crate::core::{heartbeat::Heartbeat, word_frequency::WordFrequencyReporter};
pub use crate::utils::error::{Result, TallyError};
