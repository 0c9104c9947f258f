use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::time::Duration;

/// Source of random bytes (allows failing or deterministic sources in tests)
pub trait RandomSource: Send + Sync {
    fn generate(&self, len: usize) -> Result<Vec<u8>>;
}

/// Wall-clock reader
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
