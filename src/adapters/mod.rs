// Adapters layer: system-backed implementations of the domain ports.

use crate::domain::ports::{Clock, RandomSource, Sleeper};
use crate::utils::error::{Result, TallyError};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use rand::rngs::OsRng;
use rand::RngCore;
use std::time::Duration;

/// Operating system entropy
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn generate(&self, len: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| TallyError::GenerationError {
                message: e.to_string(),
            })?;
        Ok(bytes)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
