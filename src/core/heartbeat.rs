use crate::core::{Clock, HeartbeatLine, HeartbeatSummary, OpaqueToken, RandomSource, Sleeper};
use crate::domain::model::TOKEN_LEN;
use crate::utils::error::{Result, TallyError};
use std::io::Write;
use std::time::Duration;

pub const DEFAULT_BEATS: usize = 10;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartbeatSettings {
    pub beats: usize,
    pub interval: Duration,
}

impl Default for HeartbeatSettings {
    fn default() -> Self {
        Self {
            beats: DEFAULT_BEATS,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Generates one opaque token, then writes it with a timestamp once per interval.
pub struct Heartbeat<R: RandomSource, C: Clock, S: Sleeper> {
    random: R,
    clock: C,
    sleeper: S,
    settings: HeartbeatSettings,
}

impl<R: RandomSource, C: Clock, S: Sleeper> Heartbeat<R, C, S> {
    pub fn new(random: R, clock: C, sleeper: S, settings: HeartbeatSettings) -> Self {
        Self {
            random,
            clock,
            sleeper,
            settings,
        }
    }

    pub fn settings(&self) -> HeartbeatSettings {
        self.settings
    }

    pub fn generate_token(&self) -> Result<OpaqueToken> {
        let bytes = self.random.generate(TOKEN_LEN)?;
        OpaqueToken::from_bytes(&bytes)
    }

    /// Token generation failure returns before anything is written.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<HeartbeatSummary> {
        let token = self.generate_token()?;
        tracing::debug!(
            "Generated token, emitting {} beats every {:?}",
            self.settings.beats,
            self.settings.interval
        );

        let mut lines = Vec::with_capacity(self.settings.beats);
        for sequence in 0..self.settings.beats {
            let line = HeartbeatLine {
                sequence,
                timestamp: self.clock.now(),
                token,
            };
            writeln!(out, "{}", line)?;
            out.flush()?;
            lines.push(line);

            // 每次輸出後都暫停，包含最後一次
            self.sleeper.sleep(self.settings.interval).await;
        }

        Ok(HeartbeatSummary { token, lines })
    }

    /// Runs the heartbeat and reports a failure, returning the process exit code.
    ///
    /// A random generation failure is reported as a single `Error: ...` line on
    /// `out`; other failures go to stderr.
    pub async fn run_reporting<W: Write>(&self, out: &mut W) -> i32 {
        let e = match self.run(out).await {
            Ok(summary) => {
                tracing::debug!("✅ Emitted {} heartbeat lines", summary.lines.len());
                return 0;
            }
            Err(e) => e,
        };

        tracing::error!(
            "❌ Heartbeat failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        match &e {
            TallyError::GenerationError { .. } => {
                if let Err(write_err) = writeln!(out, "Error: {}", e).and_then(|_| out.flush()) {
                    tracing::error!("Failed to write diagnostic: {}", write_err);
                }
            }
            _ => eprintln!("❌ {}", e.user_friendly_message()),
        }

        e.severity().exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Local};
    use std::sync::Mutex;

    struct FixedRandom(u8);

    impl RandomSource for FixedRandom {
        fn generate(&self, len: usize) -> Result<Vec<u8>> {
            Ok(vec![self.0; len])
        }
    }

    struct ShortRandom;

    impl RandomSource for ShortRandom {
        fn generate(&self, _len: usize) -> Result<Vec<u8>> {
            Ok(vec![1, 2, 3])
        }
    }

    struct FailingRandom;

    impl RandomSource for FailingRandom {
        fn generate(&self, _len: usize) -> Result<Vec<u8>> {
            Err(TallyError::GenerationError {
                message: "entropy source unavailable".to_string(),
            })
        }
    }

    struct FrozenClock(DateTime<Local>);

    impl Clock for FrozenClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingSleeper {
        calls: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.calls.lock().unwrap().push(duration);
        }
    }

    #[tokio::test]
    async fn test_sleeps_after_every_line() {
        let heartbeat = Heartbeat::new(
            FixedRandom(0x5a),
            FrozenClock(Local::now()),
            RecordingSleeper::default(),
            HeartbeatSettings::default(),
        );
        let mut out = Vec::new();
        let summary = heartbeat.run(&mut out).await.unwrap();

        assert_eq!(summary.lines.len(), DEFAULT_BEATS);
        let calls = heartbeat.sleeper.calls.lock().unwrap();
        assert_eq!(calls.len(), DEFAULT_BEATS);
        assert!(calls.iter().all(|d| *d == DEFAULT_INTERVAL));
    }

    #[tokio::test]
    async fn test_failure_writes_nothing() {
        let heartbeat = Heartbeat::new(
            FailingRandom,
            FrozenClock(Local::now()),
            RecordingSleeper::default(),
            HeartbeatSettings::default(),
        );
        let mut out = Vec::new();
        let err = heartbeat.run(&mut out).await.unwrap_err();

        assert!(matches!(err, TallyError::GenerationError { .. }));
        assert!(out.is_empty());
        assert!(heartbeat.sleeper.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_zero_interval_run() {
        let heartbeat = Heartbeat::new(
            FixedRandom(0x01),
            FrozenClock(Local::now()),
            RecordingSleeper::default(),
            HeartbeatSettings {
                beats: 2,
                interval: Duration::ZERO,
            },
        );
        let mut out = Vec::new();
        let summary = tokio_test::block_on(heartbeat.run(&mut out)).unwrap();

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].timestamp, summary.lines[1].timestamp);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[tokio::test]
    async fn test_run_reporting_success_exit_code() {
        let heartbeat = Heartbeat::new(
            FixedRandom(0x10),
            FrozenClock(Local::now()),
            RecordingSleeper::default(),
            HeartbeatSettings {
                beats: 3,
                interval: Duration::ZERO,
            },
        );
        let mut out = Vec::new();
        let code = heartbeat.run_reporting(&mut out).await;

        assert_eq!(code, 0);
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(!output.contains("Error:"));
    }

    #[test]
    fn test_short_random_output_is_rejected() {
        let heartbeat = Heartbeat::new(
            ShortRandom,
            FrozenClock(Local::now()),
            RecordingSleeper::default(),
            HeartbeatSettings::default(),
        );
        assert!(heartbeat.generate_token().is_err());
    }
}
