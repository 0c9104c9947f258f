use crate::config::TallyConfig;
use crate::core::{CountingMode, ReportFormat};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "word-frequency")]
#[command(about = "Print each distinct word of a paragraph with its occurrence count")]
pub struct WordFrequencyArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read the source text from this file instead of the embedded paragraph
    #[arg(long)]
    pub text_file: Option<String>,

    #[arg(long, value_enum)]
    pub counting: Option<CountingMode>,

    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl WordFrequencyArgs {
    /// 載入配置檔並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<TallyConfig> {
        let mut config = load_config(self.config.as_deref())?;

        if let Some(path) = &self.text_file {
            // 命令列指定檔案時取代設定檔中的 text
            config.word_frequency.text = None;
            config.word_frequency.text_file = Some(path.clone());
        }
        if let Some(counting) = self.counting {
            config.word_frequency.counting = Some(counting);
        }
        if let Some(format) = self.format {
            config.word_frequency.format = Some(format);
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "id-heartbeat")]
#[command(about = "Print one random opaque token with a timestamp at a fixed interval")]
pub struct HeartbeatArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of heartbeat lines
    #[arg(long)]
    pub beats: Option<usize>,

    /// Pause after each line, in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl HeartbeatArgs {
    pub fn resolve(&self) -> Result<TallyConfig> {
        let mut config = load_config(self.config.as_deref())?;

        if let Some(beats) = self.beats {
            config.heartbeat.beats = Some(beats);
        }
        if let Some(interval_ms) = self.interval_ms {
            config.heartbeat.interval_ms = Some(interval_ms);
        }

        Ok(config)
    }
}

fn load_config(path: Option<&str>) -> Result<TallyConfig> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TallyConfig::from_file(path)
        }
        None => Ok(TallyConfig::default()),
    }
}
