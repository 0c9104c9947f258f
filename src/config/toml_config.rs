use crate::core::heartbeat::{HeartbeatSettings, DEFAULT_BEATS};
use crate::core::word_frequency::DEFAULT_TEXT;
use crate::core::{CountingMode, ReportFormat};
use crate::utils::error::{Result, TallyError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_INTERVAL_MS: u64 = 3_600_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub word_frequency: WordFrequencyConfig,
    pub heartbeat: HeartbeatConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordFrequencyConfig {
    pub text: Option<String>,
    pub text_file: Option<String>,
    pub counting: Option<CountingMode>,
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartbeatConfig {
    pub beats: Option<usize>,
    pub interval_ms: Option<u64>,
}

impl TallyConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TallyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TallyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TALLY_TEXT})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TallyError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得要統計的文字：text_file > text > 內嵌段落
    pub fn source_text(&self) -> Result<String> {
        if let Some(path) = &self.word_frequency.text_file {
            tracing::debug!("Reading source text from {}", path);
            return Ok(std::fs::read_to_string(path)?);
        }
        Ok(self
            .word_frequency
            .text
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT.to_string()))
    }

    pub fn counting(&self) -> CountingMode {
        self.word_frequency.counting.unwrap_or_default()
    }

    pub fn format(&self) -> ReportFormat {
        self.word_frequency.format.unwrap_or_default()
    }

    pub fn beats(&self) -> usize {
        self.heartbeat.beats.unwrap_or(DEFAULT_BEATS)
    }

    pub fn interval(&self) -> Duration {
        self.heartbeat
            .interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| HeartbeatSettings::default().interval)
    }

    pub fn heartbeat_settings(&self) -> HeartbeatSettings {
        HeartbeatSettings {
            beats: self.beats(),
            interval: self.interval(),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_exclusive(
            "word_frequency.text",
            &self.word_frequency.text,
            "word_frequency.text_file",
            &self.word_frequency.text_file,
        )?;

        if let Some(path) = &self.word_frequency.text_file {
            validation::validate_path("word_frequency.text_file", path)?;
        }

        if let Some(beats) = self.heartbeat.beats {
            validation::validate_positive_number("heartbeat.beats", beats, 1)?;
        }

        if let Some(interval_ms) = self.heartbeat.interval_ms {
            validation::validate_range("heartbeat.interval_ms", interval_ms, 0, MAX_INTERVAL_MS)?;
        }

        Ok(())
    }
}

impl Validate for TallyConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
