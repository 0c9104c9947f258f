use crate::utils::error::{Result, TallyError};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte length of an [`OpaqueToken`].
pub const TOKEN_LEN: usize = 16;

// 4-2-2-2-6 bytes per hyphen-delimited group
const TOKEN_GROUPS: [usize; 5] = [4, 2, 2, 2, 6];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word {} appears {}", quote(&self.word), self.count)
    }
}

/// Double-quotes `text`, escaping quotes, backslashes and control characters.
/// ASCII controls without a short escape become `\xNN`, other controls `\uNNNN`.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0b}' => quoted.push_str("\\v"),
            c if c.is_ascii_control() => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub counting: CountingMode,
    pub entries: Vec<WordCount>,
}

impl FrequencyReport {
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How occurrences of a token are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum CountingMode {
    /// Non-overlapping substring matches across the whole normalized text.
    /// Short tokens contained in longer words are over-counted.
    #[default]
    Substring,
    /// Frequency of the token in the token list.
    WholeWord,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

/// A 16-byte random identifier laid out like a UUID.
///
/// No version or variant bits are set, so this is not an RFC 4122 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpaqueToken([u8; TOKEN_LEN]);

impl OpaqueToken {
    pub fn new(bytes: [u8; TOKEN_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; TOKEN_LEN] =
            bytes
                .try_into()
                .map_err(|_| TallyError::GenerationError {
                    message: format!("expected {} random bytes, got {}", TOKEN_LEN, bytes.len()),
                })?;
        Ok(Self(array))
    }
}

impl fmt::Display for OpaqueToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut offset = 0;
        for (index, size) in TOKEN_GROUPS.iter().enumerate() {
            if index > 0 {
                f.write_str("-")?;
            }
            for byte in &self.0[offset..offset + size] {
                write!(f, "{:02X}", byte)?;
            }
            offset += size;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatLine {
    pub sequence: usize,
    pub timestamp: DateTime<Local>,
    pub token: OpaqueToken,
}

impl fmt::Display for HeartbeatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp.format("%Y/%m/%d %H:%M:%S"),
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.9f %:z"),
            self.token
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatSummary {
    pub token: OpaqueToken,
    pub lines: Vec<HeartbeatLine>,
}
