use crate::core::{CountingMode, FrequencyReport, WordCount};
use std::collections::{HashMap, HashSet};

/// 預設內嵌段落
pub const DEFAULT_TEXT: &str = "However, under extreme overload, the service might not even be able to compute and serve degraded responses. At this point it may have no immediate option but to serve errors. One way to mitigate this scenario is to balance traffic across datacenters such that no datacenter receives more traffic than it has the capacity to process. For example, if a datacenter runs 100 backend tasks and each task can process up to 500 requests per second, the load balancing algorithm will not allow more than 50,000 queries per second to be sent to that datacenter. However, even this constraint can prove insufficient to avoid overload when you're operating at scale. At the end of the day, it's best to build clients and backends to handle resource restrictions gracefully: redirect when possible, serve degraded results when necessary, and handle resource errors transparently when all else fails.";

/// Lowercases the text and strips every `.`; other punctuation stays.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace('.', "")
}

/// Splits on single spaces. Consecutive spaces yield empty tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split(' ').collect()
}

/// Non-overlapping substring count. An empty needle matches at every
/// character boundary, so it counts `chars + 1`.
pub fn count_substring(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[derive(Debug, Clone, Default)]
pub struct WordFrequencyReporter {
    counting: CountingMode,
}

impl WordFrequencyReporter {
    pub fn new(counting: CountingMode) -> Self {
        Self { counting }
    }

    pub fn counting(&self) -> CountingMode {
        self.counting
    }

    pub fn report(&self, text: &str) -> FrequencyReport {
        let normalized = normalize(text);
        let mut tokens = tokenize(&normalized);
        tokens.sort_unstable();

        tracing::debug!(
            "Tokenized {} characters into {} tokens",
            normalized.len(),
            tokens.len()
        );

        let frequencies: HashMap<&str, usize> = match self.counting {
            CountingMode::WholeWord => tokens.iter().fold(HashMap::new(), |mut acc, token| {
                *acc.entry(*token).or_insert(0) += 1;
                acc
            }),
            CountingMode::Substring => HashMap::new(),
        };

        let mut already_printed = HashSet::new();
        let mut entries = Vec::new();
        for token in &tokens {
            if !already_printed.insert(*token) {
                continue;
            }
            let count = match self.counting {
                CountingMode::Substring => count_substring(&normalized, token),
                CountingMode::WholeWord => frequencies.get(token).copied().unwrap_or(0),
            };
            entries.push(WordCount {
                word: (*token).to_string(),
                count,
            });
        }

        tracing::debug!("Found {} distinct tokens", entries.len());

        FrequencyReport {
            counting: self.counting,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_only_strips_periods() {
        assert_eq!(normalize("No. No."), "no no");
        assert_eq!(normalize("Hello, World: it's."), "hello, world: it's");
    }

    #[test]
    fn test_tokenize_keeps_empty_tokens() {
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq!(tokenize(" a"), vec!["", "a"]);
    }

    #[test]
    fn test_count_substring() {
        assert_eq!(count_substring("to store", "to"), 2);
        assert_eq!(count_substring("aaaa", "aa"), 2);
        assert_eq!(count_substring("abc", ""), 4);
    }

    #[test]
    fn test_no_no_scenario() {
        let report = WordFrequencyReporter::default().report("No. No.");
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries[0].to_string(), r#"word "no" appears 2"#);
    }

    #[test]
    fn test_substring_over_counting() {
        let report = WordFrequencyReporter::new(CountingMode::Substring).report("to store");
        assert_eq!(report.get("to"), Some(2));
        assert_eq!(report.get("store"), Some(1));
    }

    #[test]
    fn test_whole_word_counting() {
        let report = WordFrequencyReporter::new(CountingMode::WholeWord).report("to store to");
        assert_eq!(report.get("to"), Some(2));
        assert_eq!(report.get("store"), Some(1));
        assert_eq!(report.counting, CountingMode::WholeWord);
    }

    #[test]
    fn test_order_is_byte_wise() {
        let report = WordFrequencyReporter::default().report("b B a 100 50,000 Zed");
        let words: Vec<&str> = report.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["100", "50,000", "a", "b", "zed"]);
    }

    #[test]
    fn test_default_text_known_counts() {
        let report = WordFrequencyReporter::default().report(DEFAULT_TEXT);
        assert_eq!(report.get("however,"), Some(2));
        assert_eq!(report.get("datacenter"), Some(4));
        assert_eq!(report.get("gracefully:"), Some(1));
        assert!(report.get("to").unwrap() > 9);
    }
}
