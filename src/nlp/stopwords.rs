//! Stopword filtering
//!
//! Multi-language stopword sets backed by the `stop-words` crate, with
//! support for caller-supplied additions. Filters are built once at
//! summarizer construction and are read-only afterwards.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// An immutable set of stopwords
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Stopwords, stored lowercase
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a filter for the given ISO 639-1 language code
    ///
    /// Unknown codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load(language),
        }
    }

    /// Create a filter for a language plus caller-supplied extra words
    pub fn with_additional(language: &str, extra: &[String]) -> Self {
        let mut stopwords = Self::load(language);
        stopwords.extend(extra.iter().map(|w| w.to_lowercase()));
        Self { stopwords }
    }

    /// Create an empty filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a fixed word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check whether a word is a stopword
    ///
    /// Matching is case-insensitive; already-lowercase input avoids the
    /// extra allocation.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        if word.chars().any(|c| c.is_uppercase()) {
            return self.stopwords.contains(&word.to_lowercase());
        }
        false
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
