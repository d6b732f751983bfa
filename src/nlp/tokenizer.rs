//! Sentence tokenization
//!
//! Splits raw text into ordered sentences and extracts per-sentence term
//! counts for similarity scoring. Boundary detection is a single
//! deterministic pass: a terminator run (`.`, `!`, `?` or a fullwidth CJK
//! form) closes a sentence, guarded against abbreviations, initials,
//! initialisms and decimal numbers. Trailing closing quotes and brackets
//! stay with the sentence they end.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Words whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "rep", "sen", "st", "sr", "jr", "jan", "feb",
    "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "wed",
    "thu", "fri", "sat", "sun", "vs", "etc", "inc", "ltd", "co", "corp", "dept", "est", "fig",
    "al", "ed", "eds", "vol", "no", "pp", "approx",
];

/// Splits documents into sentences
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    stopwords: StopwordFilter,
    abbreviations: FxHashSet<&'static str>,
    max_sentences: usize,
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTokenizer {
    /// Create a tokenizer with English stopwords and no sentence cap
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
            max_sentences: usize::MAX,
        }
    }

    /// Replace the stopword filter used during term extraction
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Cap the number of sentences produced
    ///
    /// Input past the cap is dropped silently; the first `max_sentences`
    /// sentences are kept.
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences.max(1);
        self
    }

    /// Tokenize a document into sentences in document order
    ///
    /// Any non-whitespace input yields at least one sentence; text after
    /// the final terminator becomes the last sentence.
    pub fn tokenize(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        if text.trim().is_empty() {
            return sentences;
        }

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let n = chars.len();
        let mut start_byte = 0;
        let mut i = 0;

        while i < n {
            if !is_terminator(chars[i].1) {
                i += 1;
                continue;
            }

            // Extend over the whole terminator run ("...", "?!"), then any
            // trailing closing quotes or brackets.
            let mut run_end = i;
            let mut has_fullwidth = is_fullwidth_terminator(chars[i].1);
            while run_end + 1 < n && is_terminator(chars[run_end + 1].1) {
                run_end += 1;
                has_fullwidth |= is_fullwidth_terminator(chars[run_end].1);
            }
            let mut tail_end = run_end;
            while tail_end + 1 < n && is_closing_mark(chars[tail_end + 1].1) {
                tail_end += 1;
            }

            // Abbreviation guards only apply to a lone period.
            let single_period = run_end == i && chars[i].1 == '.';
            let boundary =
                has_fullwidth || self.is_ascii_boundary(text, &chars, i, tail_end, single_period);

            if boundary {
                let end_byte = chars[tail_end].0 + chars[tail_end].1.len_utf8();
                self.push_sentence(&mut sentences, &text[start_byte..end_byte]);
                start_byte = end_byte;

                if sentences.len() >= self.max_sentences {
                    if !text[start_byte..].trim().is_empty() {
                        debug!(
                            max_sentences = self.max_sentences,
                            "sentence cap reached, dropping remaining input"
                        );
                    }
                    return sentences;
                }
            }

            i = tail_end + 1;
        }

        self.push_sentence(&mut sentences, &text[start_byte..]);
        sentences
    }

    /// Decide whether an ASCII terminator run ends a sentence
    ///
    /// The run must be followed by whitespace (or end of input) and the
    /// next non-whitespace character must plausibly open a sentence. A
    /// lone period is additionally held back after abbreviations,
    /// single-letter initials and dotted initialisms.
    fn is_ascii_boundary(
        &self,
        text: &str,
        chars: &[(usize, char)],
        term_idx: usize,
        tail_end: usize,
        single_period: bool,
    ) -> bool {
        let next = match chars.get(tail_end + 1) {
            Some(&(_, c)) => c,
            None => return true,
        };
        if !next.is_whitespace() {
            return false;
        }

        let mut k = tail_end + 2;
        while k < chars.len() && chars[k].1.is_whitespace() {
            k += 1;
        }
        if k < chars.len() {
            let opener = chars[k].1;
            if !(opener.is_uppercase() || opener.is_numeric() || is_opening_mark(opener)) {
                return false;
            }
        }

        if single_period {
            let word = preceding_word(text, chars, term_idx);
            let word = word.trim_start_matches(|c: char| is_opening_mark(c));
            if word.contains('.') {
                return false;
            }
            let mut word_chars = word.chars();
            if let (Some(first), None) = (word_chars.next(), word_chars.next()) {
                if first.is_alphabetic() {
                    return false;
                }
            }
            if self.abbreviations.contains(word.to_lowercase().as_str()) {
                return false;
            }
        }

        true
    }

    fn push_sentence(&self, sentences: &mut Vec<Sentence>, raw: &str) {
        let normalized = normalize_whitespace(raw);
        if normalized.is_empty() {
            return;
        }
        let terms = self.extract_terms(&normalized);
        sentences.push(Sentence::new(sentences.len(), normalized, terms));
    }

    /// Lower-cased, stopword-filtered term counts for one sentence
    fn extract_terms(&self, text: &str) -> FxHashMap<String, u32> {
        let mut terms = FxHashMap::default();
        for word in text.unicode_words() {
            let term = word.to_lowercase();
            if self.stopwords.is_stopword(&term) {
                continue;
            }
            *terms.entry(term).or_insert(0) += 1;
        }
        terms
    }
}

/// Collapse whitespace runs into single spaces and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The word immediately before `chars[term_idx]`, bounded by whitespace
fn preceding_word<'a>(text: &'a str, chars: &[(usize, char)], term_idx: usize) -> &'a str {
    let mut k = term_idx;
    while k > 0 && !chars[k - 1].1.is_whitespace() {
        k -= 1;
    }
    &text[chars[k].0..chars[term_idx].0]
}

fn is_terminator(ch: char) -> bool {
    is_ascii_terminator(ch) || is_fullwidth_terminator(ch)
}

fn is_ascii_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn is_fullwidth_terminator(ch: char) -> bool {
    matches!(ch, '。' | '！' | '？')
}

fn is_closing_mark(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '”' | '’' | ')' | ']' | '»')
}

fn is_opening_mark(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '“' | '‘' | '(' | '[' | '«')
}
