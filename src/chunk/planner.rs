//! Greedy chunk planning
//!
//! Packs consecutive sentences into chunks that stay at or under a
//! character target. Sentences are never split or reordered, so the
//! chunk list is always an in-order partition of the input.

use crate::types::Sentence;

/// A contiguous run of sentences
///
/// Holds positions into the sentence slice it was planned over rather
/// than owned text, plus the size totals the budget math needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of the first sentence (inclusive)
    pub start: usize,
    /// Position past the last sentence (exclusive)
    pub end: usize,
    /// Total characters across the chunk's sentences
    pub char_len: usize,
    /// Total words across the chunk's sentences
    pub word_count: usize,
}

impl Chunk {
    /// Number of sentences in the chunk
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the chunk holds no sentences
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the chunk's sentences out of the slice it was planned over
    pub fn sentences<'a>(&self, sentences: &'a [Sentence]) -> &'a [Sentence] {
        &sentences[self.start..self.end]
    }
}

/// Plans character-bounded chunks over a sentence sequence
#[derive(Debug, Clone)]
pub struct ChunkPlanner {
    char_target: usize,
}

impl ChunkPlanner {
    /// Create a planner with the given character target per chunk
    pub fn new(char_target: usize) -> Self {
        Self {
            char_target: char_target.max(1),
        }
    }

    /// Pack sentences greedily into chunks
    ///
    /// A chunk closes when adding the next sentence would push it past the
    /// character target. A sentence longer than the target still gets
    /// placed, alone in its own chunk, so no input is ever dropped.
    pub fn plan(&self, sentences: &[Sentence]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        if sentences.is_empty() {
            return chunks;
        }

        let mut start = 0;
        let mut char_len = 0;
        let mut word_count = 0;

        for (pos, sentence) in sentences.iter().enumerate() {
            if pos > start && char_len + sentence.char_len > self.char_target {
                chunks.push(Chunk {
                    start,
                    end: pos,
                    char_len,
                    word_count,
                });
                start = pos;
                char_len = 0;
                word_count = 0;
            }
            char_len += sentence.char_len;
            word_count += sentence.word_count;
        }

        chunks.push(Chunk {
            start,
            end: sentences.len(),
            char_len,
            word_count,
        });
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn make_sentence(index: usize, text: &str) -> Sentence {
        Sentence::new(index, text.to_string(), FxHashMap::default())
    }

    fn sized_sentence(index: usize, chars: usize) -> Sentence {
        make_sentence(index, &"x".repeat(chars))
    }

    #[test]
    fn test_everything_fits_in_one_chunk() {
        let sentences = vec![sized_sentence(0, 30), sized_sentence(1, 40)];
        let chunks = ChunkPlanner::new(100).plan(&sentences);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].end, 2);
        assert_eq!(chunks[0].char_len, 70);
    }

    #[test]
    fn test_splits_at_character_target() {
        let sentences = vec![
            sized_sentence(0, 60),
            sized_sentence(1, 60),
            sized_sentence(2, 60),
        ];
        let chunks = ChunkPlanner::new(100).plan(&sentences);

        // 60 + 60 exceeds the target, so each sentence closes a chunk
        assert_eq!(chunks.len(), 3);
        for (pos, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.start, pos);
            assert_eq!(chunk.len(), 1);
        }
    }

    #[test]
    fn test_exact_fit_stays_open() {
        let sentences = vec![sized_sentence(0, 50), sized_sentence(1, 50)];
        let chunks = ChunkPlanner::new(100).plan(&sentences);

        // Reaching the target exactly does not close the chunk
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].char_len, 100);
    }

    #[test]
    fn test_oversized_sentence_gets_own_chunk() {
        let sentences = vec![
            sized_sentence(0, 20),
            sized_sentence(1, 500),
            sized_sentence(2, 20),
        ];
        let chunks = ChunkPlanner::new(100).plan(&sentences);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].len(), 1);
        assert_eq!(chunks[1].char_len, 500);
    }

    #[test]
    fn test_chunks_partition_input_in_order() {
        let sentences: Vec<_> = (0..17).map(|i| sized_sentence(i, 37)).collect();
        let chunks = ChunkPlanner::new(120).plan(&sentences);

        let mut expected_start = 0;
        for chunk in &chunks {
            assert_eq!(chunk.start, expected_start);
            assert!(chunk.end > chunk.start);
            expected_start = chunk.end;
        }
        assert_eq!(expected_start, sentences.len());

        let total_chars: usize = chunks.iter().map(|c| c.char_len).sum();
        assert_eq!(total_chars, 17 * 37);
    }

    #[test]
    fn test_word_counts_accumulate() {
        let sentences = vec![
            make_sentence(0, "one two three"),
            make_sentence(1, "four five"),
        ];
        let chunks = ChunkPlanner::new(1000).plan(&sentences);

        assert_eq!(chunks[0].word_count, 5);
    }

    #[test]
    fn test_empty_input() {
        let chunks = ChunkPlanner::new(100).plan(&[]);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_sentences_accessor() {
        let sentences = vec![
            sized_sentence(0, 80),
            sized_sentence(1, 80),
            sized_sentence(2, 80),
        ];
        let chunks = ChunkPlanner::new(100).plan(&sentences);

        assert_eq!(chunks.len(), 3);
        let slice = chunks[1].sentences(&sentences);
        assert_eq!(slice.len(), 1);
        assert_eq!(slice[0].index, 1);
    }
}
