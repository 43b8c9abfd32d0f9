use crate::signature::*;
use crate::types::*;

/// Iterates over all distinct letter subsets of a word,
/// yielding each subset as a Signature.
///
/// Subsets are enumerated per distinct letter: for each distinct
/// letter the iterator chooses how many of its occurrences (0..=count)
/// to include, so a word with letter counts c1..ck yields exactly
/// (c1+1)*(c2+1)*...*(ck+1) - 1 non-empty subsets. Each subset is
/// yielded exactly once, even when the word has repeated letters
/// (naive removal by position would yield duplicates in that case).
///
/// The yield order is an implementation artifact; callers that need
/// the canonical order (length ascending, then lexicographic) must
/// sort, as `AnagramModel::enumerate_subsets()` does.
///
/// # Examples
///
/// ```
/// # use jumble::*;
/// let subsets: Vec<Signature> = SubsetIterator::new("dog").collect();
/// assert_eq!(subsets.len(), 7);
/// ```
pub struct SubsetIterator {
    letters: Vec<(char, usize)>,
    chosen: Vec<usize>,
    exhausted: bool,
}

impl SubsetIterator {
    pub fn new(word: &str) -> SubsetIterator {
        let letters = letter_counts(&word.signature());
        let chosen = vec![0; letters.len()];
        SubsetIterator {
            letters,
            chosen,
            exhausted: false,
        }
    }

    ///Advance the per-letter counts to the next combination,
    ///returns false once all combinations have been visited
    fn advance(&mut self) -> bool {
        for (i, (_, count)) in self.letters.iter().enumerate() {
            if self.chosen[i] < *count {
                self.chosen[i] += 1;
                return true;
            }
            self.chosen[i] = 0;
        }
        false
    }
}

impl Iterator for SubsetIterator {
    type Item = Signature;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.letters.is_empty() {
            return None;
        }
        //advancing before building skips the empty subset
        if !self.advance() {
            self.exhausted = true;
            return None;
        }
        let mut subset = String::with_capacity(self.chosen.iter().sum());
        for (i, (letter, _)) in self.letters.iter().enumerate() {
            for _ in 0..self.chosen[i] {
                subset.push(*letter);
            }
        }
        Some(subset)
    }
}
