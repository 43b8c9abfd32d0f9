///The canonical letter signature of a word or letter subset: its letters,
///lowercased and sorted. Two words are anagrams iff their signatures are equal.
pub type Signature = String;

///A wordlist as read from a word source, in source order
pub type Wordlist = Vec<String>;

///Letters that form a valid single-letter word in English
pub const SINGLE_LETTER_WORDS: &[char] = &['a', 'i'];

#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Letters that count as words on their own; single-letter subsets outside
    /// this set are never reported as anagrams. Defaults to 'a' and 'i', the
    /// only single-letter words in common English use. Other languages or
    /// dictionaries may substitute their own set.
    pub single_letter_words: Vec<char>,

    /// Use only a single thread instead of leveraging multiple cores (lowers
    /// resource use at the cost of performance on large wordlists)
    pub single_thread: bool,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            single_letter_words: SINGLE_LETTER_WORDS.to_vec(),
            single_thread: false,
        }
    }
}

impl SolverParams {
    pub fn with_single_letter_words(mut self, letters: &[char]) -> Self {
        self.single_letter_words = letters.to_vec();
        self
    }

    pub fn with_single_thread(mut self) -> Self {
        self.single_thread = true;
        self
    }

    ///Tests whether a letter is a valid word on its own
    pub fn is_valid_single_letter(&self, letter: char) -> bool {
        self.single_letter_words.contains(&letter)
    }
}
