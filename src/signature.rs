use crate::types::*;

///Trait for objects that can be reduced to a letter signature (string-like)
pub trait Signable {
    fn signature(&self) -> Signature;
    fn case_fold(&self) -> String;
}

impl Signable for str {
    ///Compute the canonical signature for a given string: its letters,
    ///lowercased and sorted
    ///
    /// # Examples
    ///
    /// ```
    /// # use jumble::*;
    /// assert_eq!("dog".signature(), "dgo");
    /// assert_eq!("stressed".signature(), "desserts".signature());
    /// ```
    fn signature(&self) -> Signature {
        let mut letters: Vec<char> = self.case_fold().chars().collect();
        letters.sort_unstable();
        letters.into_iter().collect()
    }

    ///Lowercase a string, leaving letter order untouched
    fn case_fold(&self) -> String {
        self.to_lowercase()
    }
}

///Count the occurrences of each distinct letter in a signature.
///Assumes its input is sorted (as signatures are), so equal letters
///are adjacent.
pub fn letter_counts(signature: &str) -> Vec<(char, usize)> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    for c in signature.chars() {
        match counts.last_mut() {
            Some((letter, count)) if *letter == c => *count += 1,
            _ => counts.push((c, 1)),
        }
    }
    counts
}
