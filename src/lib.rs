extern crate rayon;

use std::fs::File;
use std::io::{BufRead, BufReader};

use rayon::prelude::*;

pub mod index;
pub mod iterators;
pub mod signature;
pub mod types;

pub use crate::index::*;
pub use crate::iterators::*;
pub use crate::signature::*;
pub use crate::types::*;

pub struct AnagramModel {
    ///All words read from the word sources, in source order
    pub wordlist: Wordlist,

    ///The dictionary index, populated by build()
    pub index: DictionaryIndex,

    pub params: SolverParams,

    pub debug: bool,
}

impl AnagramModel {
    pub fn new(params: SolverParams, debug: bool) -> AnagramModel {
        AnagramModel {
            wordlist: Vec::new(),
            index: DictionaryIndex::default(),
            params,
            debug,
        }
    }

    ///Read a wordlist from a file, one word per line; surrounding whitespace
    ///is stripped, empty lines are skipped. May be called multiple times to
    ///combine wordlists prior to build().
    pub fn read_wordlist(&mut self, filename: &str) -> Result<(), std::io::Error> {
        if self.debug {
            eprintln!("Reading wordlist from {}...", filename);
        }
        let f = File::open(filename)?;
        let f_buffer = BufReader::new(f);
        for line in f_buffer.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                self.wordlist.push(word.to_string());
            }
        }
        if self.debug {
            eprintln!(" - Wordlist now holds {} words", self.wordlist.len());
        }
        Ok(())
    }

    ///Add a single word to the wordlist (prior to build())
    pub fn add_word(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.wordlist.push(word.to_string());
        }
    }

    /// Build the dictionary index for queries up to the given length. Words
    /// longer than `max_length` are dropped: they can never be an anagram of
    /// a subset of the query's letters. Queries longer than `max_length`
    /// against this index will miss their longer subsets.
    pub fn build(&mut self, max_length: usize) {
        if self.debug {
            eprintln!("Computing signatures for all words in the wordlist...");
        }
        self.index = DictionaryIndex::build(&self.wordlist, max_length, self.params.single_thread);
        if self.debug {
            eprintln!(
                " - Indexed {} words over {} length buckets",
                self.index.len(),
                self.index.bucket_count()
            );
        }
    }

    /// Enumerate the distinct subset signatures of the query word, in
    /// canonical order: subset length ascending, then lexicographic within a
    /// length. Single-letter subsets are included only when the letter is a
    /// valid word on its own (see SolverParams). The returned vector never
    /// contains duplicates.
    pub fn enumerate_subsets(&self, query: &str) -> Vec<Signature> {
        let query = query.case_fold();
        let mut subsets: Vec<Signature> = SubsetIterator::new(&query)
            .filter(|subset| {
                let mut chars = subset.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => self.params.is_valid_single_letter(letter),
                    _ => true,
                }
            })
            .collect();
        subsets.sort_unstable_by(|a, b| {
            a.chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| a.cmp(b))
        });
        subsets
    }

    /// Find all words in the index that are anagrams of the query word or of
    /// any subset of its letters. The query word itself is never part of the
    /// result, regardless of casing. Matches appear in subset enumeration
    /// order (see enumerate_subsets()), and within one subset in wordlist
    /// order. An empty query trivially yields an empty result.
    pub fn find_anagrams(&self, query: &str) -> Vec<String> {
        let query = query.case_fold();
        let subsets = self.enumerate_subsets(&query);
        if self.debug {
            eprintln!(
                "(matching {} subset signatures for query {})",
                subsets.len(),
                query
            );
        }
        if self.params.single_thread {
            let mut results = Vec::new();
            for subset in subsets.iter() {
                self.match_subset(subset, &query, &mut results);
            }
            results
        } else {
            //indexed parallel map; per-subset slots keep the canonical order
            let slots: Vec<Vec<String>> = subsets
                .par_iter()
                .map(|subset| {
                    let mut matches = Vec::new();
                    self.match_subset(subset, &query, &mut matches);
                    matches
                })
                .collect();
            slots.into_iter().flatten().collect()
        }
    }

    ///Append all index entries matching one subset signature, excluding the
    ///query word itself
    fn match_subset(&self, subset: &str, query: &str, results: &mut Vec<String>) {
        for word in self.index.lookup(subset.chars().count(), subset) {
            if word != query {
                results.push(word.clone());
            }
        }
    }

    ///Get all words in the index sharing the given word's full signature
    pub fn get_anagram_instances(&self, text: &str) -> &[String] {
        let text = text.case_fold();
        self.index
            .lookup(text.chars().count(), &text.signature())
    }

    ///Tests if the index holds a specific word
    pub fn has(&self, text: &str) -> bool {
        let text = text.case_fold();
        self.get_anagram_instances(&text)
            .iter()
            .any(|word| word == &text)
    }
}
