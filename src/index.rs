use std::collections::HashMap;

use rayon::prelude::*;

use crate::signature::*;
use crate::types::*;

///Chunk size for parallel index construction
const PARALLEL_CHUNKSIZE: usize = 8192;

///Maps a signature to all words in the wordlist instantiating it,
///in wordlist order
pub type SignatureBucket = HashMap<Signature, Vec<String>>;

///The dictionary index: the wordlist partitioned by word length,
///then keyed by signature. Built once per run, read-only afterwards.
#[derive(Default)]
pub struct DictionaryIndex {
    buckets: HashMap<usize, SignatureBucket>,
    entries: usize,
}

impl DictionaryIndex {
    /// Build the index from a wordlist. Each word is case-folded; words of
    /// length 0 or longer than `max_length` can never match a letter subset
    /// of the query word and are dropped. Duplicates in the wordlist are
    /// retained as separate entries. Order of words within a bucket is
    /// wordlist order, regardless of thread count.
    pub fn build(words: &[String], max_length: usize, single_thread: bool) -> DictionaryIndex {
        let mut index = DictionaryIndex::default();
        if single_thread || words.len() <= PARALLEL_CHUNKSIZE {
            for word in words {
                index.add(word, max_length);
            }
        } else {
            //build a partial index per chunk, then merge the partials in
            //wordlist order so bucket order matches a single-threaded build
            let partials: Vec<DictionaryIndex> = words
                .par_chunks(PARALLEL_CHUNKSIZE)
                .map(|chunk| {
                    let mut partial = DictionaryIndex::default();
                    for word in chunk {
                        partial.add(word, max_length);
                    }
                    partial
                })
                .collect();
            for partial in partials {
                index.merge(partial);
            }
        }
        index
    }

    fn add(&mut self, word: &str, max_length: usize) {
        let word = word.case_fold();
        let length = word.chars().count();
        if length == 0 || length > max_length {
            return;
        }
        let signature = word.signature();
        self.buckets
            .entry(length)
            .or_default()
            .entry(signature)
            .or_default()
            .push(word);
        self.entries += 1;
    }

    fn merge(&mut self, other: DictionaryIndex) {
        for (length, bucket) in other.buckets {
            let target = self.buckets.entry(length).or_default();
            for (signature, words) in bucket {
                target.entry(signature).or_default().extend(words);
            }
        }
        self.entries += other.entries;
    }

    ///Get all words of the given length sharing the given signature.
    ///Absent keys yield an empty slice, never an error.
    pub fn lookup(&self, length: usize, signature: &str) -> &[String] {
        self.buckets
            .get(&length)
            .and_then(|bucket| bucket.get(signature))
            .map(|words| words.as_slice())
            .unwrap_or(&[])
    }

    ///The number of words held in the index
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    ///The number of length buckets in the index
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
