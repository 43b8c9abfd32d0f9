extern crate clap;
extern crate simple_error;

use std::process::exit;

use clap::{App, Arg};
use simple_error::SimpleError;

use jumble::*;

fn run(
    wordlist_file: &str,
    word: &str,
    params: SolverParams,
    debug: bool,
) -> Result<(), SimpleError> {
    let mut model = AnagramModel::new(params, debug);
    model.read_wordlist(wordlist_file).map_err(|err| {
        SimpleError::new(format!(
            "Unable to read wordlist {}: {}",
            wordlist_file, err
        ))
    })?;
    model.build(word.chars().count());
    for anagram in model.find_anagrams(word) {
        println!("{}", anagram);
    }
    Ok(())
}

fn main() {
    let args = App::new("Jumble")
        .version("0.1")
        .about("Finds every word in a wordlist that can be formed from the letters of a given word, or from any subset of those letters")
        .arg(
            Arg::with_name("wordlist")
                .help("Wordlist file, one word per line")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name("word")
                .help("The word to unscramble")
                .index(2)
                .required(true),
        )
        .arg(
            Arg::with_name("single-thread")
                .long("single-thread")
                .short("1")
                .help("Use only a single thread instead of leveraging multiple cores"),
        )
        .arg(
            Arg::with_name("debug")
                .long("debug")
                .short("D")
                .help("Print debug information to standard error"),
        )
        .get_matches();

    let mut params = SolverParams::default();
    if args.is_present("single-thread") {
        params = params.with_single_thread();
    }

    if let Err(err) = run(
        args.value_of("wordlist").expect("wordlist argument"),
        args.value_of("word").expect("word argument"),
        params,
        args.is_present("debug"),
    ) {
        eprintln!("ERROR: {}", err);
        exit(1);
    }
}
