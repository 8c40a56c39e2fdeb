//! Build script to embed the default dictionaries
//!
//! Turns `data/answers.txt` and `data/allowed.txt` (one word per line) into
//! `&[&str]` constants under `OUT_DIR`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const DICTIONARIES: &[(&str, &str, &str, &str)] = &[
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Default answer dictionary: words that can be the secret",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Default guess dictionary: every word accepted as a guess",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");

    for &(input, output, const_name, doc) in DICTIONARIES {
        let source = embed_word_list(input, const_name, doc);
        let path = Path::new(&out_dir).join(output);
        fs::write(&path, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
        println!("cargo:rerun-if-changed={input}");
    }
}

fn embed_word_list(input: &str, const_name: &str, doc: &str) -> String {
    let content =
        fs::read_to_string(input).unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .collect();

    let mut source = String::new();
    let _ = writeln!(source, "// Generated from {input}");
    let _ = writeln!(source);
    let _ = writeln!(source, "/// {doc}");
    let _ = writeln!(source, "pub const {const_name}: &[&str] = &[");
    for word in &words {
        let _ = writeln!(source, "    {word:?},");
    }
    let _ = writeln!(source, "];");
    let _ = writeln!(source);
    let _ = writeln!(source, "/// Number of words in {const_name}");
    let _ = writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len());
    source
}
