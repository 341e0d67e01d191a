//! Build script to generate the embedded stopword list
//!
//! Reads `data/stopwords.txt` (one word per line, `#` starts a comment) and
//! writes an uppercase, deduplicated const array into `OUT_DIR`.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const STOPWORDS_FILE: &str = "data/stopwords.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content = fs::read_to_string(STOPWORDS_FILE)
        .unwrap_or_else(|e| panic!("Failed to read {STOPWORDS_FILE}: {e}"));
    let words = parse_words(&content);

    let source = render_const(
        "STOPWORDS",
        "Curated English stopwords excluded from candidate extraction",
        &words,
    );
    let output_path = Path::new(&out_dir).join("stopwords.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={STOPWORDS_FILE}");
}

fn parse_words(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(|word| {
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Stopword {word:?} in {STOPWORDS_FILE} must be ASCII letters only"
            );
            word.to_ascii_uppercase()
        })
        .collect()
}

fn render_const(const_name: &str, doc_comment: &str, words: &BTreeSet<String>) -> String {
    let mut out = String::new();
    writeln!(out, "// Generated from {STOPWORDS_FILE}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// {doc_comment}").unwrap();
    writeln!(out, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(out, "    \"{word}\",").unwrap();
    }
    writeln!(out, "];").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Number of words in {const_name}").unwrap();
    writeln!(out, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
    out
}
