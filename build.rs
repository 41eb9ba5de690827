//! Build script to generate embedded word lists
//!
//! Reads the per-language word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LANGUAGES: &[&str] = &["en", "de"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for lang in LANGUAGES {
        let suffix = lang.to_uppercase();

        generate_word_list(
            &format!("data/{lang}/answers.txt"),
            &Path::new(&out_dir).join(format!("answers_{lang}.rs")),
            &format!("ANSWERS_{suffix}"),
            &format!("Candidate answer words ({lang})"),
        );

        generate_word_list(
            &format!("data/{lang}/valid.txt"),
            &Path::new(&out_dir).join(format!("valid_{lang}.rs")),
            &format!("VALID_{suffix}"),
            &format!("Additional guessable words that are never answers ({lang})"),
        );

        println!("cargo:rerun-if-changed=data/{lang}/answers.txt");
        println!("cargo:rerun-if-changed=data/{lang}/valid.txt");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
