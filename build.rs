//! Build script to generate embedded word lists
//!
//! Reads the default dictionary and candidate puzzle list and generates Rust
//! source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Dictionary: whitespace-separated tokens, any number per line
    let dictionary = read_input("data/words.txt");
    generate_list(
        dictionary.split_whitespace(),
        &Path::new(&out_dir).join("dictionary.rs"),
        "DICTIONARY",
        "Default dictionary tokens in scan order",
    );

    // Puzzles: records split on newline or semicolon, first token of each
    let puzzles = read_input("data/puzzles.txt");
    generate_list(
        puzzles
            .split(['\n', ';'])
            .filter_map(|record| record.split_whitespace().next()),
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLES",
        "Precomputed candidate puzzles, center letter first",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/words.txt");
    println!("cargo:rerun-if-changed=data/puzzles.txt");
}

fn read_input(input_path: &str) -> String {
    fs::read_to_string(input_path).unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"))
}

fn generate_list<'a>(
    items: impl Iterator<Item = &'a str>,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let items: Vec<&str> = items.collect();
    let count = items.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for item in items {
        writeln!(output, "    {item:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
