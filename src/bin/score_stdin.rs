//! Simple CLI that reads HTML from stdin and prints the JSON report to stdout.
//!
//! An optional first argument is taken as the page URL.

use seo_score::{analyze_bytes_with_options, export, Options};
use std::io::{self, Read};

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let options = Options {
        url: std::env::args().nth(1),
        ..Options::default()
    };

    let report = analyze_bytes_with_options(&html, &options);

    match export::to_json(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
