//! Arrange words into crosswords
//! Usage:
//!
//! ```bash
//! cargo run --release --example crossword smallest cross,word sow row
//! ```
//!
//! The first argument is the search mode: `exhaustive`, `first` or
//! `smallest`. Set `RUST_LOG=debug` to see the statistics of the run.

use crossword_arranger::{Arrangement, Generator, SearchMode};

fn print_arrangement(arrangement: &Arrangement) {
    println!("{}x{}", arrangement.height(), arrangement.width());
    println!("{arrangement}");
    println!();
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((mode, words)) = args.split_first() else {
        eprintln!("mode and words needed");
        std::process::exit(1);
    };

    let mode: SearchMode = match mode.parse() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let words: Vec<&str> = words
        .iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    let generator = match Generator::new(words) {
        Ok(generator) => generator.with_mode(mode),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let report = generator.run_with(|arrangement| {
        println!("Smallest so far:");
        print_arrangement(arrangement);
    });
    log::debug!("{:?}", report.statistics);

    match mode {
        SearchMode::Exhaustive => {
            println!("{} arrangements", report.arrangements.len());
            for arrangement in &report.arrangements {
                print_arrangement(arrangement);
            }
        }
        SearchMode::FirstFound | SearchMode::SmallestStreaming => match report.smallest() {
            Some(arrangement) => print_arrangement(arrangement),
            None => println!("No arrangement found"),
        },
    }
}
