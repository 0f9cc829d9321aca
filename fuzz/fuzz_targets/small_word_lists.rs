#![no_main]

use crossword_arranger::{Arrangement, Generator, SearchMode};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

/// Up to four words of up to four letters, drawn from the first five letters
/// so that most lists have somewhere to cross.
#[derive(Debug)]
struct SmallWordList {
    words: Vec<String>,
}

impl<'a> arbitrary::Arbitrary<'a> for SmallWordList {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let count: usize = u.int_in_range(1..=4)?;
        let mut words = Vec::with_capacity(count);

        for _ in 0..count {
            let len: usize = u.int_in_range(1..=4)?;
            let mut word = String::with_capacity(len);
            for _ in 0..len {
                let offset: u8 = u.int_in_range(0..=4)?;
                word.push(char::from(b'A' + offset));
            }
            words.push(word);
        }

        Ok(SmallWordList { words })
    }
}

fn runs(arrangement: &Arrangement) -> Vec<String> {
    let cells = arrangement.to_char_rows();
    let lines = cells.iter().cloned().chain(
        (0..arrangement.width()).map(|column| cells.iter().map(|row| row[column]).collect()),
    );

    let mut runs: Vec<String> = lines
        .flat_map(|line: Vec<char>| {
            line.split(|&c| c == ' ')
                .filter(|run| run.len() >= 2)
                .map(|run| run.iter().collect())
                .collect::<Vec<_>>()
        })
        .collect();
    runs.sort();
    runs
}

fuzz_target!(|input: SmallWordList| {
    let generator = Generator::new(&input.words).unwrap();
    let report = generator.run();

    let mut expected: Vec<_> = input
        .words
        .iter()
        .filter(|word| word.len() >= 2)
        .cloned()
        .collect();
    expected.sort();

    let unique: HashSet<_> = report.arrangements.iter().collect();
    assert_eq!(unique.len(), report.arrangements.len());

    for arrangement in &report.arrangements {
        assert_eq!(runs(arrangement), expected, "\n{arrangement}");
        assert_eq!(&arrangement.trim(), arrangement);
        let transpose = arrangement.transpose();
        assert!(&transpose == arrangement || !unique.contains(&transpose));
    }

    let first = generator.with_mode(SearchMode::FirstFound).run();
    match first.smallest() {
        Some(arrangement) => assert!(unique.contains(arrangement)),
        None => assert!(report.is_empty()),
    }
});
