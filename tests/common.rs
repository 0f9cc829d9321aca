use crossword_arranger::{Arrangement, Generator, SearchMode};
use std::collections::{HashSet, VecDeque};

/// Turn on logging for a test, ignoring the error if another test in the same
/// binary already did.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Read every maximal run of two or more letters across the rows and down the
/// columns of an arrangement, sorted.
pub fn read_words(arrangement: &Arrangement) -> Vec<String> {
    fn close(run: &mut String, words: &mut Vec<String>) {
        if run.len() >= 2 {
            words.push(run.clone());
        }
        run.clear();
    }

    let cells = arrangement.to_char_rows();
    let mut words = Vec::new();
    let mut run = String::new();

    for row in &cells {
        for &c in row {
            if c == ' ' {
                close(&mut run, &mut words);
            } else {
                run.push(c);
            }
        }
        close(&mut run, &mut words);
    }

    for column in 0..arrangement.width() {
        for row in &cells {
            let c = row[column];
            if c == ' ' {
                close(&mut run, &mut words);
            } else {
                run.push(c);
            }
        }
        close(&mut run, &mut words);
    }

    words.sort();
    words
}

/// The words an arrangement of `words` has to spell, sorted.
pub fn expected_words(words: &[&str]) -> Vec<String> {
    let mut expected: Vec<_> = words
        .iter()
        .filter(|word| word.len() >= 2)
        .map(|word| word.to_ascii_uppercase())
        .collect();
    expected.sort();
    expected
}

/// Return true if every letter can be reached from every other letter through
/// horizontally or vertically adjacent letters.
pub fn is_connected(arrangement: &Arrangement) -> bool {
    let cells = arrangement.to_char_rows();
    let occupied: HashSet<(usize, usize)> = cells
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &c)| c != ' ')
                .map(move |(column, _)| (row, column))
        })
        .collect();

    let Some(&start) = occupied.iter().next() else {
        return false;
    };

    let mut reached = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some((row, column)) = queue.pop_front() {
        let neighbours = [
            (row.wrapping_sub(1), column),
            (row + 1, column),
            (row, column.wrapping_sub(1)),
            (row, column + 1),
        ];
        for neighbour in neighbours {
            if occupied.contains(&neighbour) && reached.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    reached.len() == occupied.len()
}

/// Return true if the outer rows and columns all hold at least one letter.
pub fn is_trimmed(arrangement: &Arrangement) -> bool {
    let cells = arrangement.to_char_rows();
    let (Some(first), Some(last)) = (cells.first(), cells.last()) else {
        return false;
    };

    first.iter().any(|&c| c != ' ')
        && last.iter().any(|&c| c != ' ')
        && cells.iter().any(|row| row[0] != ' ')
        && cells.iter().any(|row| row[row.len() - 1] != ' ')
}

/// Check everything that has to hold for the output of a run over `words`.
pub fn assert_arrangement_properties(words: &[&str], arrangements: &[Arrangement]) {
    let expected = expected_words(words);

    for arrangement in arrangements {
        assert_eq!(
            read_words(arrangement),
            expected,
            "arrangement spells the wrong words:\n{arrangement}"
        );
        assert!(
            is_connected(arrangement),
            "arrangement is not connected:\n{arrangement}"
        );
        assert!(
            is_trimmed(arrangement),
            "arrangement has empty edges:\n{arrangement}"
        );
        assert_eq!(&arrangement.trim(), arrangement);
    }

    let unique: HashSet<_> = arrangements.iter().collect();
    assert_eq!(unique.len(), arrangements.len(), "duplicate arrangements");
    for arrangement in arrangements {
        let transpose = arrangement.transpose();
        assert!(
            &transpose == arrangement || !unique.contains(&transpose),
            "arrangement and its transpose were both returned:\n{arrangement}"
        );
    }

    assert!(
        arrangements
            .windows(2)
            .all(|pair| pair[0].size_key() <= pair[1].size_key()),
        "arrangements are not sorted by size"
    );
}

/// Run a search and return the arrangements.
#[allow(dead_code)]
pub fn run(words: &[&str], mode: SearchMode) -> Vec<Arrangement> {
    Generator::new(words)
        .expect("test word lists should be well formed")
        .with_mode(mode)
        .run()
        .arrangements
}
