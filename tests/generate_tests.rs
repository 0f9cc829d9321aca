mod common;

use common::{assert_arrangement_properties, init_logging, read_words, run};
use crossword_arranger::{
    dense_grid::DenseGrid, generate, sparse_grid::SparseGrid, Error, Generator, SearchMode,
    Solver, WordProblem,
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::sync::{atomic::AtomicBool, Arc};

const WORD_LISTS: &[&[&str]] = &[
    &["cat", "art"],
    &["cat", "art", "tar"],
    &["ab", "ba"],
    &["a", "ab"],
    &["cross", "word", "sow", "row"],
    &["dog", "god", "ode"],
    &["plan", "lane", "nap"],
];

fn rows(words: &[&str], mode: SearchMode) -> Vec<Vec<String>> {
    run(words, mode)
        .iter()
        .map(|arrangement| arrangement.rows().collect())
        .collect()
}

#[test]
fn crossing_pair() {
    init_logging();

    let arrangements = run(&["CAT", "ART"], SearchMode::Exhaustive);

    assert_eq!(arrangements.len(), 2);
    for arrangement in &arrangements {
        assert_eq!(arrangement.size_key(), (3, 3));
        assert_eq!(read_words(arrangement), vec!["ART", "CAT"]);
    }
    assert_eq!(
        rows(&["CAT", "ART"], SearchMode::Exhaustive),
        vec![vec!["CAT", " R ", " T "], vec!["  A", "  R", "CAT"]]
    );
}

#[test]
fn single_letter_word() {
    for mode in [
        SearchMode::Exhaustive,
        SearchMode::FirstFound,
        SearchMode::SmallestStreaming,
    ] {
        let arrangements = run(&["a"], mode);

        assert_eq!(arrangements.len(), 1);
        assert_eq!((arrangements[0].height(), arrangements[0].width()), (1, 1));
        assert_eq!(arrangements[0].to_string(), "A");
    }
}

#[test]
fn no_shared_letters() {
    assert!(run(&["DOG", "CAT"], SearchMode::FirstFound).is_empty());
    assert!(run(&["DOG", "CAT"], SearchMode::Exhaustive).is_empty());

    let report = Generator::new(["DOG", "CAT"]).unwrap().run();
    assert_eq!(report.statistics.orders, 2);
    assert_eq!(report.statistics.search.dead_ends, 2);
    assert_eq!(report.statistics.search.completed, 0);
}

#[test]
fn transposes_are_collapsed() {
    // Both orders of AB and BA find the same two shapes, once as found and
    // once transposed.
    assert_eq!(
        rows(&["ab", "ba"], SearchMode::Exhaustive),
        vec![vec!["AB", " A"], vec!["B ", "AB"]]
    );
}

#[test]
fn lowercase_input_is_uppercased() {
    assert_eq!(
        generate(["Cat", "aRt"], SearchMode::Exhaustive).unwrap(),
        run(&["CAT", "ART"], SearchMode::Exhaustive)
    );
}

#[test]
fn arrangement_properties_hold() {
    init_logging();

    WORD_LISTS.par_iter().for_each(|words| {
        let arrangements = run(words, SearchMode::Exhaustive);
        assert!(!arrangements.is_empty(), "nothing found for {words:?}");
        assert_arrangement_properties(words, &arrangements);
    });
}

#[test]
fn first_found_is_part_of_all() {
    WORD_LISTS.par_iter().for_each(|words| {
        let all = run(words, SearchMode::Exhaustive);
        let first = run(words, SearchMode::FirstFound);

        assert!(!first.is_empty(), "{words:?}");
        assert_arrangement_properties(words, &first);
        for arrangement in &first {
            assert!(all.contains(arrangement), "{words:?}:\n{arrangement}");
        }
    });
}

#[test]
fn first_found_searches_the_whole_first_order() {
    for (words, smallest) in [
        (&["cross", "word", "sow", "row"][..], (5, 5)),
        (&["dog", "god", "ode"][..], (4, 3)),
    ] {
        let generator = Generator::new(words).unwrap();
        let (position, order) = generator
            .orders()
            .enumerate()
            .find(|(_, order)| {
                Solver::<SparseGrid>::new(order.clone(), generator.validator())
                    .next()
                    .is_some()
            })
            .unwrap();
        let mut expected =
            Solver::<SparseGrid>::new(order, generator.validator()).all_arrangements();
        expected.sort_by_key(|arrangement| arrangement.size_key());

        let report = generator.with_mode(SearchMode::FirstFound).run();

        assert_eq!(
            report.smallest().map(|arrangement| arrangement.size_key()),
            Some(smallest),
            "{words:?}"
        );
        assert_eq!(report.smallest(), expected.first(), "{words:?}");
        assert_eq!(report.statistics.orders, position + 1);
    }
}

#[test]
fn streaming_matches_exhaustive() {
    WORD_LISTS.par_iter().for_each(|words| {
        let generator = Generator::new(*words)
            .unwrap()
            .with_mode(SearchMode::SmallestStreaming);

        let mut streamed = Vec::new();
        let report = generator.run_with(|arrangement| streamed.push(arrangement.clone()));

        assert_eq!(report.arrangements, run(words, SearchMode::Exhaustive));
        assert!(!streamed.is_empty());
        assert!(streamed
            .windows(2)
            .all(|pair| pair[1].size_key() < pair[0].size_key()));
        assert_eq!(streamed.last(), report.smallest());
    });
}

#[test]
fn runs_are_deterministic() {
    for words in WORD_LISTS {
        assert_eq!(
            run(words, SearchMode::Exhaustive),
            run(words, SearchMode::Exhaustive)
        );
    }
}

#[test]
fn grid_representations_agree() {
    WORD_LISTS.par_iter().for_each(|words| {
        let generator = Generator::new(*words).unwrap();
        let sparse = generator.run_in::<SparseGrid, _>(|_| {});
        let dense = generator.run_in::<DenseGrid, _>(|_| {});

        assert_eq!(sparse.arrangements, dense.arrangements, "{words:?}");
        assert_eq!(sparse.statistics.search, dense.statistics.search);
    });
}

#[test]
fn duplicate_words_must_appear_twice() {
    let arrangements = run(&["ab", "ab", "ba"], SearchMode::Exhaustive);

    assert!(!arrangements.is_empty());
    assert_arrangement_properties(&["ab", "ab", "ba"], &arrangements);
}

#[test]
fn cancelled_run_returns_partial_results() {
    let flag = Arc::new(AtomicBool::new(true));
    let report = Generator::new(["cross", "word", "sow", "row"])
        .unwrap()
        .with_cancel_flag(flag)
        .run();

    assert!(report.statistics.cancelled);
    assert!(report.is_empty());

    let flag = Arc::new(AtomicBool::new(false));
    let report = Generator::new(["cross", "word", "sow", "row"])
        .unwrap()
        .with_cancel_flag(flag)
        .run();

    assert!(!report.statistics.cancelled);
    assert_eq!(report.statistics.orders, 24);
}

#[test]
fn malformed_input() {
    assert_eq!(
        generate(Vec::<String>::new(), SearchMode::Exhaustive),
        Err(Error::EmptyWordList)
    );
    assert_eq!(
        generate(["cat", "d0g"], SearchMode::Exhaustive),
        Err(Error::MalformedWord {
            index: 1,
            word: "d0g".into(),
            problem: WordProblem::InvalidCharacter('0'),
        })
    );
    assert_eq!(
        generate(["cat", ""], SearchMode::FirstFound),
        Err(Error::MalformedWord {
            index: 1,
            word: String::new(),
            problem: WordProblem::Empty,
        })
    );
    assert_eq!(
        generate(["straße", "sea"], SearchMode::Exhaustive),
        Err(Error::MalformedWord {
            index: 0,
            word: "straße".into(),
            problem: WordProblem::InvalidCharacter('ß'),
        })
    );
    assert!(matches!(
        "quickest".parse::<SearchMode>(),
        Err(Error::UnknownMode(mode)) if mode == "quickest"
    ));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() {
    for words in WORD_LISTS {
        let generator = Generator::new(*words).unwrap();
        let sequential = generator.run();
        let parallel = generator.run_parallel();

        assert_eq!(parallel.arrangements, sequential.arrangements, "{words:?}");
        assert_eq!(parallel.statistics.orders, sequential.statistics.orders);
        assert_eq!(parallel.statistics.search, sequential.statistics.search);

        let first = generator.clone().with_mode(SearchMode::FirstFound);
        assert_eq!(
            first.run_parallel().arrangements,
            first.run().arrangements,
            "{words:?}"
        );
    }
}
