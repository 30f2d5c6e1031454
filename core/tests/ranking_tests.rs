use proptest::prelude::*;
use questions_core::{compute_idfs, rank_documents, top_files, top_sentences, Corpus, Query};

fn corpus(docs: &[(&str, &str)]) -> Corpus {
    docs.iter()
        .map(|(id, terms)| {
            (*id, terms.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        })
        .collect()
}

#[test]
fn cat_query_picks_cat_document() {
    let files = corpus(&[("d1", "cat sat"), ("d2", "dog sat")]);
    let idfs = compute_idfs(&files).unwrap();
    assert!((idfs.weight("cat") - 0.693_147).abs() < 1e-6);
    assert_eq!(top_files(&Query::from_terms(["cat"]), &files, &idfs, 1), vec!["d1"]);
}

#[test]
fn ubiquitous_term_never_affects_ranking() {
    let files = corpus(&[
        ("d1", "the_ the_ the_ the_ owl"),
        ("d2", "the_ cat"),
    ]);
    let idfs = compute_idfs(&files).unwrap();
    assert_eq!(idfs.weight("the_"), 0.0);
    let with = top_files(&Query::from_terms(["the_", "cat"]), &files, &idfs, 2);
    let without = top_files(&Query::from_terms(["cat"]), &files, &idfs, 2);
    assert_eq!(with, vec!["d2", "d1"]);
    assert_eq!(with, without);
}

#[test]
fn sentence_with_weighted_term_ranks_first() {
    let sentences = corpus(&[
        ("The cat sat.", "cat sat"),
        ("A dog ran fast.", "dog ran fast"),
        ("The cat ran.", "cat ran"),
    ]);
    let idfs = compute_idfs(&sentences).unwrap();
    assert!(idfs.weight("cat") > 0.0);
    let ids = top_sentences(&Query::from_terms(["cat", "dog"]), &sentences, &idfs, 3).unwrap();
    // "dog" is rarer than "cat", so the dog sentence carries more matched idf
    assert_eq!(ids, vec!["A dog ran fast.", "The cat sat.", "The cat ran."]);
}

#[test]
fn equal_idf_sentences_fall_back_to_density() {
    let sentences = corpus(&[
        ("The cat sat.", "cat sat"),
        ("A dog ran fast.", "dog ran fast"),
    ]);
    let idfs = compute_idfs(&sentences).unwrap();
    assert!(idfs.weight("cat") > 0.0);
    let ids = top_sentences(&Query::from_terms(["cat", "dog"]), &sentences, &idfs, 1).unwrap();
    assert_eq!(ids, vec!["The cat sat."]);
}

#[test]
fn higher_density_loses_to_higher_matched_idf() {
    let sentences = corpus(&[
        ("dense", "common common common"),
        ("rare", "rare x y z w"),
        ("filler", "common q"),
    ]);
    let idfs = compute_idfs(&sentences).unwrap();
    let ids = top_sentences(&Query::from_terms(["common", "rare"]), &sentences, &idfs, 3).unwrap();
    assert_eq!(ids[0], "rare");
}

#[test]
fn unknown_terms_still_return_n_in_enumeration_order() {
    let files = corpus(&[("c", "alpha"), ("a", "beta"), ("b", "gamma")]);
    let idfs = compute_idfs(&files).unwrap();
    let query = Query::from_terms(["zebra", "unicorn"]);
    let ranked = rank_documents(&query, &files, &idfs, 2);
    assert_eq!(ranked.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), vec!["c", "a"]);
    assert!(ranked.iter().all(|d| d.score == 0.0));
    assert_eq!(
        top_sentences(&query, &files, &idfs, 5).unwrap(),
        vec!["c", "a", "b"]
    );
}

fn arb_corpus() -> impl Strategy<Value = Vec<Vec<String>>> {
    let term = prop::sample::select(vec!["ant", "bee", "cat", "dog", "eel", "fox"])
        .prop_map(str::to_string);
    prop::collection::vec(prop::collection::vec(term, 1..8), 1..10)
}

fn build(docs: &[Vec<String>]) -> Corpus {
    docs.iter().enumerate().map(|(i, terms)| (format!("doc{i}"), terms.clone())).collect()
}

proptest! {
    #[test]
    fn idf_matches_definition(docs in arb_corpus()) {
        let corpus = build(&docs);
        let idfs = compute_idfs(&corpus).unwrap();
        let n = docs.len() as f64;
        for (term, stats) in idfs.iter() {
            let df = docs.iter().filter(|d| d.iter().any(|t| t == term)).count();
            prop_assert_eq!(stats.doc_frequency, df);
            prop_assert!((stats.idf - (n / df as f64).ln()).abs() < 1e-12);
            prop_assert_eq!(stats.idf == 0.0, df == docs.len());
        }
    }

    #[test]
    fn document_score_is_additive(docs in arb_corpus()) {
        let corpus = build(&docs);
        let idfs = compute_idfs(&corpus).unwrap();
        let all = corpus.len();
        let score_of = |q: &Query| {
            rank_documents(q, &corpus, &idfs, all)
                .into_iter()
                .map(|d| (d.id, d.score))
                .collect::<std::collections::HashMap<_, _>>()
        };
        let both = score_of(&Query::from_terms(["cat", "dog"]));
        let cat = score_of(&Query::from_terms(["cat"]));
        let dog = score_of(&Query::from_terms(["dog"]));
        for (id, score) in &both {
            prop_assert!((score - (cat[id] + dog[id])).abs() < 1e-9);
        }
    }

    #[test]
    fn result_length_is_bounded_and_deterministic(docs in arb_corpus(), n in 0usize..12) {
        let corpus = build(&docs);
        let idfs = compute_idfs(&corpus).unwrap();
        let query = Query::from_terms(["bee", "fox"]);
        let first = top_files(&query, &corpus, &idfs, n);
        prop_assert_eq!(first.len(), n.min(docs.len()));
        prop_assert_eq!(&first, &top_files(&query, &corpus, &idfs, n));

        let sentences = top_sentences(&query, &corpus, &idfs, n).unwrap();
        prop_assert_eq!(sentences.len(), n.min(docs.len()));
        prop_assert_eq!(sentences, top_sentences(&query, &corpus, &idfs, n).unwrap());
    }
}
