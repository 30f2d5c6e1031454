use crate::{Corpus, Error, IdfTable, Query, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub id: String,
    /// Sum of idf over the query terms present in the sentence.
    pub matched_idf: f64,
    /// Share of the sentence's terms that are query terms, repeats counted.
    pub density: f64,
}

/// Rank documents by `Σ tf(doc, t) * idf(t)` over the query terms, keeping at most `n`.
///
/// Equal scores keep corpus enumeration order.
pub fn rank_documents(
    query: &Query,
    corpus: &Corpus,
    idfs: &IdfTable,
    n: usize,
) -> Vec<ScoredDocument> {
    let mut scored: Vec<(usize, ScoredDocument)> = corpus
        .iter()
        .map(|doc| {
            let score = query
                .iter()
                .map(|term| doc.term_frequency(term) as f64 * idfs.weight(term))
                .sum();
            (doc.index(), ScoredDocument { id: doc.id().to_string(), score })
        })
        .collect();

    scored.sort_by(|a, b| b.1.score.total_cmp(&a.1.score).then_with(|| a.0.cmp(&b.0)));
    scored.truncate(n);
    scored.into_iter().map(|(_, doc)| doc).collect()
}

pub fn top_files(query: &Query, files: &Corpus, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_documents(query, files, idfs, n).into_iter().map(|d| d.id).collect()
}

/// Rank sentences by matched idf, then query term density, keeping at most `n`.
///
/// Sentences tied on both keys keep corpus enumeration order. Every sentence must
/// carry at least one term.
pub fn rank_sentences(
    query: &Query,
    sentences: &Corpus,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<ScoredSentence>> {
    let mut scored: Vec<(usize, ScoredSentence)> = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        if sentence.is_empty() {
            return Err(Error::EmptySentence { id: sentence.id().to_string() });
        }
        let mut matched_idf = 0.0;
        let mut occurrences = 0u32;
        for term in query.iter() {
            let tf = sentence.term_frequency(term);
            if tf > 0 {
                matched_idf += idfs.weight(term);
                occurrences += tf;
            }
        }
        let density = occurrences as f64 / sentence.len() as f64;
        let id = sentence.id().to_string();
        scored.push((sentence.index(), ScoredSentence { id, matched_idf, density }));
    }

    scored.sort_by(|a, b| {
        b.1.matched_idf
            .total_cmp(&a.1.matched_idf)
            .then_with(|| b.1.density.total_cmp(&a.1.density))
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(n);
    Ok(scored.into_iter().map(|(_, s)| s).collect())
}

pub fn top_sentences(
    query: &Query,
    sentences: &Corpus,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>> {
    Ok(rank_sentences(query, sentences, idfs, n)?.into_iter().map(|s| s.id).collect())
}
