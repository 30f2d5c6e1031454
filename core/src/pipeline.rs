//! Two-stage answering: rank whole files, then rank sentences from the winners.

use crate::idf::{compute_idfs_with, IdfTable, IdfVariant};
use crate::loader::SourceFile;
use crate::rank::{rank_documents, rank_sentences, ScoredDocument, ScoredSentence};
use crate::sentence::{PunctuationSplitter, SentenceSplitter};
use crate::tokenizer::{Tokenizer, WordTokenizer};
use crate::{Corpus, Query, Result};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub file_matches: usize,
    pub sentence_matches: usize,
    pub idf_variant: IdfVariant,
}

impl Default for Options {
    fn default() -> Self {
        Self { file_matches: 1, sentence_matches: 1, idf_variant: IdfVariant::Standard }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub query_terms: Vec<String>,
    pub files: Vec<ScoredDocument>,
    pub sentences: Vec<ScoredSentence>,
}

/// True when the query has terms and none of them occur in the corpus behind `idfs`.
fn all_terms_unknown(query: &Query, idfs: &IdfTable) -> bool {
    !query.is_empty() && query.iter().all(|t| !idfs.contains(t))
}

pub struct QuestionAnswerer<T = WordTokenizer, S = PunctuationSplitter> {
    tokenizer: T,
    splitter: S,
    options: Options,
}

impl QuestionAnswerer {
    pub fn new(options: Options) -> Self {
        Self::with_parts(WordTokenizer::new(), PunctuationSplitter::new(), options)
    }
}

impl<T: Tokenizer, S: SentenceSplitter> QuestionAnswerer<T, S> {
    pub fn with_parts(tokenizer: T, splitter: S, options: Options) -> Self {
        Self { tokenizer, splitter, options }
    }

    pub fn options(&self) -> &Options { &self.options }

    pub fn answer(&self, files: &[SourceFile], query_text: &str) -> Result<Answer> {
        let query = Query::parse(query_text, &self.tokenizer);
        if query.is_empty() {
            tracing::warn!(query = query_text, "query has no indexable terms; scores are all 0");
        }

        let file_words: Corpus = files
            .iter()
            .map(|f| (f.name.as_str(), self.tokenizer.tokenize(&f.text)))
            .collect();
        let file_idfs = compute_idfs_with(&file_words, self.options.idf_variant)?;
        if all_terms_unknown(&query, &file_idfs) {
            tracing::warn!(num_terms = query.len(), "no query term occurs in the corpus");
        }
        let top = rank_documents(&query, &file_words, &file_idfs, self.options.file_matches);
        tracing::info!(
            num_files = file_words.len(),
            top = ?top.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(),
            "ranked files"
        );

        let texts: HashMap<&str, &str> =
            files.iter().map(|f| (f.name.as_str(), f.text.as_str())).collect();
        let mut sentences = Corpus::new();
        for doc in &top {
            let Some(text) = texts.get(doc.id.as_str()) else { continue };
            for passage in text.split('\n') {
                for sentence in self.splitter.split(passage) {
                    let tokens = self.tokenizer.tokenize(sentence);
                    if tokens.is_empty() || sentences.get(sentence).is_some() {
                        continue;
                    }
                    sentences.insert(sentence, tokens);
                }
            }
        }
        tracing::debug!(num_sentences = sentences.len(), "built sentence corpus");

        let query_terms = query.iter().map(str::to_string).collect();
        if sentences.is_empty() {
            tracing::warn!(files = top.len(), "top files hold no sentence with indexable terms");
            return Ok(Answer { query_terms, files: top, sentences: Vec::new() });
        }

        let sentence_idfs = compute_idfs_with(&sentences, self.options.idf_variant)?;
        let ranked =
            rank_sentences(&query, &sentences, &sentence_idfs, self.options.sentence_matches)?;
        tracing::info!(num_sentences = sentences.len(), matches = ranked.len(), "ranked sentences");

        Ok(Answer { query_terms, files: top, sentences: ranked })
    }
}
