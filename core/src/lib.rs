//! TF-IDF question answering over a directory of text files.
//!
//! Files are ranked by term frequency times inverse document frequency, then the
//! sentences of the best files are ranked by matched idf with query term density as
//! the tie-break.

pub mod corpus;
pub mod error;
pub mod idf;
pub mod loader;
pub mod pipeline;
pub mod query;
pub mod rank;
pub mod sentence;
pub mod tokenizer;

pub use corpus::{Corpus, Document};
pub use error::{Error, Result};
pub use idf::{compute_idfs, compute_idfs_with, IdfTable, IdfVariant, TermStats};
pub use loader::{load_files, LoadOptions, SourceFile};
pub use pipeline::{Answer, Options, QuestionAnswerer};
pub use query::Query;
pub use rank::{
    rank_documents, rank_sentences, top_files, top_sentences, ScoredDocument, ScoredSentence,
};
