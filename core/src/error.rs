use std::path::PathBuf;

/// Errors raised while loading or ranking a corpus.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The corpus directory or one of its files could not be read.
    #[error("cannot read corpus at {}: {source}", path.display())]
    CorpusAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// IDF weights are undefined over zero documents.
    #[error("corpus contains no documents")]
    EmptyCorpus,
    /// A sentence with no indexable terms reached the sentence ranker.
    #[error("sentence has no indexable terms: {id:?}")]
    EmptySentence { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
