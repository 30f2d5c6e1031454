use crate::{Corpus, Error, Result};
use std::collections::HashMap;

/// IDF transform applied to each term's document frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdfVariant {
    /// `ln(N / df)`; a term present in every document weighs 0.
    #[default]
    Standard,
    /// `ln(1 + N / df)`; never reaches 0.
    Smoothed,
}

impl IdfVariant {
    fn weight(self, num_docs: usize, df: usize) -> f64 {
        let ratio = num_docs as f64 / df as f64;
        match self {
            IdfVariant::Standard => ratio.ln(),
            IdfVariant::Smoothed => (1.0 + ratio).ln(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermStats {
    pub doc_frequency: usize,
    pub idf: f64,
}

/// Term -> IDF weight for one corpus. Terms the corpus never saw weigh 0.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    terms: HashMap<String, TermStats>,
    num_docs: usize,
}

impl IdfTable {
    pub fn weight(&self, term: &str) -> f64 {
        self.terms.get(term).map(|s| s.idf).unwrap_or(0.0)
    }

    pub fn get(&self, term: &str) -> Option<&TermStats> { self.terms.get(term) }

    pub fn contains(&self, term: &str) -> bool { self.terms.contains_key(term) }

    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermStats)> + '_ {
        self.terms.iter().map(|(t, s)| (t.as_str(), s))
    }
}

pub fn compute_idfs(corpus: &Corpus) -> Result<IdfTable> {
    compute_idfs_with(corpus, IdfVariant::Standard)
}

pub fn compute_idfs_with(corpus: &Corpus, variant: IdfVariant) -> Result<IdfTable> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    let num_docs = corpus.len();

    let mut df: HashMap<&str, usize> = HashMap::new();
    for doc in corpus {
        for term in doc.distinct_terms() {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let terms = df
        .into_iter()
        .map(|(term, df_t)| {
            let stats = TermStats { doc_frequency: df_t, idf: variant.weight(num_docs, df_t) };
            (term.to_string(), stats)
        })
        .collect::<HashMap<_, _>>();
    tracing::debug!(num_docs, num_terms = terms.len(), ?variant, "computed idf table");
    Ok(IdfTable { terms, num_docs })
}
