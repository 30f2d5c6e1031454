use crate::tokenizer::Tokenizer;
use std::collections::BTreeSet;

/// A set of unique query terms. Sorted storage keeps score summation order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: BTreeSet<String>,
}

impl Query {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { terms: terms.into_iter().map(Into::into).collect() }
    }

    pub fn parse<T: Tokenizer + ?Sized>(text: &str, tokenizer: &T) -> Self {
        Self::from_terms(tokenizer.tokenize(text))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool { self.terms.contains(term) }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}
