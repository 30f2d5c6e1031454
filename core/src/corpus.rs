use std::collections::HashMap;

/// One indexed unit of a corpus: a whole file or a single sentence.
#[derive(Debug, Clone)]
pub struct Document {
    id: String,
    index: usize,
    terms: Vec<String>,
    counts: HashMap<String, u32>,
}

impl Document {
    fn new(id: String, index: usize, terms: Vec<String>) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for term in &terms {
            *counts.entry(term.clone()).or_insert(0) += 1;
        }
        Self { id, index, terms, counts }
    }

    pub fn id(&self) -> &str { &self.id }

    /// Enumeration position inside the owning corpus; the final tie-break of every ranking.
    pub fn index(&self) -> usize { self.index }

    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Raw occurrence count of `term`, 0 when absent.
    pub fn term_frequency(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool { self.counts.contains_key(term) }

    pub fn distinct_terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }
}

/// Ordered mapping of document id -> term sequence.
///
/// Iteration always follows insertion order. Re-inserting an existing id replaces its
/// terms but keeps the position it was first given.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
    positions: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, id: impl Into<String>, terms: Vec<String>) {
        let id = id.into();
        match self.positions.get(&id) {
            Some(&pos) => {
                self.docs[pos] = Document::new(id, pos, terms);
            }
            None => {
                let pos = self.docs.len();
                self.positions.insert(id.clone(), pos);
                self.docs.push(Document::new(id, pos, terms));
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.positions.get(id).map(|&pos| &self.docs[pos])
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> { self.docs.iter() }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter { self.docs.iter() }
}

impl<I: Into<String>> FromIterator<(I, Vec<String>)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (I, Vec<String>)>>(iter: T) -> Self {
        let mut corpus = Corpus::new();
        for (id, terms) in iter {
            corpus.insert(id, terms);
        }
        corpus
    }
}
