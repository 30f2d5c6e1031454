use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // terminal punctuation, optional closing quotes/brackets, then the whitespace gap
    static ref BOUNDARY: Regex = Regex::new(r#"[.!?]+["'”’)\]]*\s+"#).expect("valid regex");
    static ref LAST_WORD: Regex = Regex::new(r"(?u)([\p{L}.]+)\.$").expect("valid regex");
    static ref ABBREVIATIONS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "mr","mrs","ms","dr","prof","sr","jr","st","mt","gen","capt","lt","sgt","rev","hon",
            "vs","etc","e.g","i.e","cf","approx","vol","pp","inc","ltd","corp",
            "jan","feb","apr","jun","jul","aug","sep","sept","oct","nov",
            "u.s","u.k","a.m","p.m"
        ];
        words.iter().copied().collect()
    };
}

/// Splits a passage into sentences, in order.
pub trait SentenceSplitter {
    fn split<'a>(&self, passage: &'a str) -> Vec<&'a str>;
}

/// Splits on `.`, `!` or `?` followed by whitespace, skipping abbreviations and initials.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSplitter;

impl PunctuationSplitter {
    pub fn new() -> Self { Self }
}

fn is_abbreviation(head: &str) -> bool {
    let Some(caps) = LAST_WORD.captures(head) else { return false };
    let word = caps[1].trim_start_matches('.');
    let lower = word.to_lowercase();
    if ABBREVIATIONS.contains(lower.as_str()) {
        return true;
    }
    // single-letter initial such as "J." in "J. R. R. Tolkien"
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

impl SentenceSplitter for PunctuationSplitter {
    fn split<'a>(&self, passage: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for mat in BOUNDARY.find_iter(passage) {
            let candidate = passage[start..mat.end()].trim_end();
            if candidate.ends_with('.') && is_abbreviation(candidate) {
                continue;
            }
            let sentence = candidate.trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = mat.end();
        }
        let tail = passage[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }
        sentences
    }
}
