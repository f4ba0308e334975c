//! Old English stopword set.
//!
//! Closed-class and high-frequency forms that rarely carry the alliterating
//! stress. The list is embedded at compile time and extends the usual
//! prose stopwords with the þ/ð determiner paradigm and a few other forms
//! that turn up constantly in verse. Number words are excluded: they can
//! be stressed.

use std::collections::HashSet;

const STOPWORDS_DATA: &str = include_str!("stopwords.txt");

lazy_static::lazy_static! {
    static ref DEFAULT_STOPWORDS: HashSet<&'static str> = {
        STOPWORDS_DATA
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    };
}

/// The default stopword set for Old English verse.
pub fn default_stopwords() -> &'static HashSet<&'static str> {
    &DEFAULT_STOPWORDS
}

/// An owned copy of the default set, for analyzers that extend or replace it.
pub fn default_stopwords_owned() -> HashSet<String> {
    DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect()
}
