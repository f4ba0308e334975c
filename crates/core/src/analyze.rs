//! Line and file analysis.
//!
//! `Analyzer` bundles the tokenizer, tagger, phonology tables, and
//! stopword set into one explicit context. Nothing here is a process-wide
//! singleton: tests swap in doubles, and two analyzers with different
//! dialect tables can live side by side.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::baseform::resolve_base;
use crate::cluster::{build_clusters, filter_weak_members, select_and_rank};
use crate::error::AnalysisError;
use crate::normalize::normalize;
use crate::phonology::Phonology;
use crate::sounds::extract_initial;
use crate::stopwords::default_stopwords_owned;
use crate::tag::{LexiconTagger, PosTagger, Tokenizer, WhitespaceTokenizer};
use crate::types::{LineAnalysis, LineReport};

/// Tags whose words rarely carry the alliterating stress:
/// conjunction, pronoun/relative, preposition.
const WEAK_TAG_INITIALS: [char; 3] = ['C', 'R', 'P'];

/// An alliteration analysis context.
pub struct Analyzer {
    tokenizer: Box<dyn Tokenizer>,
    tagger: Box<dyn PosTagger>,
    phonology: Phonology,
    stopwords: HashSet<String>,
}

impl Analyzer {
    /// Default Old English context: whitespace tokenizer, embedded lexicon
    /// tagger, West Saxon phonology, verse stopword list.
    pub fn old_english() -> Self {
        Self {
            tokenizer: Box::new(WhitespaceTokenizer),
            tagger: Box::new(LexiconTagger),
            phonology: Phonology::old_english(),
            stopwords: default_stopwords_owned(),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn with_phonology(mut self, phonology: Phonology) -> Self {
        self.phonology = phonology;
        self
    }

    pub fn with_stopwords(mut self, stopwords: HashSet<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Analyze one raw line of verse.
    ///
    /// Pipeline: normalize, tokenize, tag, resolve base forms, extract
    /// initial sounds, cluster by merged class, filter weak members,
    /// select and rank. The reported count is the sum of surviving
    /// cluster sizes after both the weak-member filter and the size
    /// check.
    pub fn analyze_line(&self, raw: &str) -> Result<LineAnalysis, AnalysisError> {
        let text = normalize(raw);
        let tokens = self.tokenizer.tokenize(&text)?;

        // one tag per distinct surface form, like the tagger backends do
        let mut tags: HashMap<String, Option<String>> = HashMap::new();
        for word in &tokens {
            if !tags.contains_key(word.as_str()) {
                let tag = self.tagger.tag(word)?;
                tags.insert(word.clone(), tag);
            }
        }

        let mut entries = Vec::new();
        for word in &tokens {
            let tag = tags.get(word.as_str()).and_then(|t| t.as_deref());
            let base = resolve_base(word, tag, &self.phonology);
            // words with no recognized onset drop out silently
            if let Some(sound) = extract_initial(&base, &self.phonology) {
                entries.push((sound, word.clone()));
            }
        }

        let clusters = build_clusters(entries);
        let clusters = filter_weak_members(clusters, |word| {
            self.stopwords.contains(word)
                || tags
                    .get(word)
                    .and_then(|t| t.as_deref())
                    .map(|t| t.starts_with(WEAK_TAG_INITIALS))
                    .unwrap_or(false)
        });
        let clusters = select_and_rank(clusters);
        let alliteration_count = clusters.iter().map(|c| c.len()).sum();

        log::debug!(
            "analyzed line: {} tokens, {} clusters, count {}",
            tokens.len(),
            clusters.len(),
            alliteration_count
        );

        Ok(LineAnalysis {
            text,
            clusters,
            alliteration_count,
        })
    }

    /// Analyze every line of a text file, in input order, 0-indexed.
    ///
    /// A linguistic backend failure on one line is recorded in that
    /// line's report and the batch continues; only a file read failure
    /// aborts.
    pub fn analyze_file(&self, path: &Path) -> Result<Vec<LineReport>, AnalysisError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| AnalysisError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;

        let mut reports = Vec::new();
        for (index, line) in content.lines().enumerate() {
            match self.analyze_line(line.trim()) {
                Ok(analysis) => reports.push(LineReport {
                    index,
                    analysis: Some(analysis),
                    error: None,
                }),
                Err(e) => {
                    log::warn!("line {}: {}", index, e);
                    reports.push(LineReport {
                        index,
                        analysis: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }
        Ok(reports)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::old_english()
    }
}
