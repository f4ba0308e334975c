//! Tokenizer and part-of-speech tagger interfaces and default backends.
//!
//! Both collaborators sit behind traits so analyses can swap in test
//! doubles or a real NLP backend. The defaults are deliberately simple:
//! poetry lines are already normalized before tokenization, so whitespace
//! splitting is enough, and the tagger is a lexicon lookup over an
//! embedded word list. Out-of-lexicon words get no tag, which degrades
//! the stopword filter but never fails a line.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::AnalysisError;

/// The embedded Old English part-of-speech lexicon.
///
/// Format: one word per line, "word TAG".
/// Lines starting with ";;;" are comments.
const LEXICON_DATA: &str = include_str!("lexicon.txt");

static LEXICON: OnceLock<HashMap<String, String>> = OnceLock::new();

fn get_lexicon() -> &'static HashMap<String, String> {
    LEXICON.get_or_init(|| {
        let mut lexicon = HashMap::new();
        for line in LEXICON_DATA.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let mut parts = line.split_whitespace();
            if let (Some(word), Some(tag)) = (parts.next(), parts.next()) {
                // first entry wins
                lexicon
                    .entry(word.to_string())
                    .or_insert_with(|| tag.to_string());
            }
        }
        lexicon
    })
}

/// Tokenization backend trait.
pub trait Tokenizer: Send + Sync {
    /// Backend name for display.
    fn name(&self) -> &str;

    /// Split normalized text into word tokens, in line order.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, AnalysisError>;
}

/// Part-of-speech tagging backend trait.
pub trait PosTagger: Send + Sync {
    /// Backend name for display.
    fn name(&self) -> &str;

    /// Best tag for a word, or `None` when the backend has no confident
    /// label. `None` is not an error; it just weakens the cluster filter.
    fn tag(&self, word: &str) -> Result<Option<String>, AnalysisError>;
}

/// Whitespace tokenizer for already-normalized text.
#[derive(Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>, AnalysisError> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}

/// Lexicon-lookup tagger over the embedded word list.
#[derive(Debug, Default)]
pub struct LexiconTagger;

impl PosTagger for LexiconTagger {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn tag(&self, word: &str) -> Result<Option<String>, AnalysisError> {
        Ok(get_lexicon().get(word).cloned())
    }
}
