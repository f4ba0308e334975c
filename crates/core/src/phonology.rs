//! Old English phonology tables.
//!
//! The inventories live in a plain data struct rather than behind statics so
//! dialect variants (Anglian spellings, extended prefix lists) can be swapped
//! in without touching the analysis code. `Phonology::old_english()` returns
//! the classical West Saxon tables.

/// West Saxon consonant inventory, including IPA values that show up in
/// phonemic transcriptions of edited texts.
const CONSONANTS: &[&str] = &[
    "b", "c", "ċ", "ç", "d", "ð", "f", "g", "ġ", "ɣ", "h", "j", "k", "l", "l̥",
    "m", "n", "n̥", "ŋ", "p", "r", "r̥", "s", "t", "t͡ʃ", "d͡ʒ", "θ", "ʃ", "w",
    "ʍ", "x", "þ", "ƿ",
];

/// Monophthongs, short and long.
const VOWELS: &[&str] = &[
    "i", "ī", "y", "ȳ", "u", "ū", "e", "ē", "o", "ō", "æ", "ǣ", "a", "ā", "ø",
];

/// Diphthongs, short and long.
const DIPHTHONGS: &[&str] = &["ea", "ēa", "ie", "īe", "eo", "ēo", "io", "īo"];

/// Consonant digraphs that alliterate as a unit in the manuscripts.
const DIGRAPHS: &[&str] = &["cg", "sc", "st", "sp"];

/// Stress-neutral verb/adverb prefixes, after Minkova (2008),
/// "Prefixation and Stress in Old English".
const VERB_PREFIXES: &[&str] = &[
    "a", "æt", "geond", "ful", "in", "mis", "of", "ofer", "on", "or", "oþ",
    "þurh", "tō", "under", "wiþ",
];

/// A set of phonological reference tables for one dialect.
#[derive(Debug, Clone)]
pub struct Phonology {
    pub consonants: Vec<String>,
    pub vowels: Vec<String>,
    pub diphthongs: Vec<String>,
    pub digraphs: Vec<String>,
    pub verb_prefixes: Vec<String>,
}

impl Phonology {
    /// The classical West Saxon inventory.
    pub fn old_english() -> Self {
        let owned = |table: &[&str]| -> Vec<String> {
            table.iter().map(|s| s.to_string()).collect()
        };
        Self {
            consonants: owned(CONSONANTS),
            vowels: owned(VOWELS),
            diphthongs: owned(DIPHTHONGS),
            digraphs: owned(DIGRAPHS),
            verb_prefixes: owned(VERB_PREFIXES),
        }
    }

    /// Does `word` begin with one of the alliterating digraphs?
    pub fn starts_with_digraph(&self, word: &str) -> bool {
        self.digraphs.iter().any(|d| word.starts_with(d.as_str()))
    }

    /// Does `word` begin with a vowel or diphthong? All Old English vowels
    /// alliterate with each other, so no finer distinction is needed.
    pub fn starts_with_vowel(&self, word: &str) -> bool {
        self.diphthongs.iter().any(|d| word.starts_with(d.as_str()))
            || self.vowels.iter().any(|v| word.starts_with(v.as_str()))
    }

    /// Does `word` begin with a listed consonant?
    pub fn starts_with_consonant(&self, word: &str) -> bool {
        self.consonants.iter().any(|c| word.starts_with(c.as_str()))
    }

    /// Does `word` carry one of the stress-neutral verb/adverb prefixes?
    pub fn has_verb_prefix(&self, word: &str) -> bool {
        self.verb_prefixes.iter().any(|p| word.starts_with(p.as_str()))
    }
}

impl Default for Phonology {
    fn default() -> Self {
        Self::old_english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digraph_detection() {
        let ph = Phonology::old_english();
        assert!(ph.starts_with_digraph("scip"));
        assert!(ph.starts_with_digraph("stān"));
        assert!(ph.starts_with_digraph("spere"));
        assert!(ph.starts_with_digraph("cgx"));
        assert!(!ph.starts_with_digraph("sweorde"));
    }

    #[test]
    fn test_vowel_detection() {
        let ph = Phonology::old_english();
        assert!(ph.starts_with_vowel("ond"));
        assert!(ph.starts_with_vowel("æðeling"));
        assert!(ph.starts_with_vowel("ēadig"));
        // diphthong-initial
        assert!(ph.starts_with_vowel("eorl"));
        assert!(!ph.starts_with_vowel("sweorde"));
    }

    #[test]
    fn test_consonant_detection() {
        let ph = Phonology::old_english();
        assert!(ph.starts_with_consonant("sweorde"));
        assert!(ph.starts_with_consonant("þæt"));
        assert!(ph.starts_with_consonant("ġelēafan"));
        assert!(!ph.starts_with_consonant("ond"));
    }

    #[test]
    fn test_verb_prefixes() {
        let ph = Phonology::old_english();
        assert!(ph.has_verb_prefix("ofercuman"));
        assert!(ph.has_verb_prefix("þurhwunian"));
        assert!(ph.has_verb_prefix("awendan"));
        assert!(ph.has_verb_prefix("ætstandan"));
        assert!(!ph.has_verb_prefix("sweorde"));
    }

    #[test]
    fn test_tables_are_swappable() {
        let mut ph = Phonology::old_english();
        ph.digraphs.push("hw".to_string());
        assert!(ph.starts_with_digraph("hwæt"));
    }
}
