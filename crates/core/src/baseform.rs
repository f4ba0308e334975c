//! Base-form resolution: stripping stress-neutral prefixes.
//!
//! Alliteration falls on the stressed syllable, and a handful of prefixes
//! never carry stress. The rules here peel those off so the extractor sees
//! the phonologically relevant onset. All indexing is char-wise; the
//! inventories are full of multi-byte letters.

use crate::phonology::Phonology;

/// Prefixes that push stress to the second syllable in every word class.
const SECOND_SYLLABLE_PREFIXES: &[&str] = &["ge", "ġe", "be", "for"];

fn tag_is_verbal(tag: Option<&str>) -> bool {
    // V = verb, D = adverb in the tagset
    tag.map(|t| t.starts_with(['V', 'D'])).unwrap_or(false)
}

/// Resolve the base form of `word` for alliteration purposes.
///
/// Rules in order, first match wins:
/// 1. `ge`/`ġe`/`be`/`for` prefix, more than two chars, and the third char
///    is not `a`/`o` (a rough screen for non-prefixed lexemes like `gear`
///    and `gōd`) — drop the first two chars. The two-char drop applies to
///    `for` as well, a quirk of the original heuristic kept on purpose.
/// 2. A listed verb/adverb prefix on a verb- or adverb-tagged word — drop
///    two chars, again regardless of prefix length.
/// 3. `ymb` on a verb- or adverb-tagged word — drop three chars.
/// 4. Otherwise the word is its own base.
pub fn resolve_base(word: &str, tag: Option<&str>, phonology: &Phonology) -> String {
    let chars: Vec<char> = word.chars().collect();

    if SECOND_SYLLABLE_PREFIXES.iter().any(|p| word.starts_with(p))
        && chars.len() > 2
        && !matches!(chars[2], 'a' | 'o')
    {
        return chars[2..].iter().collect();
    }

    if tag_is_verbal(tag) {
        if phonology.has_verb_prefix(word) {
            return chars.iter().skip(2).collect();
        }
        if word.starts_with("ymb") {
            return chars.iter().skip(3).collect();
        }
    }

    word.to_string()
}
