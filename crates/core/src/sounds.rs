//! Initial-sound extraction and merged alliteration classes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::phonology::Phonology;

/// The stressed initial sound of a base form.
///
/// All vowels and diphthongs alliterate with each other, so they collapse
/// into a single variant; consonants keep their leading letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitialSound {
    Vowel,
    Letter(char),
}

/// Extract the initial sound of an already-resolved base form.
///
/// Check order matters: digraphs first, then vowels/diphthongs, then plain
/// consonants. Digraph-initial words key on their first letter alone, the
/// same bucket as plain words with that letter (`scip` clusters with
/// `sunne`). Words matching none of the tables return `None` and take no
/// part in alliteration.
pub fn extract_initial(base: &str, phonology: &Phonology) -> Option<InitialSound> {
    let first = base.chars().next()?;
    if phonology.starts_with_digraph(base) {
        return Some(InitialSound::Letter(first));
    }
    if phonology.starts_with_vowel(base) {
        return Some(InitialSound::Vowel);
    }
    if phonology.starts_with_consonant(base) {
        return Some(InitialSound::Letter(first));
    }
    None
}

/// A merged alliteration class.
///
/// The scribes used g/ġ, ċ/c, and þ/ð interchangeably, so each pair counts
/// as one sound for alliteration. Everything else keys on the letter itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundClass {
    Vowel,
    GSounds,
    CSounds,
    ThSounds,
    Letter(char),
}

impl From<InitialSound> for SoundClass {
    fn from(sound: InitialSound) -> Self {
        match sound {
            InitialSound::Vowel => SoundClass::Vowel,
            InitialSound::Letter(c) => match c {
                'g' | 'ġ' => SoundClass::GSounds,
                'ċ' | 'c' => SoundClass::CSounds,
                'þ' | 'ð' => SoundClass::ThSounds,
                other => SoundClass::Letter(other),
            },
        }
    }
}

impl fmt::Display for SoundClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundClass::Vowel => write!(f, "vowel"),
            SoundClass::GSounds => write!(f, "gsounds"),
            SoundClass::CSounds => write!(f, "csounds"),
            SoundClass::ThSounds => write!(f, "thsounds"),
            SoundClass::Letter(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ph() -> Phonology {
        Phonology::old_english()
    }

    #[test]
    fn test_extract_vowel() {
        assert_eq!(extract_initial("ond", &ph()), Some(InitialSound::Vowel));
        assert_eq!(extract_initial("æðeling", &ph()), Some(InitialSound::Vowel));
        // diphthong
        assert_eq!(extract_initial("eorl", &ph()), Some(InitialSound::Vowel));
    }

    #[test]
    fn test_extract_consonant() {
        assert_eq!(
            extract_initial("sweorde", &ph()),
            Some(InitialSound::Letter('s'))
        );
        assert_eq!(
            extract_initial("þearf", &ph()),
            Some(InitialSound::Letter('þ'))
        );
    }

    #[test]
    fn test_digraph_keys_on_first_letter() {
        // sc-initial words share a bucket with plain s-initial words
        assert_eq!(
            extract_initial("scip", &ph()),
            Some(InitialSound::Letter('s'))
        );
        assert_eq!(
            extract_initial("sunne", &ph()),
            Some(InitialSound::Letter('s'))
        );
        assert_eq!(
            extract_initial("stān", &ph()),
            Some(InitialSound::Letter('s'))
        );
    }

    #[test]
    fn test_extract_unrecognized() {
        assert_eq!(extract_initial("", &ph()), None);
        // 'q' is not in the Old English inventory
        assert_eq!(extract_initial("quix", &ph()), None);
    }

    #[test]
    fn test_merged_classes() {
        assert_eq!(
            SoundClass::from(InitialSound::Letter('g')),
            SoundClass::GSounds
        );
        assert_eq!(
            SoundClass::from(InitialSound::Letter('ġ')),
            SoundClass::GSounds
        );
        assert_eq!(
            SoundClass::from(InitialSound::Letter('c')),
            SoundClass::CSounds
        );
        assert_eq!(
            SoundClass::from(InitialSound::Letter('ċ')),
            SoundClass::CSounds
        );
        assert_eq!(
            SoundClass::from(InitialSound::Letter('þ')),
            SoundClass::ThSounds
        );
        assert_eq!(
            SoundClass::from(InitialSound::Letter('ð')),
            SoundClass::ThSounds
        );
        assert_eq!(
            SoundClass::from(InitialSound::Letter('s')),
            SoundClass::Letter('s')
        );
        assert_eq!(SoundClass::from(InitialSound::Vowel), SoundClass::Vowel);
    }

    #[test]
    fn test_display() {
        assert_eq!(SoundClass::Vowel.to_string(), "vowel");
        assert_eq!(SoundClass::GSounds.to_string(), "gsounds");
        assert_eq!(SoundClass::ThSounds.to_string(), "thsounds");
        assert_eq!(SoundClass::Letter('s').to_string(), "s");
    }
}
