//! alliterant-core — alliteration detection for Old English poetry.
//!
//! Given a line of verse, finds the words that share a stressed initial
//! sound and groups them into alliterating clusters: normalize the text,
//! tokenize and tag it, strip stress-neutral prefixes to get each word's
//! base form, extract the initial sound under Old English phonology
//! (vowels all alliterate; g/ġ, ċ/c, þ/ð merge; cg/sc/st/sp digraphs key
//! on their first letter), then cluster, filter weakly-stressed members,
//! and rank.

pub mod analyze;
pub mod baseform;
pub mod cluster;
pub mod error;
pub mod normalize;
pub mod phonology;
pub mod sounds;
pub mod stopwords;
pub mod tag;
pub mod types;

pub use analyze::Analyzer;
pub use error::AnalysisError;
pub use types::{Cluster, LineAnalysis, LineReport};
