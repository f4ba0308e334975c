use serde::{Deserialize, Serialize};

use crate::sounds::SoundClass;

/// Words in one line sharing an alliteration class, in line order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cluster {
    pub class: SoundClass,
    pub words: Vec<String>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Result of analyzing a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineAnalysis {
    /// Normalized line text
    pub text: String,
    /// Surviving clusters, sorted by descending size
    pub clusters: Vec<Cluster>,
    /// Sum of surviving cluster sizes
    pub alliteration_count: usize,
}

/// One entry of a batch (file) analysis.
///
/// A line either analyzed cleanly or failed on a linguistic backend; the
/// batch records the failure and moves on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineReport {
    /// 0-based position in the input file
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<LineAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
