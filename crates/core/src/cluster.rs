//! Cluster building, weak-member filtering, and ranking.

use crate::sounds::{InitialSound, SoundClass};
use crate::types::Cluster;

/// Group `(sound, word)` pairs by merged alliteration class.
///
/// Classes keep first-seen order; words keep line order within a class.
pub fn build_clusters(entries: Vec<(InitialSound, String)>) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    for (sound, word) in entries {
        let class = SoundClass::from(sound);
        match clusters.iter_mut().find(|c| c.class == class) {
            Some(cluster) => cluster.words.push(word),
            None => clusters.push(Cluster {
                class,
                words: vec![word],
            }),
        }
    }
    clusters
}

/// Remove weakly-stressed members from every cluster.
///
/// `is_weak` decides membership (stopwords, grammatical-category tags).
/// The filter only runs when more than one cluster exists: a line whose
/// sole cluster is built from stopwords keeps it, since erasing it would
/// leave nothing to report. Removal is a straight `retain`, never an
/// in-place delete while scanning.
pub fn filter_weak_members<F>(mut clusters: Vec<Cluster>, is_weak: F) -> Vec<Cluster>
where
    F: Fn(&str) -> bool,
{
    if clusters.len() > 1 {
        for cluster in &mut clusters {
            cluster.words.retain(|word| !is_weak(word));
        }
    }
    clusters
}

/// Keep clusters with more than one surviving word and sort them by
/// descending size. The sort is stable, so equal-sized clusters keep
/// their discovery order: reinforced alliteration has priority over
/// accidental groups.
pub fn select_and_rank(clusters: Vec<Cluster>) -> Vec<Cluster> {
    let mut selected: Vec<Cluster> = clusters.into_iter().filter(|c| c.len() > 1).collect();
    selected.sort_by(|a, b| b.len().cmp(&a.len()));
    selected
}
