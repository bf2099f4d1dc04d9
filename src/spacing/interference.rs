//! Semantic interference between the current concept and recently studied
//! ones. High keyword overlap with fresh material crowds retrieval, so the
//! review interval stretches less.

use std::collections::{HashMap, HashSet};

/// Concepts more recent than this many positions are ignored.
const RECENT_WINDOW: usize = 10;
/// Similarity-to-interference slope: 1.0 + SLOPE * max_similarity.
const SLOPE: f64 = 0.4;

fn keyword_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect()
}

/// Intersection-over-union of lowercase whitespace-tokenized word sets.
pub fn word_overlap_similarity(a: &str, b: &str) -> f64 {
    let set_a = keyword_set(a);
    let set_b = keyword_set(b);
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count() as f64;
    let union = set_a.union(&set_b).count() as f64;
    intersection / union
}

/// Raw interference factor (`1.0 + 0.4 * max_similarity`) for `concept`
/// against the most recent window of studied concepts; the interval model
/// clamps it to its documented range. When the caller has a precomputed
/// similarity matrix (keyed by concept-id pair), its entries take precedence
/// over the word-overlap fallback.
pub fn interference_factor(
    concept_id: &str,
    concept_keywords: &str,
    recent: &[(String, String)],
    similarity_matrix: Option<&HashMap<(String, String), f64>>,
) -> f64 {
    if recent.is_empty() {
        return 1.0;
    }

    let window = if recent.len() > RECENT_WINDOW {
        &recent[recent.len() - RECENT_WINDOW..]
    } else {
        recent
    };

    let mut max_similarity: f64 = 0.0;
    for (other_id, other_keywords) in window {
        let similarity = similarity_matrix
            .and_then(|m| {
                m.get(&(concept_id.to_string(), other_id.clone()))
                    .or_else(|| m.get(&(other_id.clone(), concept_id.to_string())))
                    .copied()
            })
            .unwrap_or_else(|| word_overlap_similarity(concept_keywords, other_keywords));
        max_similarity = max_similarity.max(similarity.clamp(0.0, 1.0));
    }

    1.0 + SLOPE * max_similarity
}
