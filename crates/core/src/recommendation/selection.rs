use crate::domain::product::ScoredProduct;

/// Keeps products scoring at least `min_score`, preserving input order.
pub fn filter_by_min_score(mut scored: Vec<ScoredProduct>, min_score: u32) -> Vec<ScoredProduct> {
    scored.retain(|entry| entry.score >= min_score);
    scored
}

/// Best match only. Among equal top scores the last one in catalog order wins.
pub fn select_single(filtered: Vec<ScoredProduct>) -> Vec<ScoredProduct> {
    // max_by_key yields the last of several equal maxima.
    filtered.into_iter().max_by_key(|entry| entry.score).into_iter().collect()
}

/// All matches by descending score; equal scores keep catalog order.
pub fn select_multiple(mut filtered: Vec<ScoredProduct>) -> Vec<ScoredProduct> {
    filtered.sort_by(|a, b| b.score.cmp(&a.score));
    filtered
}
