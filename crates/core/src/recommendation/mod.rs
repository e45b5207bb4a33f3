//! Product recommendation pipeline
//!
//! Validates a form selection against a catalog, scores every product by how
//! many of its preferences and features were selected, drops non-matching
//! products, then selects either the single best match or all matches ranked.

mod engine;
mod scoring;
mod selection;
mod validation;

pub use engine::{get_recommendations, RecommendationEngine};
pub use scoring::{score_all, score_product, SelectedItems};
pub use selection::{filter_by_min_score, select_multiple, select_single};
pub use validation::{check_request, validate_request, InvalidRequest, ValidationResult};

/// Minimum score a product needs to be recommended at all.
pub const DEFAULT_MIN_SCORE: u32 = 1;
