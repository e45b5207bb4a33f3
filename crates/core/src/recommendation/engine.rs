//! Request orchestration

use crate::catalog::ProductCatalog;
use crate::domain::product::ScoredProduct;
use crate::domain::selection::{FormSelection, RecommendationType};
use crate::errors::DomainError;

use super::scoring::score_all;
use super::selection::{filter_by_min_score, select_multiple, select_single};
use super::validation::require_request;
use super::DEFAULT_MIN_SCORE;

/// Stateless recommendation pipeline. Holds only its threshold, so one
/// engine can serve any number of requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecommendationEngine {
    min_score: u32,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self { min_score: DEFAULT_MIN_SCORE }
    }

    /// Thresholds below the default are raised to it; zero-score products
    /// are never recommended.
    pub fn with_min_score(min_score: u32) -> Self {
        Self { min_score: min_score.max(DEFAULT_MIN_SCORE) }
    }

    pub fn min_score(&self) -> u32 {
        self.min_score
    }

    /// Runs the pipeline, surfacing rejected requests as errors.
    pub fn try_recommend(
        &self,
        selection: Option<&FormSelection>,
        catalog: Option<&ProductCatalog>,
    ) -> Result<Vec<ScoredProduct>, DomainError> {
        let (selection, catalog) = require_request(selection, catalog)?;

        let scored = score_all(
            catalog.products(),
            &selection.selected_preferences,
            &selection.selected_features,
        );
        let filtered = filter_by_min_score(scored, self.min_score);

        let recommendations = match selection.selected_recommendation_type {
            RecommendationType::SingleProduct => select_single(filtered),
            RecommendationType::MultipleProducts => select_multiple(filtered),
        };

        tracing::debug!(
            event_name = "recommendation.request.completed",
            recommendation_type = %selection.selected_recommendation_type,
            catalog_size = catalog.len(),
            result_count = recommendations.len(),
            top_score = recommendations.first().map(|entry| entry.score).unwrap_or(0),
            "recommendations computed"
        );

        Ok(recommendations)
    }

    /// Runs the pipeline. A rejected request is logged and yields an empty
    /// result, indistinguishable by type from "no matches".
    pub fn recommend(
        &self,
        selection: Option<&FormSelection>,
        catalog: Option<&ProductCatalog>,
    ) -> Vec<ScoredProduct> {
        match self.try_recommend(selection, catalog) {
            Ok(recommendations) => recommendations,
            Err(error) => {
                tracing::warn!(
                    event_name = "recommendation.request.rejected",
                    error = %error,
                    "recommendation validation failed"
                );
                Vec::new()
            }
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_recommendations(
    selection: Option<&FormSelection>,
    catalog: Option<&ProductCatalog>,
) -> Vec<ScoredProduct> {
    RecommendationEngine::default().recommend(selection, catalog)
}
