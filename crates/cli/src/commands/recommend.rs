use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use recommender_core::config::ConfigOverrides;
use recommender_core::{
    ApplicationError, FormSelection, RecommendationEngine, RecommendationType, ScoredProduct,
};
use serde::Serialize;
use uuid::Uuid;

use crate::commands::{load_catalog, load_config, CommandResult};

#[derive(Debug, Clone, Default, Args)]
pub struct RecommendArgs {
    #[arg(long, value_name = "PATH", help = "JSON catalog file (defaults to config, then demo)")]
    pub catalog: Option<PathBuf>,
    #[arg(long = "preference", value_name = "LABEL", help = "Selected preference (repeatable)")]
    pub preferences: Vec<String>,
    #[arg(long = "feature", value_name = "LABEL", help = "Selected feature (repeatable)")]
    pub features: Vec<String>,
    #[arg(long = "type", value_name = "TYPE", help = "SingleProduct or MultipleProducts")]
    pub recommendation_type: Option<RecommendationType>,
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["preferences", "features", "recommendation_type"],
        help = "Read the form selection from a JSON file instead of flags"
    )]
    pub selection: Option<PathBuf>,
    #[arg(long, value_name = "N", help = "Minimum score a product needs (overrides config)")]
    pub min_score: Option<u32>,
    #[arg(long, help = "Fail with an invalid_request error instead of returning no results")]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct RecommendReport<'a> {
    command: &'static str,
    status: &'static str,
    recommendation_type: RecommendationType,
    count: usize,
    recommendations: &'a [ScoredProduct],
}

pub fn run(args: RecommendArgs) -> CommandResult {
    let overrides = ConfigOverrides {
        catalog_path: args.catalog.clone(),
        min_score: args.min_score,
        ..ConfigOverrides::default()
    };
    let config = match load_config(overrides) {
        Ok(config) => config,
        Err(error) => return CommandResult::from_error("recommend", &error),
    };

    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(error) => return CommandResult::from_error("recommend", &error),
    };

    let selection = match build_selection(&args) {
        Ok(selection) => selection,
        Err(error) => {
            return CommandResult::failure("recommend", "selection_file", format!("{error:#}"), 4);
        }
    };

    let correlation_id = Uuid::new_v4();
    let span = tracing::info_span!("recommend", correlation_id = %correlation_id);
    let _entered = span.enter();

    let engine = RecommendationEngine::with_min_score(config.recommendation.min_score);
    let recommendations = if args.strict {
        match engine.try_recommend(selection.as_ref(), Some(&catalog)) {
            Ok(recommendations) => recommendations,
            Err(error) => {
                return CommandResult::from_error("recommend", &ApplicationError::from(error));
            }
        }
    } else {
        engine.recommend(selection.as_ref(), Some(&catalog))
    };

    tracing::info!(
        event_name = "cli.recommend.completed",
        catalog_size = catalog.len(),
        result_count = recommendations.len(),
        "recommendation request served"
    );

    let recommendation_type = selection
        .as_ref()
        .map(|selection| selection.selected_recommendation_type)
        .unwrap_or_default();

    CommandResult::report(&RecommendReport {
        command: "recommend",
        status: "ok",
        recommendation_type,
        count: recommendations.len(),
        recommendations: &recommendations,
    })
}

/// `None` means the caller supplied no form data at all (a `null` document).
fn build_selection(args: &RecommendArgs) -> anyhow::Result<Option<FormSelection>> {
    if let Some(path) = &args.selection {
        return read_selection(path);
    }

    Ok(Some(
        FormSelection::new()
            .with_preferences(args.preferences.iter().cloned())
            .with_features(args.features.iter().cloned())
            .with_recommendation_type(args.recommendation_type.unwrap_or_default()),
    ))
}

fn read_selection(path: &Path) -> anyhow::Result<Option<FormSelection>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read selection file `{}`", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("could not parse selection file `{}`", path.display()))
}
