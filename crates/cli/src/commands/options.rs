use std::path::PathBuf;

use recommender_core::config::ConfigOverrides;
use serde::Serialize;

use crate::commands::{load_catalog, load_config, CommandResult};

#[derive(Debug, Serialize)]
struct OptionsReport {
    command: &'static str,
    status: &'static str,
    catalog_size: usize,
    preferences: Vec<String>,
    features: Vec<String>,
}

pub fn run(catalog_path: Option<PathBuf>) -> CommandResult {
    let overrides = ConfigOverrides { catalog_path, ..ConfigOverrides::default() };
    let catalog = match load_config(overrides).and_then(|config| load_catalog(&config)) {
        Ok(catalog) => catalog,
        Err(error) => return CommandResult::from_error("options", &error),
    };

    CommandResult::report(&OptionsReport {
        command: "options",
        status: "ok",
        catalog_size: catalog.len(),
        preferences: catalog.available_preferences(),
        features: catalog.available_features(),
    })
}
