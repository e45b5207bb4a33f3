pub mod config;
pub mod doctor;
pub mod options;
pub mod recommend;

use recommender_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use recommender_core::fixtures::demo_catalog;
use recommender_core::{ApplicationError, ProductCatalog};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(&payload) }
    }

    pub fn report(payload: &impl Serialize) -> Self {
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    /// Failure payload for an application error, classified by its kind.
    pub fn from_error(command: &str, error: &ApplicationError) -> Self {
        let exit_code = match error {
            ApplicationError::Configuration(_) => 2,
            ApplicationError::Catalog(_) => 3,
            ApplicationError::Domain(_) => 5,
        };
        Self::failure(command, error.error_class(), error.to_string(), exit_code)
    }
}

fn serialize_payload(payload: &impl Serialize) -> String {
    serde_json::to_string(payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

pub(crate) fn load_config(overrides: ConfigOverrides) -> Result<AppConfig, ApplicationError> {
    Ok(AppConfig::load(LoadOptions { overrides, ..LoadOptions::default() })?)
}

/// Configured catalog file, or the demo catalog when none is set.
pub(crate) fn load_catalog(config: &AppConfig) -> Result<ProductCatalog, ApplicationError> {
    match &config.catalog.path {
        Some(path) => Ok(ProductCatalog::load(path)?),
        None => Ok(demo_catalog()),
    }
}
