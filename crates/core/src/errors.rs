use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::recommendation::InvalidRequest;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("catalog failure: {0}")]
    Catalog(#[from] CatalogError),
    #[error("configuration failure: {0}")]
    Configuration(#[from] ConfigError),
}

impl ApplicationError {
    /// Stable snake_case label for machine-readable command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::InvalidRequest(_)) => "invalid_request",
            Self::Catalog(_) => "catalog_load",
            Self::Configuration(_) => "config_validation",
        }
    }
}
