use serde::Serialize;
use thiserror::Error;

use crate::catalog::ProductCatalog;
use crate::domain::selection::FormSelection;

/// Reasons a request is rejected before scoring.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("no products available")]
    MissingCatalog,
    #[error("form data is required")]
    MissingSelection,
    #[error("at least one preference or feature must be selected")]
    EmptySelection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self { is_valid: true, message: None }
    }

    fn invalid(reason: InvalidRequest) -> Self {
        Self { is_valid: false, message: Some(reason.to_string()) }
    }
}

pub fn check_request(
    selection: Option<&FormSelection>,
    catalog: Option<&ProductCatalog>,
) -> Result<(), InvalidRequest> {
    require_request(selection, catalog).map(|_| ())
}

/// Same checks as [`check_request`], handing back the unwrapped inputs.
pub(super) fn require_request<'a>(
    selection: Option<&'a FormSelection>,
    catalog: Option<&'a ProductCatalog>,
) -> Result<(&'a FormSelection, &'a ProductCatalog), InvalidRequest> {
    let catalog = match catalog {
        Some(catalog) if !catalog.is_empty() => catalog,
        _ => return Err(InvalidRequest::MissingCatalog),
    };

    let Some(selection) = selection else {
        return Err(InvalidRequest::MissingSelection);
    };

    if !selection.has_selections() {
        return Err(InvalidRequest::EmptySelection);
    }

    Ok((selection, catalog))
}

pub fn validate_request(
    selection: Option<&FormSelection>,
    catalog: Option<&ProductCatalog>,
) -> ValidationResult {
    match check_request(selection, catalog) {
        Ok(()) => ValidationResult::valid(),
        Err(reason) => ValidationResult::invalid(reason),
    }
}
