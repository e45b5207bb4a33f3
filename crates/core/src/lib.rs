pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod recommendation;

pub use catalog::{CatalogError, ProductCatalog};
pub use domain::product::{Product, ProductId, ScoredProduct};
pub use domain::selection::{FormSelection, RecommendationType};
pub use errors::{ApplicationError, DomainError};
pub use recommendation::{
    get_recommendations, InvalidRequest, RecommendationEngine, ValidationResult,
    DEFAULT_MIN_SCORE,
};
