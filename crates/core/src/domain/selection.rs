use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Output shape requested by the user.
///
/// `MultipleProducts` is the documented default: it applies when the field
/// is absent and whenever the wire value is not recognised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendationType {
    SingleProduct,
    #[default]
    MultipleProducts,
}

impl RecommendationType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleProduct => "SingleProduct",
            Self::MultipleProducts => "MultipleProducts",
        }
    }

    /// Lenient mapping used for request payloads.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "SingleProduct" => Self::SingleProduct,
            _ => Self::MultipleProducts,
        }
    }
}

impl std::fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported recommendation type `{0}` (expected SingleProduct|MultipleProducts)")]
pub struct ParseRecommendationTypeError(String);

impl FromStr for RecommendationType {
    type Err = ParseRecommendationTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "singleproduct" | "single" => Ok(Self::SingleProduct),
            "multipleproducts" | "multiple" => Ok(Self::MultipleProducts),
            _ => Err(ParseRecommendationTypeError(value.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for RecommendationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Any JSON value is accepted; only the exact string selects single mode.
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw.as_str().map(Self::from_wire).unwrap_or_default())
    }
}

/// What the user picked in the form.
///
/// Duplicate entries are tolerated; scoring deduplicates them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSelection {
    #[serde(default)]
    pub selected_preferences: Vec<String>,
    #[serde(default)]
    pub selected_features: Vec<String>,
    #[serde(default)]
    pub selected_recommendation_type: RecommendationType,
}

impl FormSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_preferences = preferences.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_recommendation_type(mut self, recommendation_type: RecommendationType) -> Self {
        self.selected_recommendation_type = recommendation_type;
        self
    }

    pub fn has_selections(&self) -> bool {
        !self.selected_preferences.is_empty() || !self.selected_features.is_empty()
    }
}
