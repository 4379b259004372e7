use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_model_year;

/// Estimation historique chargée depuis le seed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Valuation {
    pub id: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub mileage: i64,
    pub condition: String,
    pub estimated_value: f64,
    pub market_value: f64,
    pub depreciation_rate: f64,
    pub calculated_at: DateTime<Utc>,
}

/// Demande d'estimation instantanée
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ValuationRequest {
    #[validate(custom = "validate_model_year")]
    pub year: i32,
    #[validate(length(min = 1, message = "Make is required"))]
    pub make: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    pub mileage: i64,
    pub condition: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub currency: String,
}

/// Niveau de confiance d'une estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Résultat d'une estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResponse {
    pub estimated_value: f64,
    pub market_value: f64,
    pub depreciation_rate: f64,
    pub currency: String,
    pub confidence: Confidence,
}

/// Agrégat renvoyé par `/valuations/summary`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSummary {
    pub total_valuations: usize,
    pub total_value: String,
    pub average_depreciation: String,
    pub calculated_at: String,
}

impl ValuationSummary {
    /// Calcule le résumé d'un ensemble d'estimations
    pub fn from_valuations(valuations: &[Valuation], now: DateTime<Utc>) -> Self {
        let count = valuations.len();
        let total_value: f64 = valuations.iter().fold(0.0, |acc, v| acc + v.estimated_value);
        let total_depreciation: f64 = valuations.iter().fold(0.0, |acc, v| acc + v.depreciation_rate);

        let average_depreciation = if count > 0 {
            total_depreciation / count as f64
        } else {
            0.0
        };

        Self {
            total_valuations: count,
            total_value: format!("{:.2}", total_value),
            average_depreciation: format!("{:.2}%", average_depreciation * 100.0),
            calculated_at: now.to_rfc3339(),
        }
    }
}
