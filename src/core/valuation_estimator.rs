// core/valuation_estimator.rs
use crate::models::{Confidence, ValuationRequest, ValuationResponse};
use crate::utils::error::Result;
use crate::utils::validation::validate_object;
use chrono::{Datelike, Utc};

/// Prix de référence d'un véhicule neuf
const BASE_PRICE: f64 = 50_000.0;
/// Dépréciation appliquée par année d'âge
const DEPRECIATION_PER_YEAR: f64 = 0.15;
/// Dépréciation appliquée aux véhicules de l'année (ou futurs)
const MIN_DEPRECIATION: f64 = 0.15;
const MAX_DEPRECIATION: f64 = 0.60;
/// Kilométrage annuel attendu
const EXPECTED_MILEAGE_PER_YEAR: i64 = 15_000;
/// Pénalité par unité de kilométrage excédentaire
const EXCESS_MILEAGE_PENALTY: f64 = 0.10;
/// Plancher des valeurs estimées
const VALUE_FLOOR: f64 = 1_000.0;

/// Estimation de la valeur d'un véhicule à partir de son âge, kilométrage et état
#[derive(Debug, Clone, Default)]
pub struct ValuationEstimator {
    reference_year: Option<i32>,
}

impl ValuationEstimator {
    /// Estimateur basé sur l'année courante
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimateur figé sur une année de référence
    pub fn with_reference_year(year: i32) -> Self {
        Self {
            reference_year: Some(year),
        }
    }

    /// Année utilisée pour calculer l'âge du véhicule
    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Utc::now().year())
    }

    /// Calcule l'estimation ; la requête doit fournir year, make et model
    pub fn estimate(&self, request: &ValuationRequest) -> Result<ValuationResponse> {
        validate_object(request)?;

        let age = i64::from(self.reference_year()) - i64::from(request.year);
        let depreciation_rate = depreciation_rate(age);
        let mileage_adjustment = mileage_adjustment(age, request.mileage);
        let multiplier = condition_multiplier(&request.condition);

        let market_value = BASE_PRICE * (1.0 - depreciation_rate) * multiplier;
        let estimated_value = market_value - mileage_adjustment;

        let currency = if request.currency.is_empty() {
            "USD".to_string()
        } else {
            request.currency.clone()
        };

        Ok(ValuationResponse {
            estimated_value: estimated_value.max(VALUE_FLOOR),
            market_value: market_value.max(VALUE_FLOOR),
            depreciation_rate,
            currency,
            confidence: confidence(age, request.mileage),
        })
    }
}

fn depreciation_rate(age: i64) -> f64 {
    if age <= 0 {
        MIN_DEPRECIATION
    } else {
        (age as f64 * DEPRECIATION_PER_YEAR).min(MAX_DEPRECIATION)
    }
}

/// Pénalité sur le kilométrage au-delà de l'usage attendu pour cet âge
fn mileage_adjustment(age: i64, mileage: i64) -> f64 {
    if mileage <= 0 {
        return 0.0;
    }

    let expected = age.saturating_mul(EXPECTED_MILEAGE_PER_YEAR);
    let excess = mileage.saturating_sub(expected);
    if excess > 0 {
        excess as f64 * EXCESS_MILEAGE_PENALTY
    } else {
        0.0
    }
}

fn condition_multiplier(condition: &str) -> f64 {
    match condition {
        "excellent" => 1.10,
        "good" => 1.0,
        "fair" => 0.90,
        "poor" => 0.75,
        _ => 1.0,
    }
}

fn confidence(age: i64, mileage: i64) -> Confidence {
    if age <= 3 && mileage < 50_000 {
        Confidence::High
    } else if age > 10 || mileage > 150_000 {
        Confidence::Low
    } else {
        Confidence::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;

    const YEAR: i32 = 2025;

    fn request(year: i32, mileage: i64, condition: &str) -> ValuationRequest {
        ValuationRequest {
            year,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            mileage,
            condition: condition.to_string(),
            currency: String::new(),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_end_to_end_honda_civic() {
        let estimator = ValuationEstimator::with_reference_year(2023);
        let req = ValuationRequest {
            year: 2023,
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            mileage: 5000,
            condition: "excellent".to_string(),
            currency: "USD".to_string(),
        };

        let result = estimator.estimate(&req).unwrap();
        assert_eq!(result.confidence, Confidence::High);
        assert!(approx(result.depreciation_rate, 0.15));
        assert!(approx(result.market_value, 46750.0));
        // age 0 : tout le kilométrage est excédentaire (5000 * 0.10)
        assert!(approx(result.estimated_value, 46250.0));
        assert!(result.estimated_value > 40000.0);
        assert_eq!(result.currency, "USD");
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);
        let req = request(2018, 80000, "fair");
        assert_eq!(estimator.estimate(&req).unwrap(), estimator.estimate(&req).unwrap());
    }

    #[test]
    fn test_condition_monotonicity() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);
        let values: Vec<f64> = ["excellent", "good", "fair", "poor"]
            .iter()
            .map(|c| estimator.estimate(&request(2020, 60000, c)).unwrap().estimated_value)
            .collect();

        assert!(values.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_unknown_condition_is_neutral() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);
        let good = estimator.estimate(&request(2020, 60000, "good")).unwrap();
        let empty = estimator.estimate(&request(2020, 60000, "")).unwrap();
        let odd = estimator.estimate(&request(2020, 60000, "Excellent")).unwrap();
        assert_eq!(good, empty);
        assert_eq!(good, odd);
    }

    #[test]
    fn test_depreciation_is_capped() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);
        let result = estimator.estimate(&request(2001, 0, "good")).unwrap();
        assert!(approx(result.depreciation_rate, 0.60));
        assert!(approx(result.market_value, 20000.0));
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_values_are_floored() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);
        let result = estimator.estimate(&request(2015, 2_000_000, "poor")).unwrap();
        assert!(approx(result.estimated_value, 1000.0));
        assert!(result.market_value >= 1000.0);

        for (year, mileage, condition) in [(1950, 0, "poor"), (2030, 900_000, "fair"), (2024, 10, "")] {
            let r = estimator.estimate(&request(year, mileage, condition)).unwrap();
            assert!(r.estimated_value >= 1000.0);
            assert!(r.market_value >= 1000.0);
        }
    }

    #[test]
    fn test_mileage_within_expectation_costs_nothing() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);
        // 5 ans → 75 000 attendus
        let result = estimator.estimate(&request(2020, 75000, "good")).unwrap();
        assert!(approx(result.estimated_value, result.market_value));

        let over = estimator.estimate(&request(2020, 85000, "good")).unwrap();
        assert!(approx(result.estimated_value - over.estimated_value, 1000.0));
    }

    #[test]
    fn test_future_year_uses_minimum_depreciation() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);
        let result = estimator.estimate(&request(2027, 1000, "good")).unwrap();
        assert!(approx(result.depreciation_rate, 0.15));
        // âge -2 : kilométrage attendu négatif, 31 000 excédentaires
        assert!(approx(result.estimated_value, 42500.0 - 3100.0));
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn test_extreme_years_and_mileage_stay_total() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);

        let ancient = estimator.estimate(&request(i32::MIN, 1000, "good")).unwrap();
        assert!(approx(ancient.depreciation_rate, 0.60));
        assert!(approx(ancient.market_value, 20000.0));
        assert_eq!(ancient.confidence, Confidence::Low);

        let far_future = estimator.estimate(&request(i32::MAX, i64::MAX, "good")).unwrap();
        assert!(approx(far_future.estimated_value, 1000.0));

        let huge = estimator.estimate(&request(2030, i64::MAX, "excellent")).unwrap();
        assert!(approx(huge.depreciation_rate, 0.15));
        assert!(approx(huge.estimated_value, 1000.0));
        assert_eq!(huge.confidence, Confidence::Low);
    }

    #[test]
    fn test_confidence_boundaries() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);

        let high = estimator.estimate(&request(YEAR - 3, 49999, "good")).unwrap();
        assert_eq!(high.confidence, Confidence::High);

        let medium = estimator.estimate(&request(YEAR - 3, 50000, "good")).unwrap();
        assert_eq!(medium.confidence, Confidence::Medium);

        for mileage in [0, 10_000, 200_000] {
            let low = estimator.estimate(&request(YEAR - 11, mileage, "good")).unwrap();
            assert_eq!(low.confidence, Confidence::Low);
        }

        let worn = estimator.estimate(&request(YEAR - 5, 150_001, "good")).unwrap();
        assert_eq!(worn.confidence, Confidence::Low);
    }

    #[test]
    fn test_currency_default_and_echo() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);
        assert_eq!(estimator.estimate(&request(2020, 0, "good")).unwrap().currency, "USD");

        let gbp = ValuationRequest {
            currency: "gbp".to_string(),
            ..request(2020, 0, "good")
        };
        assert_eq!(estimator.estimate(&gbp).unwrap().currency, "gbp");
    }

    #[test]
    fn test_invalid_request_is_rejected() {
        let estimator = ValuationEstimator::with_reference_year(YEAR);

        let no_year = request(0, 1000, "good");
        assert!(matches!(estimator.estimate(&no_year), Err(AppError::Validation(_))));

        let no_make = ValuationRequest {
            make: String::new(),
            ..request(2020, 1000, "good")
        };
        let err = estimator.estimate(&no_make).unwrap_err();
        assert!(err.to_string().contains("Make is required"));
    }

    #[test]
    fn test_default_reference_year_is_current() {
        assert_eq!(ValuationEstimator::new().reference_year(), Utc::now().year());
    }
}
