// core/mod.rs
pub mod auth_service;
pub mod valuation_estimator;
pub mod vehicle_search;

// Ré-exports pour faciliter l'import
pub use auth_service::AuthService;
pub use valuation_estimator::ValuationEstimator;
