//! # Domain Models Module
//!
//! Modèles de données partagés par les deux services (API, services, stockage).
//!
//! ## Structure
//! - `user.rs`: utilisateurs, vue publique et identité authentifiée
//! - `vehicle.rs`: annonces de l'inventaire et critères de recherche
//! - `valuation.rs`: estimations historiques, demandes et résultats
//!
//! ## Conventions
//! - Les noms de champs JSON sont en camelCase, comme les fichiers de seed
//! - Les champs sensibles sont exclus de la sérialisation JSON
//! - Les champs absents du seed prennent leur valeur par défaut

pub mod user;
pub mod vehicle;
pub mod valuation;

pub use user::{AuthenticatedUser, LoginRequest, LoginResponse, Preferences, User, UserResponse};
pub use vehicle::{Vehicle, VehicleFilter};
pub use valuation::{Confidence, Valuation, ValuationRequest, ValuationResponse, ValuationSummary};

use serde::{Deserialize, Serialize};

/// Enveloppe `{data, count}` des listes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Enveloppe `{data}` d'un élément unique
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
