use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Annonce de véhicule de l'inventaire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub condition: String,
    pub mileage: i64,
    pub price: f64,
    pub currency: String,
    pub country: String,
    pub status: String,
    pub fuel_type: String,
    pub transmission: String,
    pub drivetrain: String,
    pub exterior_color: String,
    pub interior_color: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub dealer_rating: f64,
    pub location: String,
    pub listing_date: DateTime<Utc>,
}

/// Critères de recherche ; un champ vide ou nul n'impose aucune contrainte
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub make: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub model: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub vehicle_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub condition: String,
    pub min_price: f64,
    pub max_price: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    pub min_year: i32,
    pub max_year: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fuel_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub transmission: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub drivetrain: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vehicle_types: Vec<String>,
}

impl VehicleFilter {
    /// Le listing ne passe par le moteur de filtre que si l'un de ces champs est renseigné
    pub fn triggers_search(&self) -> bool {
        !self.make.is_empty()
            || !self.model.is_empty()
            || !self.vehicle_type.is_empty()
            || self.min_price > 0.0
            || !self.currency.is_empty()
    }

    /// Aucun critère renseigné
    pub fn is_empty(&self) -> bool {
        *self == VehicleFilter::default()
    }
}
