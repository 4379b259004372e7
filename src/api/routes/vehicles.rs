use actix_web::{get, post, web, HttpResponse};
use std::str::FromStr;
use tracing::debug;

use crate::infrastructure::store::VehicleRepository;
use crate::models::{AuthenticatedUser, DataResponse, ListResponse, Vehicle, VehicleFilter};
use crate::utils::error::Result;

/// Paramètres de requête du listing
///
/// Tout arrive en texte : un nombre illisible est ignoré plutôt que rejeté.
/// Une clé répétée garde sa première valeur.
#[derive(Debug, Default)]
pub struct VehicleQuery {
    pub make: Option<String>,
    pub model: Option<String>,
    pub vehicle_type: Option<String>,
    pub condition: Option<String>,
    pub currency: Option<String>,
    pub country: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub drivetrain: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
}

impl VehicleQuery {
    /// Construit la requête à partir des paires `clé=valeur` dans leur ordre d'arrivée
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "make" => &mut query.make,
                "model" => &mut query.model,
                "type" => &mut query.vehicle_type,
                "condition" => &mut query.condition,
                "currency" => &mut query.currency,
                "country" => &mut query.country,
                "fuelType" => &mut query.fuel_type,
                "transmission" => &mut query.transmission,
                "drivetrain" => &mut query.drivetrain,
                "minPrice" => &mut query.min_price,
                "maxPrice" => &mut query.max_price,
                "minYear" => &mut query.min_year,
                "maxYear" => &mut query.max_year,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }

    pub fn into_filter(self) -> VehicleFilter {
        VehicleFilter {
            make: self.make.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            vehicle_type: self.vehicle_type.unwrap_or_default(),
            condition: self.condition.unwrap_or_default(),
            currency: self.currency.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            fuel_type: self.fuel_type.unwrap_or_default(),
            transmission: self.transmission.unwrap_or_default(),
            drivetrain: self.drivetrain.unwrap_or_default(),
            min_price: parse_or_unset(self.min_price),
            max_price: parse_or_unset(self.max_price),
            min_year: parse_or_unset(self.min_year),
            max_year: parse_or_unset(self.max_year),
            vehicle_types: Vec::new(),
        }
    }
}

fn parse_or_unset<T: FromStr + Default>(raw: Option<String>) -> T {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

/// Liste l'inventaire, filtré par les paramètres de requête
#[get("/vehicles")]
pub async fn list_vehicles(
    vehicles: web::Data<VehicleRepository>,
    query: web::Query<Vec<(String, String)>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let filter = VehicleQuery::from_pairs(query.into_inner()).into_filter();

    let found: Vec<&Vehicle> = if filter.triggers_search() {
        vehicles.search(&filter)
    } else {
        if !filter.is_empty() {
            debug!(?filter, "Critères sans make/model/type/minPrice/currency : listing complet");
        }
        vehicles.all().iter().collect()
    };

    debug!(user_id = %user.user_id, count = found.len(), "📋 Listing véhicules");
    Ok(HttpResponse::Ok().json(ListResponse::new(found)))
}

/// Recherche avancée : le corps est toujours appliqué comme filtre
#[post("/vehicles/search")]
pub async fn search_vehicles(
    vehicles: web::Data<VehicleRepository>,
    filter: web::Json<VehicleFilter>,
    user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let found = vehicles.search(&filter);

    debug!(user_id = %user.user_id, count = found.len(), "🔎 Recherche véhicules");
    Ok(HttpResponse::Ok().json(ListResponse::new(found)))
}

#[get("/vehicles/{id}")]
pub async fn get_vehicle(
    vehicles: web::Data<VehicleRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let vehicle_id = path.into_inner();
    let vehicle = vehicles.get_by_id(&vehicle_id).map_err(|e| {
        debug!(vehicle_id = %vehicle_id, "Véhicule introuvable");
        e
    })?;

    Ok(HttpResponse::Ok().json(DataResponse::new(vehicle)))
}
