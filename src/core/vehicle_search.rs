//! # Vehicle Search
//!
//! Moteur de filtre de l'inventaire. Un véhicule correspond à un filtre si
//! **tous** les critères renseignés sont satisfaits :
//! - champs texte : égalité insensible à la casse, un critère vide est ignoré
//! - bornes de prix et d'année : inclusives, une borne nulle (ou négative) est ignorée
//! - `vehicleTypes` : le type doit correspondre à au moins une entrée
//!
//! L'ordre du résultat est celui du store.

use crate::models::{Vehicle, VehicleFilter};

/// Sélectionne les véhicules qui satisfont le filtre
pub fn search<'a>(vehicles: &'a [Vehicle], filter: &VehicleFilter) -> Vec<&'a Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| matches_filter(vehicle, filter))
        .collect()
}

/// Vérifie si un véhicule satisfait tous les critères du filtre
pub fn matches_filter(vehicle: &Vehicle, filter: &VehicleFilter) -> bool {
    let text_criteria = [
        (&filter.make, &vehicle.make),
        (&filter.model, &vehicle.model),
        (&filter.vehicle_type, &vehicle.vehicle_type),
        (&filter.condition, &vehicle.condition),
        (&filter.currency, &vehicle.currency),
        (&filter.country, &vehicle.country),
        (&filter.fuel_type, &vehicle.fuel_type),
        (&filter.transmission, &vehicle.transmission),
        (&filter.drivetrain, &vehicle.drivetrain),
    ];

    if text_criteria
        .iter()
        .any(|(wanted, actual)| !wanted.is_empty() && !eq_fold(wanted, actual))
    {
        return false;
    }

    // Prix
    if filter.min_price > 0.0 && vehicle.price < filter.min_price {
        return false;
    }
    if filter.max_price > 0.0 && vehicle.price > filter.max_price {
        return false;
    }

    // Année
    if filter.min_year > 0 && vehicle.year < filter.min_year {
        return false;
    }
    if filter.max_year > 0 && vehicle.year > filter.max_year {
        return false;
    }

    // Types multiples (OU à l'intérieur du champ)
    if !filter.vehicle_types.is_empty()
        && !filter
            .vehicle_types
            .iter()
            .any(|wanted| eq_fold(wanted, &vehicle.vehicle_type))
    {
        return false;
    }

    true
}

/// Égalité insensible à la casse (Unicode)
fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
