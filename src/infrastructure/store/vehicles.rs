use std::path::Path;
use tracing::{info, warn};

use super::{Identified, RecordStore, StoreError};
use crate::core::vehicle_search;
use crate::models::{Vehicle, VehicleFilter};
use crate::utils::error::{AppError, Result};

impl Identified for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Repository en lecture seule de l'inventaire
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    store: RecordStore<Vehicle>,
}

impl VehicleRepository {
    pub const FILE_NAME: &'static str = "vehicles.json";

    /// Charge `vehicles.json` depuis le répertoire de seed
    pub fn load(data_path: &Path) -> std::result::Result<Self, StoreError> {
        let store = RecordStore::load(&data_path.join(Self::FILE_NAME))?;
        info!("🚗 {} véhicules chargés depuis {}", store.len(), data_path.display());

        let repo = Self { store };
        if repo.is_empty() {
            warn!("⚠️  Inventaire vide dans {}", data_path.display());
        }
        Ok(repo)
    }

    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            store: RecordStore::from_records(vehicles),
        }
    }

    pub fn get_by_id(&self, vehicle_id: &str) -> Result<&Vehicle> {
        self.store
            .get(vehicle_id)
            .ok_or_else(|| AppError::NotFound("Vehicle".to_string()))
    }

    pub fn all(&self) -> &[Vehicle] {
        self.store.all()
    }

    /// Véhicules correspondant au filtre, dans l'ordre du seed
    pub fn search(&self, filter: &VehicleFilter) -> Vec<&Vehicle> {
        vehicle_search::search(self.store.all(), filter)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
