use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{info, warn};

use super::{Identified, RecordStore, StoreError};
use crate::models::{Valuation, ValuationSummary};
use crate::utils::error::{AppError, Result};

impl Identified for Valuation {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Repository en lecture seule des estimations historiques
#[derive(Debug, Clone)]
pub struct ValuationRepository {
    store: RecordStore<Valuation>,
}

impl ValuationRepository {
    pub const FILE_NAME: &'static str = "valuations.json";

    /// Charge `valuations.json` depuis le répertoire de seed
    pub fn load(data_path: &Path) -> std::result::Result<Self, StoreError> {
        let store = RecordStore::load(&data_path.join(Self::FILE_NAME))?;
        info!("📊 {} estimations chargées depuis {}", store.len(), data_path.display());

        let repo = Self { store };
        if repo.is_empty() {
            warn!("⚠️  Aucune estimation historique dans {}", data_path.display());
        }
        Ok(repo)
    }

    pub fn from_valuations(valuations: Vec<Valuation>) -> Self {
        Self {
            store: RecordStore::from_records(valuations),
        }
    }

    pub fn get_by_id(&self, valuation_id: &str) -> Result<&Valuation> {
        self.store
            .get(valuation_id)
            .ok_or_else(|| AppError::NotFound("Valuation".to_string()))
    }

    pub fn all(&self) -> &[Valuation] {
        self.store.all()
    }

    /// Agrège toutes les estimations connues
    pub fn summary(&self, now: DateTime<Utc>) -> ValuationSummary {
        ValuationSummary::from_valuations(self.store.all(), now)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
