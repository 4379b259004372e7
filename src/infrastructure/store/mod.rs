//! # Seed Store
//!
//! Chargement unique des fichiers JSON de seed en mémoire. Une fois construit,
//! un `RecordStore` n'est plus jamais modifié : il est partagé entre les
//! workers via `Arc`/`web::Data` et lu sans verrou.
//!
//! ## Fichiers
//! - `users.json` : utilisateurs (les deux services)
//! - `vehicles.json` : inventaire (`api-inventory`)
//! - `valuations.json` : estimations historiques (`api-valuations`)

pub mod users;
pub mod vehicles;
pub mod valuations;

pub use users::UserRepository;
pub use vehicles::VehicleRepository;
pub use valuations::ValuationRepository;

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Erreur fatale de chargement du seed
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Impossible de lire {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Fichier de seed invalide {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Enregistrement adressable par identifiant
pub trait Identified {
    fn id(&self) -> &str;
}

/// Collection immuable indexée par ID, dans l'ordre du fichier de seed
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Identified> RecordStore<T> {
    /// Construit le store ; un ID en double remplace l'enregistrement précédent à sa place
    pub fn from_records(items: Vec<T>) -> Self {
        let mut records: Vec<T> = Vec::with_capacity(items.len());
        let mut index = HashMap::with_capacity(items.len());

        for item in items {
            match index.get(item.id()) {
                Some(&position) => records[position] = item,
                None => {
                    index.insert(item.id().to_string(), records.len());
                    records.push(item);
                }
            }
        }

        Self { records, index }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Identified + DeserializeOwned> RecordStore<T> {
    /// Lit un tableau JSON d'enregistrements
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = fs::read(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let items: Vec<T> = serde_json::from_slice(&data).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_records(items))
    }
}
