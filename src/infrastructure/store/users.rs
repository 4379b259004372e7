use std::path::Path;
use tracing::{info, warn};

use super::{Identified, RecordStore, StoreError};
use crate::models::User;
use crate::utils::error::{AppError, Result};

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Repository en lecture seule pour les utilisateurs
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: RecordStore<User>,
}

impl UserRepository {
    pub const FILE_NAME: &'static str = "users.json";

    /// Charge `users.json` depuis le répertoire de seed
    pub fn load(data_path: &Path) -> std::result::Result<Self, StoreError> {
        let store = RecordStore::load(&data_path.join(Self::FILE_NAME))?;
        info!("👤 {} utilisateurs chargés depuis {}", store.len(), data_path.display());

        let repo = Self { store };
        if repo.is_empty() {
            warn!("⚠️  Aucun utilisateur dans {} : toute connexion sera refusée", data_path.display());
        }
        Ok(repo)
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            store: RecordStore::from_records(users),
        }
    }

    /// Récupère un utilisateur par son ID
    pub fn get_by_id(&self, user_id: &str) -> Result<&User> {
        self.store
            .get(user_id)
            .ok_or_else(|| AppError::NotFound("User".to_string()))
    }

    /// Récupère le premier utilisateur dont l'email correspond exactement
    pub fn get_by_email(&self, email: &str) -> Result<&User> {
        self.store
            .all()
            .iter()
            .find(|user| user.email == email)
            .ok_or_else(|| AppError::NotFound("User".to_string()))
    }

    pub fn all(&self) -> &[User] {
        self.store.all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
