use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Représente un utilisateur du système
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Identifiant unique de l'utilisateur
    pub id: String,
    /// Email de l'utilisateur (comparaison exacte, sensible à la casse)
    pub email: String,
    /// Hash Argon2 du mot de passe (champ `password` du seed, jamais exposé)
    #[serde(rename = "password", skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub country: String,
    pub preferred_currency: String,
    pub roles: Vec<String>,
    /// Préférences de recherche, présentes uniquement côté inventaire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub price_range: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vehicle_types: Vec<String>,
}

/// Vue publique de l'utilisateur (exclut les données sensibles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub country: String,
    pub preferred_currency: String,
    pub roles: Vec<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            country: user.country.clone(),
            preferred_currency: user.preferred_currency.clone(),
            roles: user.roles.clone(),
        }
    }
}

/// Requête pour la connexion ; un champ absent vaut chaîne vide
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Réponse de connexion réussie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Identité décodée du token, transmise explicitement aux handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}
