// core/auth_service.rs
use crate::infrastructure::store::UserRepository;
use crate::models::{AuthenticatedUser, LoginResponse, UserResponse};
use crate::utils::error::{AppError, Result};
use crate::utils::security::{verify_password, JwtManager};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Schéma attendu dans l'en-tête `Authorization`
const BEARER_SCHEME: &str = "Bearer";

/// Connexion par email/mot de passe et vérification des tokens de session
#[derive(Clone)]
pub struct AuthService {
    users: Arc<UserRepository>,
    jwt: JwtManager,
}

impl AuthService {
    pub fn new(users: Arc<UserRepository>, jwt: JwtManager) -> Self {
        Self { users, jwt }
    }

    /// Authentification email/mot de passe
    ///
    /// Utilisateur inconnu, mot de passe faux ou hash illisible donnent tous
    /// `InvalidCredentials` ; la cause exacte ne part que dans les logs.
    /// La vérification Argon2 est coûteuse : à appeler depuis `web::block`.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let user = match self.users.get_by_email(email) {
            Ok(user) => user,
            Err(_) => {
                warn!(email = %email, "🔒 Connexion refusée : utilisateur inconnu");
                return Err(AppError::InvalidCredentials);
            }
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                warn!(user_id = %user.id, "🔒 Connexion refusée : mot de passe incorrect");
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => {
                error!(user_id = %user.id, error = %e, "❌ Hash de mot de passe illisible");
                return Err(AppError::InvalidCredentials);
            }
        }

        let token = self.jwt.generate_token(&user.id, &user.email)?;
        info!(
            user_id = %user.id,
            email = %user.email,
            expires_in_hours = self.jwt.token_duration().num_hours(),
            "✅ Connexion réussie"
        );

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    /// Vérifie un en-tête `Authorization: Bearer <token>`
    pub fn authenticate(&self, header: Option<&str>) -> Result<AuthenticatedUser> {
        let header = header.ok_or_else(|| {
            AppError::Unauthorized("Authorization header required".to_string())
        })?;

        let parts: Vec<&str> = header.split(' ').collect();
        if parts.len() != 2 || parts[0] != BEARER_SCHEME {
            return Err(AppError::Unauthorized(
                "Invalid authorization header format".to_string(),
            ));
        }

        let claims = self.jwt.validate_token(parts[1])?;

        Ok(AuthenticatedUser {
            user_id: claims.user_id,
            email: claims.email,
        })
    }
}
