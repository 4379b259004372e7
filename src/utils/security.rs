// utils/security.rs
use crate::utils::error::{AppError, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims JWT portés par les tokens de session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,  // User ID
    pub email: String,    // User email
    pub exp: usize,       // Expiration timestamp
    pub iat: usize,       // Issued at timestamp
    pub nbf: usize,       // Not before timestamp
    pub jti: String,      // Token ID
}

/// Émission et vérification des tokens HS256
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_duration: Duration,
}

impl JwtManager {
    pub fn new(secret: &str, token_duration: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_duration,
        }
    }

    /// Durée de validité des tokens émis
    pub fn token_duration(&self) -> Duration {
        self.token_duration
    }

    /// Générer un token signé pour un utilisateur
    pub fn generate_token(&self, user_id: &str, email: &str) -> Result<String> {
        let now = Utc::now();
        let expires_at = now + self.token_duration;

        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
            nbf: now.timestamp() as usize,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Vérifier la signature et l'expiration d'un token
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            // Expiré ou falsifié : même réponse, seule la trace diffère
            tracing::debug!(error = %e, "token rejeté");
            AppError::Unauthorized("invalid token".to_string())
        })?;

        Ok(token_data.claims)
    }
}

/// Générer un hash de mot de passe avec Argon2
pub fn hash_password(password: &str) -> Result<String> {
    use argon2::{
        password_hash::{PasswordHasher, SaltString},
        Argon2,
    };
    use rand::rngs::OsRng;

    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::EncryptionError(e.to_string()))
}

/// Vérifier un mot de passe contre un hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    use argon2::{
        password_hash::{PasswordHash, PasswordVerifier},
        Argon2,
    };

    let argon2 = Argon2::default();
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::EncryptionError(e.to_string()))?;

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
