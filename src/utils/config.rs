// utils/config.rs
use crate::utils::error::{AppError, Result};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Secret utilisé quand `JWT_SECRET` n'est pas défini
pub const DEFAULT_JWT_SECRET: &str = "dev-jwt-secret-change-in-production";

/// Durée de vie maximale d'un token : un an
pub const MAX_JWT_EXPIRY_HOURS: i64 = 24 * 365;

/// Les deux services exposés par ce backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Inventory,
    Valuations,
}

impl ServiceKind {
    /// Nom rapporté par `/health` et dans les logs
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Inventory => "api-inventory",
            ServiceKind::Valuations => "api-valuations",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Inventory => 8001,
            ServiceKind::Valuations => 8002,
        }
    }

    /// Fichier de seed du catalogue propre au service
    pub fn catalog_file(&self) -> &'static str {
        match self {
            ServiceKind::Inventory => "vehicles.json",
            ServiceKind::Valuations => "valuations.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceKind,

    // Environnement et serveur
    pub run_mode: String,
    pub server_host: String,
    pub server_port: u16,
    pub workers: usize,

    // Logging
    pub log_level: String,
    pub logging_format: String,

    // Données
    pub data_path: PathBuf,

    // Sécurité
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
}

impl Config {
    /// Charger la configuration depuis les variables d'environnement
    pub fn from_env(service: ServiceKind) -> Result<Self> {
        // Charger le fichier .env si présent
        dotenv().ok();

        Self::from_lookup(service, |key| env::var(key).ok())
    }

    /// Construire la configuration à partir d'une fonction de lecture clé → valeur
    pub fn from_lookup<F>(service: ServiceKind, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Une variable vide compte comme absente
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let config = Config {
            service,

            run_mode: get_or("RUN_MODE", "development"),
            server_host: get_or("SERVER_HOST", "0.0.0.0"),
            server_port: parse_var("PORT", get("PORT"), service.default_port())?,
            workers: parse_var("WORKERS", get("WORKERS"), 4)?,

            log_level: get_or("LOG_LEVEL", "info"),
            logging_format: get_or("LOG_FORMAT", "json"),

            data_path: PathBuf::from(get_or("DATA_PATH", "/app/data/seed")),

            jwt_secret: get_or("JWT_SECRET", DEFAULT_JWT_SECRET),
            jwt_expiry_hours: parse_var("JWT_EXPIRY_HOURS", get("JWT_EXPIRY_HOURS"), 24)?,
        };

        if config.workers == 0 {
            return Err(AppError::Configuration("WORKERS must be at least 1".to_string()));
        }
        if config.jwt_expiry_hours <= 0 {
            return Err(AppError::Configuration(
                "JWT_EXPIRY_HOURS must be a positive number".to_string(),
            ));
        }
        if config.jwt_expiry_hours > MAX_JWT_EXPIRY_HOURS
            || chrono::Duration::try_hours(config.jwt_expiry_hours).is_none()
        {
            return Err(AppError::Configuration(format!(
                "JWT_EXPIRY_HOURS must not exceed {}",
                MAX_JWT_EXPIRY_HOURS
            )));
        }

        Ok(config)
    }

    /// Le secret JWT est-il trop faible pour la production ?
    pub fn has_weak_jwt_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET || self.jwt_secret.len() < 32
    }

    /// Vérifier si on est en production
    pub fn is_production(&self) -> bool {
        self.run_mode == "production"
    }
}

fn parse_var<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("{} must be a number", key))),
        None => Ok(default),
    }
}
