#![allow(dead_code)]

use actix_web::web;
use std::path::PathBuf;
use std::sync::Arc;

use autostack_api::api::{configure_inventory, configure_valuations};
use autostack_api::{
    AuthService, Config, JwtManager, ServiceKind, UserRepository, ValuationEstimator,
    ValuationRepository, VehicleRepository,
};

pub const JWT_SECRET: &str = "integration-test-secret-with-enough-length";
/// Mot de passe des comptes de démonstration du seed
pub const DEMO_PASSWORD: &str = "password";

pub fn seed_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("seed")
}

pub fn test_config(service: ServiceKind) -> Config {
    Config::from_lookup(service, |key| match key {
        "DATA_PATH" => Some(seed_dir().display().to_string()),
        "JWT_SECRET" => Some(JWT_SECRET.to_string()),
        "RUN_MODE" => Some("test".to_string()),
        _ => None,
    })
    .unwrap()
}

fn jwt() -> JwtManager {
    JwtManager::new(JWT_SECRET, chrono::Duration::hours(24))
}

fn register_common(cfg: &mut web::ServiceConfig, config: Config) {
    let users = UserRepository::load(&config.data_path).unwrap();
    cfg.app_data(web::Data::new(AuthService::new(Arc::new(users), jwt())))
        .app_data(web::Data::new(config));
}

/// Application `api-inventory` sur le seed livré
pub fn inventory(cfg: &mut web::ServiceConfig) {
    let config = test_config(ServiceKind::Inventory);
    let vehicles = VehicleRepository::load(&config.data_path).unwrap();
    cfg.app_data(web::Data::new(vehicles));
    register_common(cfg, config);
    configure_inventory(cfg);
}

/// Application `api-valuations` sur le seed livré
pub fn valuations(cfg: &mut web::ServiceConfig) {
    let config = test_config(ServiceKind::Valuations);
    let valuations = ValuationRepository::load(&config.data_path).unwrap();
    cfg.app_data(web::Data::new(valuations))
        .app_data(web::Data::new(ValuationEstimator::new()));
    register_common(cfg, config);
    configure_valuations(cfg);
}

/// En-tête `Authorization` valide pour un utilisateur du seed
pub fn bearer(user_id: &str, email: &str) -> (&'static str, String) {
    let token = jwt().generate_token(user_id, email).unwrap();
    ("Authorization", format!("Bearer {}", token))
}

pub fn demo_bearer() -> (&'static str, String) {
    bearer("user-001", "demo@autostack.com")
}
