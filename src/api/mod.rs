pub mod routes;

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::utils::config::Config;
use crate::utils::error::AppError;
use routes::middleware::AuthMiddleware;

/// Configure les routes de `api-inventory`
pub fn configure_inventory(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_check)
        // Routes publiques
        .service(web::scope("/api/v1/auth").service(routes::auth::login))
        // Routes protégées par authentification
        .service(
            web::scope("/api/v1")
                .wrap(AuthMiddleware)
                .service(routes::vehicles::list_vehicles)
                .service(routes::vehicles::search_vehicles)
                .service(routes::vehicles::get_vehicle),
        );
}

/// Configure les routes de `api-valuations`
pub fn configure_valuations(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_check)
        // Routes publiques
        .service(web::scope("/api/v1/auth").service(routes::auth::login))
        // Routes protégées par authentification
        .service(
            web::scope("/api/v1")
                .wrap(AuthMiddleware)
                .service(routes::valuations::list_valuations)
                .service(routes::valuations::valuation_summary)
                .service(routes::valuations::estimate_valuation)
                .service(routes::valuations::get_valuation),
        );
}

/// Corps JSON illisible → 400 au format d'erreur commun
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Query string illisible → 400 au format d'erreur commun
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Endpoint de santé pour monitoring
#[get("/health")]
async fn health_check(config: web::Data<Config>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": config.service.name(),
        "version": crate::VERSION,
        "environment": config.run_mode,
    }))
}
