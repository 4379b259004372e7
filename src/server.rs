//! # Server
//!
//! Démarrage commun aux deux binaires : configuration, logging, chargement du
//! seed puis serveur Actix-Web. Le seed est entièrement chargé avant que le
//! socket n'accepte la moindre connexion.

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpServer};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::core::{AuthService, ValuationEstimator};
use crate::infrastructure::store::{StoreError, UserRepository, ValuationRepository, VehicleRepository};
use crate::utils::config::{Config, ServiceKind};
use crate::utils::security::JwtManager;

/// Données propres à chaque service
#[derive(Clone)]
pub enum Catalog {
    Vehicles(web::Data<VehicleRepository>),
    Valuations {
        valuations: web::Data<ValuationRepository>,
        estimator: web::Data<ValuationEstimator>,
    },
}

impl Catalog {
    /// Charge le fichier de seed du service
    pub fn load(service: ServiceKind, data_path: &Path) -> Result<Self, StoreError> {
        let catalog = match service {
            ServiceKind::Inventory => {
                Catalog::Vehicles(web::Data::new(VehicleRepository::load(data_path)?))
            }
            ServiceKind::Valuations => Catalog::Valuations {
                valuations: web::Data::new(ValuationRepository::load(data_path)?),
                estimator: web::Data::new(ValuationEstimator::new()),
            },
        };
        Ok(catalog)
    }
}

/// Lance le service jusqu'à son arrêt
pub async fn run(service: ServiceKind) -> anyhow::Result<()> {
    let config = Config::from_env(service).context("❌ Impossible de charger la configuration")?;

    setup_tracing(&config);
    info!("🚀 Démarrage de {} v{}", service.name(), crate::VERSION);
    info!(
        data_path = %config.data_path.display(),
        catalog = service.catalog_file(),
        port = config.server_port,
        mode = %config.run_mode,
        "🔧 Configuration chargée"
    );

    if config.has_weak_jwt_secret() {
        if config.is_production() {
            error!("❌ JWT_SECRET par défaut ou trop court (< 32 caractères) en production");
        } else {
            warn!("⚠️  JWT_SECRET par défaut ou trop court (< 32 caractères) - risque de sécurité");
        }
    }

    // Seed : toute erreur ici empêche le démarrage
    let users = UserRepository::load(&config.data_path).context("❌ Chargement des utilisateurs")?;
    let catalog =
        Catalog::load(service, &config.data_path).context("❌ Chargement du catalogue")?;

    let jwt = JwtManager::new(
        &config.jwt_secret,
        chrono::Duration::hours(config.jwt_expiry_hours),
    );
    let auth = web::Data::new(AuthService::new(Arc::new(users), jwt));
    let config_data = web::Data::new(config.clone());

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .app_data(config_data.clone())
            .app_data(auth.clone());

        match &catalog {
            Catalog::Vehicles(vehicles) => app
                .app_data(vehicles.clone())
                .configure(api::configure_inventory),
            Catalog::Valuations {
                valuations,
                estimator,
            } => app
                .app_data(valuations.clone())
                .app_data(estimator.clone())
                .configure(api::configure_valuations),
        }
    })
    .bind((config.server_host.as_str(), config.server_port))
    .with_context(|| format!("❌ Impossible d'écouter sur {}:{}", config.server_host, config.server_port))?
    .workers(config.workers)
    .shutdown_timeout(10);

    info!("✅ {} démarré avec succès!", service.name());
    info!("🔗 API disponible sur http://{}:{}", config.server_host, config.server_port);

    server.run().await?;
    Ok(())
}

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600)
}

/// Configure le tracing pour le logging structuré
fn setup_tracing(config: &Config) {
    let log_level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(log_level.into()),
        )
        .with(if config.logging_format == "json" {
            Box::new(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(true),
            ) as Box<dyn tracing_subscriber::Layer<_> + Send + Sync>
        } else {
            Box::new(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_line_number(true)
                    .with_file(true),
            ) as Box<dyn tracing_subscriber::Layer<_> + Send + Sync>
        });

    subscriber.init();
}
