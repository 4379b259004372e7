// src/lib.rs
// Modules principaux
pub mod api;
pub mod core;
pub mod infrastructure;
pub mod models;
pub mod server;
pub mod utils;

// Ré-exports pour faciliter l'utilisation
pub use crate::core::{AuthService, ValuationEstimator};
pub use crate::infrastructure::store::{UserRepository, ValuationRepository, VehicleRepository};
pub use crate::utils::{AppError, Config, JwtManager, Result, ServiceKind};

// Version de l'application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
