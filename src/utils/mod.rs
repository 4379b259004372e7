// utils/mod.rs
pub mod error;
pub mod config;
pub mod security;
pub mod validation;

// Ré-exports pour faciliter l'import
pub use error::{AppError, Result};
pub use config::{Config, ServiceKind};
pub use security::{hash_password, verify_password, Claims, JwtManager};
pub use validation::{validate_model_year, validate_object};
