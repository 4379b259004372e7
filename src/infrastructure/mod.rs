//! # Infrastructure Module
//!
//! Accès aux données : les fichiers de seed JSON sont chargés une fois au
//! démarrage puis servis depuis la mémoire.

pub mod store;

pub use store::{RecordStore, StoreError, UserRepository, ValuationRepository, VehicleRepository};
