pub mod auth;
pub mod middleware;
pub mod valuations;
pub mod vehicles;
