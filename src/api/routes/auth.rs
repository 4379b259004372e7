use actix_web::{post, web, HttpResponse};

use crate::core::AuthService;
use crate::models::LoginRequest;
use crate::utils::error::Result;

/// Endpoint de connexion (email/mot de passe)
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    credentials: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let LoginRequest { email, password } = credentials.into_inner();

    // Argon2 bloque le thread : on passe par le pool dédié
    let service = auth.clone();
    let response = web::block(move || service.login(&email, &password)).await??;

    Ok(HttpResponse::Ok().json(response))
}
