//! # API Middleware
//!
//! Authentification JWT des routes protégées :
//! - `AuthMiddleware` : exige `Authorization: Bearer <token>` et rejette en 401
//!   toute requête sans token valide
//! - `AuthenticatedUser` : extracteur qui fournit aux handlers l'identité
//!   décodée par le middleware
//!
//! Le middleware lit l'`AuthService` partagé dans les données de l'application
//! (`web::Data<AuthService>`), et dépose l'identité dans les extensions de la
//! requête.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::{ok, ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::core::AuthService;
use crate::models::AuthenticatedUser;
use crate::utils::error::{AppError, Result as AppResult};

/// Middleware d'authentification JWT
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService { service })
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate_request(&req) {
            Ok(user) => {
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(e) => {
                warn!(method = %req.method(), path = %req.path(), reason = %e, "🔒 Requête non authentifiée");
                let response = req.into_response(e.error_response()).map_into_right_body();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

/// Vérifie l'en-tête `Authorization` de la requête
fn authenticate_request(req: &ServiceRequest) -> AppResult<AuthenticatedUser> {
    let auth = req
        .app_data::<web::Data<AuthService>>()
        .ok_or_else(|| AppError::Configuration("AuthService not registered".to_string()))?;

    let header = match req.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| {
            AppError::Unauthorized("Invalid authorization header format".to_string())
        })?),
        None => None,
    };

    auth.authenticate(header)
}

/// Identité posée par `AuthMiddleware`
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::UserRepository;
    use crate::utils::security::JwtManager;
    use actix_web::{http::StatusCode, test, App, HttpResponse};
    use std::sync::Arc;

    const SECRET: &str = "middleware-test-secret";

    fn auth_service() -> web::Data<AuthService> {
        let users = Arc::new(UserRepository::from_users(Vec::new()));
        web::Data::new(AuthService::new(
            users,
            JwtManager::new(SECRET, chrono::Duration::hours(1)),
        ))
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(format!("{}|{}", user.user_id, user.email))
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let app = test::init_service(
            App::new()
                .app_data(auth_service())
                .service(web::scope("/api").wrap(AuthMiddleware).route("/me", web::get().to(whoami))),
        )
        .await;

        let token = JwtManager::new(SECRET, chrono::Duration::hours(1))
            .generate_token("user-001", "demo@autostack.com")
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "user-001|demo@autostack.com");
    }

    #[actix_web::test]
    async fn test_missing_or_bad_token_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(auth_service())
                .service(web::scope("/api").wrap(AuthMiddleware).route("/me", web::get().to(whoami))),
        )
        .await;

        let foreign = JwtManager::new("another-secret", chrono::Duration::hours(1))
            .generate_token("user-001", "demo@autostack.com")
            .unwrap();

        let headers = [
            None,
            Some("Bearer".to_string()),
            Some("Token abc".to_string()),
            Some(format!("Bearer {}", foreign)),
        ];

        for header in headers {
            let mut req = test::TestRequest::get().uri("/api/me");
            if let Some(value) = header {
                req = req.insert_header((AUTHORIZATION, value));
            }
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "UNAUTHORIZED");
        }
    }

    #[actix_web::test]
    async fn test_extractor_without_middleware_is_401() {
        let app = test::init_service(App::new().route("/me", web::get().to(whoami))).await;

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
