use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use tracing::{debug, info};

use crate::core::ValuationEstimator;
use crate::infrastructure::store::ValuationRepository;
use crate::models::{AuthenticatedUser, DataResponse, ListResponse, ValuationRequest};
use crate::utils::error::Result;

#[get("/valuations")]
pub async fn list_valuations(valuations: web::Data<ValuationRepository>) -> Result<HttpResponse> {
    let all: Vec<_> = valuations.all().iter().collect();
    Ok(HttpResponse::Ok().json(ListResponse::new(all)))
}

/// Agrégat de toutes les estimations (à enregistrer avant `/valuations/{id}`)
#[get("/valuations/summary")]
pub async fn valuation_summary(valuations: web::Data<ValuationRepository>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(valuations.summary(Utc::now())))
}

#[get("/valuations/{id}")]
pub async fn get_valuation(
    valuations: web::Data<ValuationRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let valuation_id = path.into_inner();
    let valuation = valuations.get_by_id(&valuation_id).map_err(|e| {
        debug!(valuation_id = %valuation_id, "Estimation introuvable");
        e
    })?;

    Ok(HttpResponse::Ok().json(DataResponse::new(valuation)))
}

/// Estimation instantanée d'un véhicule
#[post("/valuations/estimate")]
pub async fn estimate_valuation(
    estimator: web::Data<ValuationEstimator>,
    request: web::Json<ValuationRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let estimate = estimator.estimate(&request)?;

    info!(
        user_id = %user.user_id,
        year = request.year,
        make = %request.make,
        model = %request.model,
        estimated_value = estimate.estimated_value,
        "💰 Estimation calculée"
    );

    Ok(HttpResponse::Ok().json(DataResponse::new(estimate)))
}
