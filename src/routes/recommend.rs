use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::Recommender;
use crate::models::{ErrorResponse, HealthResponse, RecommendQuery, RecommendRequest, RecommendResponse, RouteRequest};
use crate::services::RouteClient;

/// Message returned for any engine failure; details stay in the logs
const RECOMMEND_FAILED: &str = "failed to compute recommendations";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub routes: RouteClient,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend))
        .route("/route", web::get().to(get_route));
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome! This is the residential region recommendation backend.")
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend regions endpoint
///
/// POST /recommend
///
/// Request body:
/// ```json
/// {
///   "location1": "string",
///   "location2": "string",
///   "weight1": 0.5,
///   "weight2": 0.5
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(errors.to_string()));
    }

    tracing::info!(
        "Recommendation request: location1={:?}, location2={:?}, weight1={:?}, weight2={:?}",
        req.location1,
        req.location2,
        req.weight1,
        req.weight2
    );

    let query = RecommendQuery::from(req);
    match state.recommender.recommend(&query) {
        Ok(recommendations) => {
            tracing::info!(
                "Returning {} recommendations for {:?}",
                recommendations.len(),
                query.location1
            );
            HttpResponse::Ok().json(RecommendResponse::new(recommendations))
        }
        Err(e) => {
            tracing::error!("Failed to compute recommendations for {:?}: {}", query, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(RECOMMEND_FAILED))
        }
    }
}

/// Route duration lookup
///
/// GET /route?start={start}&end={end}
///
/// Placeholder for a routing API; the duration is random.
async fn get_route(
    state: web::Data<AppState>,
    query: web::Query<RouteRequest>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(errors.to_string()));
    }

    let route = state.routes.get_route(&query.start, &query.end).await;
    HttpResponse::Ok().json(route)
}
