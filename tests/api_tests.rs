// HTTP tests for Region Recommender

use actix_web::{test, web, App};
use region_recommender::core::Recommender;
use region_recommender::routes::{self, AppState};
use region_recommender::services::RouteClient;
use serde_json::{json, Value};

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState {
                    recommender: Recommender::with_default_catalog(),
                    routes: RouteClient::new(),
                }))
                .app_data(routes::json_config())
                .app_data(routes::query_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_recommend_success() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({
            "location1": "Seoul Station",
            "location2": "Pangyo Techno Valley",
            "weight1": 0.7,
            "weight2": 0.3
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);

    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 3);
    for rec in recommendations {
        assert!(rec["name"].is_string());
        assert!(rec["averageTime"].is_u64());
        let score = rec["score"].as_u64().unwrap();
        assert!(score <= 100);
        assert!(rec["transport"].is_string());
        assert!(rec["summary"].is_string());
    }
}

#[actix_web::test]
async fn test_recommend_single_location() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "location1": "Gwanghwamun" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_recommend_missing_location_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "location2": "Pangyo" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_recommend_empty_location_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({ "location1": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_recommend_negative_weight_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({
            "location1": "Seoul Station",
            "location2": "Pangyo",
            "weight1": -1.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_recommend_non_numeric_weight_hides_details() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({
            "location1": "Seoul Station",
            "location2": "Pangyo",
            "weight1": "abc"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], routes::INVALID_BODY);
}

#[actix_web::test]
async fn test_recommend_huge_weights() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_json(json!({
            "location1": "Seoul Station",
            "location2": "Pangyo",
            "weight1": 1e308,
            "weight2": 1e308
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    for rec in body["recommendations"].as_array().unwrap() {
        assert!(rec["averageTime"].as_u64().unwrap() >= 15);
    }
}

#[actix_web::test]
async fn test_route_placeholder() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/route?start=Mapo&end=Yeouido")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["start"], "Mapo");
    assert_eq!(body["end"], "Yeouido");
    let duration = body["duration"].as_u64().unwrap();
    assert!((15..=60).contains(&duration));
}

#[actix_web::test]
async fn test_route_missing_parameter() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/route?start=Mapo").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], routes::INVALID_QUERY);
}

#[actix_web::test]
async fn test_health_and_index() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
