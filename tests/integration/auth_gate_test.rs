// Integration tests for the session gate.
//
// The calculator is only reachable with a valid session token; `/health`
// stays public; signing out revokes the presented token.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use serde_json::{json, Value};

use markupcalc::middleware::SessionGate;
use markupcalc::pricing::controllers::configure_pricing_routes;
use markupcalc::sessions::controllers::configure_session_routes;
use markupcalc::sessions::SessionService;

fn sessions() -> Arc<SessionService> {
    Arc::new(SessionService::new("integration-test-secret", 24))
}

macro_rules! gated_app {
    ($sessions:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::from($sessions.clone()))
                .wrap(SessionGate::new($sessions.clone()))
                .configure(configure_pricing_routes)
                .configure(configure_session_routes)
                .route(
                    "/health",
                    web::get().to(|| async { HttpResponse::Ok().finish() }),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_is_public() {
    let sessions = sessions();
    let app = gated_app!(sessions);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_calculator_requires_session() {
    let sessions = sessions();
    let app = gated_app!(sessions);

    let req = test::TestRequest::post()
        .uri("/pricing/calculate")
        .set_json(json!({
            "amount": "100", "quantity": "1", "margin": "20", "tax": "none"
        }))
        .to_request();

    // Gate failures surface as service errors before a handler runs
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("gate should reject the request");
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_invalid_token_rejected() {
    let sessions = sessions();
    let app = gated_app!(sessions);

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(("Authorization", "Bearer nonsense"))
        .to_request();

    let err = test::try_call_service(&app, req)
        .await
        .expect_err("gate should reject the token");
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_valid_session_reaches_calculator() {
    let sessions = sessions();
    let token = sessions.issue("u-1", "user@example.com").unwrap();
    let app = gated_app!(sessions);

    let req = test::TestRequest::post()
        .uri("/pricing/calculate")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "amount": "100", "quantity": "1", "margin": "20", "tax": "none"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["selling_price"], json!("125"));
}

#[actix_web::test]
async fn test_me_returns_identity() {
    let sessions = sessions();
    let token = sessions.issue("u-1", "user@example.com").unwrap();
    let app = gated_app!(sessions);

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user_id"], json!("u-1"));
    assert_eq!(body["email"], json!("user@example.com"));
}

#[actix_web::test]
async fn test_signout_revokes_session() {
    let sessions = sessions();
    let token = sessions.issue("u-1", "user@example.com").unwrap();
    let app = gated_app!(sessions);

    let signout = test::TestRequest::post()
        .uri("/auth/signout")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, signout).await;
    assert_eq!(resp.status(), 204);

    // The same token no longer opens the gate
    let me = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let err = test::try_call_service(&app, me)
        .await
        .expect_err("revoked token should be rejected");
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}
