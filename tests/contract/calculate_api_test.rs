// Contract test for POST /pricing/calculate
//
// Validates the request/response JSON shape the form frontend depends on:
// - Result responses carry the five figures plus display strings
// - Error responses carry the single error envelope and no result fields

use actix_web::{test, App};
use serde_json::{json, Value};

use markupcalc::pricing::controllers::configure_pricing_routes;

#[actix_web::test]
async fn test_calculate_response_schema() {
    let app = test::init_service(App::new().configure(configure_pricing_routes)).await;

    let req = test::TestRequest::post()
        .uri("/pricing/calculate")
        .set_json(json!({
            "amount": "200",
            "quantity": "2",
            "margin": "50",
            "tax": "22"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;

    for field in [
        "unit_cost",
        "profit",
        "selling_price",
        "tax_amount",
        "selling_price_with_tax",
    ] {
        assert!(body.get(field).is_some(), "{} is required", field);
        assert!(
            body["display"].get(field).is_some(),
            "display.{} is required",
            field
        );
    }

    assert_eq!(body["unit_cost"], json!("100"));
    assert_eq!(body["selling_price"], json!("200"));
    assert_eq!(body["profit"], json!("100"));
    assert_eq!(body["tax_amount"], json!("44"));
    assert_eq!(body["selling_price_with_tax"], json!("244"));
    assert_eq!(body["tax_percent"], json!("22"));
    assert_eq!(body["display"]["selling_price_with_tax"], json!("$244"));
}

#[actix_web::test]
async fn test_display_strings_group_thousands() {
    let app = test::init_service(App::new().configure(configure_pricing_routes)).await;

    let req = test::TestRequest::post()
        .uri("/pricing/calculate")
        .set_json(json!({
            "amount": "1000000",
            "quantity": "1",
            "margin": "20",
            "tax": "none"
        }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;

    // 1,000,000 / 0.8 = 1,250,000
    assert_eq!(body["display"]["selling_price"], json!("$1.250.000"));
    assert_eq!(body["display"]["unit_cost"], json!("$1.000.000"));
}

#[actix_web::test]
async fn test_validation_error_envelope() {
    let app = test::init_service(App::new().configure(configure_pricing_routes)).await;

    let req = test::TestRequest::post()
        .uri("/pricing/calculate")
        .set_json(json!({
            "amount": "0",
            "quantity": "5",
            "margin": "10",
            "tax": "10"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some(), "error envelope is required");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Amount must be greater than 0"));
    assert_eq!(body["error"]["code"], json!(400));

    // Result and error are mutually exclusive
    assert!(body.get("selling_price").is_none());
    assert!(body.get("display").is_none());
}

#[actix_web::test]
async fn test_unknown_tax_value_rejected() {
    let app = test::init_service(App::new().configure(configure_pricing_routes)).await;

    let req = test::TestRequest::post()
        .uri("/pricing/calculate")
        .set_json(json!({
            "amount": "100",
            "quantity": "1",
            "margin": "20",
            "tax": "15"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
