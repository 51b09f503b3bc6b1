// src/tests/router_tests/card_tests.rs

use crate::tests::utils::send;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

#[tokio::test(flavor = "multi_thread")]
async fn carousel_step_renders_requested_photo() {
    let server = MockServer::start().await;

    // courier-1 is a fallback sample with three photos.
    let resp = send(api_base(&server), "GET", "/card/courier/courier-1?photo=1").await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.starts_with("<article"));
    assert!(resp.body.contains("src=\"/static/samples/courier-1b.jpg\""));
    assert!(resp.body.contains("2 / 3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn carousel_clamps_past_the_last_photo() {
    let server = MockServer::start().await;

    let resp = send(api_base(&server), "GET", "/card/courier/courier-1?photo=7").await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("src=\"/static/samples/courier-1c.jpg\""));
    assert!(resp.body.contains("3 / 3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn live_card_is_fetched_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getCookById/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "abc123",
                "name": "Chef Ravi",
                "cookData": { "images": ["/r1.jpg", "/r2.jpg"], "mobile": "99000 11122" }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send(api_base(&server), "GET", "/card/cook/abc123?photo=1").await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("Chef Ravi"));
    assert!(resp.body.contains("src=\"/r2.jpg\""));
    assert!(resp.body.contains("https://wa.me/9900011122"));
}

#[tokio::test(flavor = "multi_thread")]
async fn bad_photo_index_is_rejected() {
    let server = MockServer::start().await;

    let resp = send(api_base(&server), "GET", "/card/courier/courier-1?photo=last").await;

    assert_eq!(resp.status, 400);
}

#[tokio::test(flavor = "multi_thread")]
async fn detail_page_for_missing_record_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getSupplierById/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send(api_base(&server), "GET", "/provider/supplier/gone").await;

    assert_eq!(resp.status, 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn detail_page_shows_single_card_and_gallery() {
    let server = MockServer::start().await;

    let resp = send(api_base(&server), "GET", "/provider/pet-clinic/pet-clinic-1").await;

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body.matches("<article").count(), 1);
    assert!(resp.body.contains("data-source=\"single\""));
    assert!(resp.body.contains("Paws &amp; Claws Clinic"));
    assert!(resp.body.contains("Vaccination"));
    assert!(resp.body.contains("photo 2"));
}
