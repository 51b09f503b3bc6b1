// src/tests/router_tests/nearby_tests.rs

use crate::tests::utils::send;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

#[tokio::test(flavor = "multi_thread")]
async fn home_lists_categories_by_flow() {
    let server = MockServer::start().await;

    let resp = send(api_base(&server), "GET", "/").await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("Shops &amp; Services"));
    assert!(resp.body.contains("Skilled Individuals"));
    assert!(resp.body.contains("href=\"/nearby/packers-movers\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn nearby_without_search_shows_samples_and_calls_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resp = send(api_base(&server), "GET", "/nearby/courier").await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("data-source=\"sample\""));
    assert!(resp.body.contains("Swift Couriers"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_search_result_falls_back_to_samples() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getNearbyCourier"))
        .and(query_param("distance", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "count": 0, "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send(
        api_base(&server),
        "GET",
        "/nearby/courier?latitude=12.97&longitude=77.59&distance=5",
    )
    .await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("data-source=\"sample\""));
    assert!(resp.body.contains("Parcel Point"));
    assert!(!resp.body.to_lowercase().contains("no results"));
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_search_looks_the_same_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getNearbyCourier"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send(
        api_base(&server),
        "GET",
        "/nearby/courier?latitude=12.97&longitude=77.59&distance=5",
    )
    .await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("data-source=\"sample\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn live_results_render_contact_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getNearbyCourier"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 1,
            "data": [{
                "_id": "live-7",
                "name": "Blue Dart Koramangala",
                "vicinity": "80 Feet Road",
                "geometry": { "location": { "lat": 12.97, "lng": 77.59 } },
                "businessData": { "phone": "98765 43210" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send(
        api_base(&server),
        "GET",
        "/nearby/courier?latitude=12.97&longitude=77.59",
    )
    .await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("data-source=\"live\""));
    assert!(resp.body.contains("Blue Dart Koramangala"));
    assert!(resp.body.contains("href=\"tel:9876543210\""));
    assert!(resp.body.contains("https://www.google.com/maps/dir/?api=1&amp;destination=12.97,77.59"));
    assert!(resp.body.contains("href=\"/provider/courier/live-7\""));
    // Samples are only a stand-in for an empty page.
    assert!(!resp.body.contains("Parcel Point"));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_searches_are_rejected_without_calling_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let base = api_base(&server);
    let zero = send(base.clone(), "GET", "/nearby/cook?latitude=12.9&longitude=77.6&distance=0").await;
    let negative = send(base.clone(), "GET", "/nearby/cook?latitude=12.9&longitude=77.6&distance=-2").await;
    let garbage = send(base.clone(), "GET", "/nearby/cook?latitude=north&longitude=77.6").await;
    let half = send(base, "GET", "/nearby/cook?latitude=12.9").await;

    for resp in [zero, negative, garbage, half] {
        assert_eq!(resp.status, 400);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_paths_and_categories_are_not_found() {
    let server = MockServer::start().await;
    let base = api_base(&server);

    assert_eq!(send(base.clone(), "GET", "/nearby/plumber").await.status, 404);
    assert_eq!(send(base.clone(), "GET", "/nowhere").await.status, 404);
    assert_eq!(send(base, "POST", "/nearby/courier").await.status, 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_form_redirects_to_category_page() {
    let server = MockServer::start().await;

    let resp = send(
        api_base(&server),
        "GET",
        "/search?category=pet-clinic&latitude=12.9&longitude=77.6&distance=3",
    )
    .await;

    assert_eq!(resp.status, 303);
    assert_eq!(
        resp.location.as_deref(),
        Some("/nearby/pet-clinic?latitude=12.9&longitude=77.6&distance=3")
    );
}
