// src/tests/router_tests/services_tests.rs

use crate::tests::utils::{send, send_form};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

#[tokio::test(flavor = "multi_thread")]
async fn user_listings_render_with_delete_forms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getUserPackersMoversServices"))
        .and(query_param("userId", "u1"))
        .and(query_param("city", "Bengaluru"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "id": "pm9", "name": "SafeShift Packers" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send(api_base(&server), "GET", "/my/packers-movers?userId=u1&city=Bengaluru").await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("SafeShift Packers"));
    assert!(resp.body.contains("action=\"/my/packers-movers/pm9/delete?userId=u1\""));
    assert!(resp.body.contains("href=\"/my/packers-movers/pm9/edit?userId=u1\""));
    assert!(resp.body.contains("href=\"/category/5/new?userId=u1\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn user_listings_need_a_user() {
    let server = MockServer::start().await;

    let resp = send(api_base(&server), "GET", "/my/cook").await;

    assert_eq!(resp.status, 400);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_redirects_back_to_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/deleteCorporate/x1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send(api_base(&server), "POST", "/my/corporate/x1/delete?userId=u5").await;

    assert_eq!(resp.status, 303);
    assert_eq!(resp.location.as_deref(), Some("/my/corporate?userId=u5"));
}

#[tokio::test(flavor = "multi_thread")]
async fn upstream_failure_on_delete_is_a_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/deleteCorporate/x1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send(api_base(&server), "POST", "/my/corporate/x1/delete?userId=u5").await;

    assert_eq!(resp.status, 502);
}

#[tokio::test(flavor = "multi_thread")]
async fn dot_segment_ids_are_rejected_before_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resp = send(api_base(&server), "POST", "/my/cook/../delete?userId=u5").await;

    assert_eq!(resp.status, 400);
}

#[tokio::test(flavor = "multi_thread")]
async fn numeric_category_ids_route_to_their_pages() {
    let server = MockServer::start().await;
    let base = api_base(&server);

    let courier = send(base.clone(), "GET", "/category/4").await;
    assert_eq!(courier.status, 303);
    assert_eq!(courier.location.as_deref(), Some("/nearby/courier"));

    assert_eq!(send(base.clone(), "GET", "/category/11").await.status, 404);
    assert_eq!(send(base, "GET", "/category/cook").await.status, 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn new_listing_form_follows_the_category_flow() {
    let server = MockServer::start().await;
    let base = api_base(&server);

    let cook = send(base.clone(), "GET", "/category/8/new?userId=u1").await;
    assert_eq!(cook.status, 200);
    assert!(cook.body.contains("action=\"/my/cook/new?userId=u1\""));
    assert!(cook.body.contains("enctype=\"multipart/form-data\""));
    assert!(cook.body.contains("Years of experience"));
    assert!(!cook.body.contains("GST number"));

    let courier = send(base.clone(), "GET", "/category/4/new?userId=u1").await;
    assert!(courier.body.contains("GST number"));

    assert_eq!(send(base, "GET", "/category/4/new").await.status, 400);
}

const NEW_LISTING: &str = concat!(
    "--XB\r\n",
    "Content-Disposition: form-data; name=\"title\"\r\n\r\n",
    "Swift Couriers\r\n",
    "--XB\r\n",
    "Content-Disposition: form-data; name=\"images[]\"; filename=\"front.jpg\"\r\n",
    "Content-Type: image/jpeg\r\n\r\n",
    "jpeg-bytes\r\n",
    "--XB--\r\n",
);

#[tokio::test(flavor = "multi_thread")]
async fn new_listing_is_posted_upstream_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/addCourierService"))
        .and(body_string_contains("Swift Couriers"))
        .and(body_string_contains("name=\"userId\""))
        .and(body_string_contains("name=\"categoryId\""))
        .and(body_string_contains("filename=\"front.jpg\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send_form(
        api_base(&server),
        "POST",
        "/my/courier/new?userId=u1",
        Some("multipart/form-data; boundary=XB"),
        NEW_LISTING.to_string(),
    )
    .await;

    assert_eq!(resp.status, 303);
    assert_eq!(resp.location.as_deref(), Some("/my/courier?userId=u1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn new_listing_needs_a_title_and_a_multipart_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let base = api_base(&server);
    let untitled = send_form(
        base.clone(),
        "POST",
        "/my/courier/new?userId=u1",
        Some("multipart/form-data; boundary=XB"),
        "--XB\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\n \r\n--XB--\r\n".to_string(),
    )
    .await;
    let urlencoded = send_form(
        base,
        "POST",
        "/my/courier/new?userId=u1",
        Some("application/x-www-form-urlencoded"),
        "title=Swift+Couriers".to_string(),
    )
    .await;

    assert_eq!(untitled.status, 400);
    assert_eq!(urlencoded.status, 400);
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_form_is_prefilled_from_the_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getCookById/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "abc123", "name": "Chef Ravi", "cookData": { "mobile": "99000 11122" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send(api_base(&server), "GET", "/my/cook/abc123/edit?userId=u1").await;

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("action=\"/my/cook/abc123/edit?userId=u1\""));
    assert!(resp.body.contains("value=\"Chef Ravi\""));
    assert!(resp.body.contains("value=\"99000 11122\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_sends_only_filled_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/updateCook/abc123"))
        .and(body_json(json!({ "title": "Chef Ravi", "services": ["Tiffin", "Lunch"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send_form(
        api_base(&server),
        "POST",
        "/my/cook/abc123/edit?userId=u1",
        Some("application/x-www-form-urlencoded"),
        "title=Chef+Ravi&address=&phone=&services=Tiffin%2C+Lunch".to_string(),
    )
    .await;

    assert_eq!(resp.status, 303);
    assert_eq!(resp.location.as_deref(), Some("/my/cook?userId=u1"));
}
