use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use shop_api::{app::build_app, config::AppConfig, state::AppState};

fn app() -> Router {
    let config = AppConfig::from_lookup(|_| None).expect("default config");
    build_app(AppState::new(), &config)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(request.body(body).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn post_item(app: &Router, name: &str, price: f64) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/item",
        Some(json!({ "name": name, "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().expect("item id").to_string()
}

#[tokio::test]
async fn item_lifecycle_over_http() {
    let app = app();
    let id = post_item(&app, "Chair", 49.5).await;

    let (status, body) = send(&app, Method::GET, &format!("/api/item/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Chair");
    assert_eq!(body["data"]["deleted"], false);

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/item/{id}"),
        Some(json!({ "price": 55.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 55.0);
    assert_eq!(body["data"]["name"], "Chair");

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/item/{id}"),
        Some(json!({ "deleted": true })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/item/{id}"),
        Some(json!({ "odd": "value" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/item/{id}"),
        Some(json!({ "name": "Stool", "price": 20.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Stool");
    assert_eq!(body["data"]["id"], id.as_str());

    let (status, _) = send(&app, Method::DELETE, &format!("/api/item/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &format!("/api/item/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &format!("/api/item/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["error"], "Item not found");

    let (_, body) = send(&app, Method::GET, "/api/item?show_deleted=true", None).await;
    assert_eq!(body["data"][0]["deleted"], true);
}

#[tokio::test]
async fn create_item_rejects_non_positive_price() {
    let app = app();
    for price in [0.0, -5.0] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/item",
            Some(json!({ "name": "Free", "price": price })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn item_listing_filters_and_validates_query() {
    let app = app();
    for (name, price) in [("five", 5.0), ("ten", 10.0), ("fifteen", 15.0)] {
        post_item(&app, name, price).await;
    }

    let (status, body) = send(&app, Method::GET, "/api/item?min_price=10", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body["data"]
        .as_array()
        .expect("item array")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["ten", "fifteen"]);

    let (_, body) = send(&app, Method::GET, "/api/item?offset=1&limit=1", None).await;
    assert_eq!(body["data"][0]["name"], "ten");
    assert_eq!(body["meta"]["count"], 1);

    for query in ["offset=-1", "limit=0", "min_price=-1", "min_price=10&max_price=5"] {
        let (status, _) = send(&app, Method::GET, &format!("/api/item?{query}"), None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "query {query}");
    }
}

#[tokio::test]
async fn cart_flow_over_http() {
    let app = app();
    let a = post_item(&app, "A", 10.0).await;
    let b = post_item(&app, "B", 20.0).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/cart")
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
        .to_string();
    let cart = location.trim_start_matches("/api/cart/").to_string();

    for item in [&a, &a, &b] {
        let (status, _) = send(&app, Method::POST, &format!("/api/cart/{cart}/add/{item}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, &location, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 40.0);
    assert_eq!(body["data"]["lines"][0]["quantity"], 2);

    send(&app, Method::DELETE, &format!("/api/item/{b}"), None).await;
    let (_, body) = send(&app, Method::GET, &location, None).await;
    assert_eq!(body["data"]["price"], 20.0);

    let (status, _) = send(&app, Method::POST, &format!("/api/cart/{cart}/add/{b}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/cart?min_quantity=3&max_quantity=3", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let (status, body) = send(&app, Method::POST, &format!("/api/cart/{cart}/remove/{a}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lines"][0]["quantity"], 1);

    let (status, _) = send(&app, Method::DELETE, &location, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, &location, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_gets_not_found_envelope() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/nowhere");
}
