// tests/common/request.rs

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
};
use serde::Serialize;

/// 認証付きのHTTPリクエストを作成
pub fn create_request<T: Serialize>(
    method: &str,
    uri: &str,
    token: &str,
    body: &T,
) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();
    let body_json = serde_json::to_string(body).unwrap();

    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body_json))
        .unwrap()
}

/// ボディ無し・認証付きのHTTPリクエストを作成
pub fn create_empty_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();

    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// 認証なしのHTTPリクエストを作成
pub fn create_public_request<T: Serialize>(method: &str, uri: &str, body: &T) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();
    let body_json = serde_json::to_string(body).unwrap();

    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body_json))
        .unwrap()
}

/// レスポンスボディをJSONとして読み出す
pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
