#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use appinfo_core::EnvConfig;
use appinfo_service::{app_state::AppState, router::build_router};

pub fn app(vars: &[(&str, &str)]) -> Router {
    let env = EnvConfig::from_vars(vars.iter().map(|(k, v)| (*k, *v))).expect("snapshot");
    build_router(AppState::new(env))
}

pub async fn call(app: &Router, method: Method, path: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("request");
    let resp = app.clone().oneshot(req).await.expect("infallible");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, bytes.to_vec())
}

pub async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let (status, bytes) = call(app, Method::GET, path).await;
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}
