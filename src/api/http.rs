//! HTTP server setup with Axum

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use super::rest::events;
use crate::store::EventStore;

/// Create the Axum router with all endpoints
pub fn create_router(store: Arc<EventStore>, static_dir: &Path) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Frontend assets, with the themed 404 for missing files
    let static_files = ServeDir::new(static_dir).not_found_service(not_found.into_service());

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        // The frontend lives under /gas_events/
        .route("/", get(|| async { Redirect::temporary("/gas_events/") }))
        .nest_service("/gas_events", static_files)
        // Easter egg
        .route("/SUS", get(sus_page))
        .fallback(not_found)
        .layer(cors)
        .layer(middleware::from_fn(log_requests))
        .with_state(store)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Request logging middleware: method, URI, status, latency, client address.
async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string())
        .unwrap_or_else(|| "-".to_string());

    let start = Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed = ?start.elapsed(),
        client = %client,
        "request"
    );

    response
}

/// Themed 404 page
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

/// GET /SUS - novelty page, answers 418
async fn sus_page() -> impl IntoResponse {
    (StatusCode::IM_A_TEAPOT, Html(SUS_PAGE))
}

const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>404 - Page Not Found</title>
    <style>
        body {
            font-family: 'Arial', sans-serif;
            color: #e0e0e0;
            margin: 0;
            background-color: #121212;
            display: flex;
            align-items: center;
            justify-content: center;
            height: 100vh;
            text-align: center;
        }
        .container {
            max-width: 600px;
            padding: 40px;
            background-color: #1e1e1e;
            border-radius: 8px;
        }
        h1 { color: #81c3ff; font-size: 3em; }
        .emoji { font-size: 5em; }
        a {
            display: inline-block;
            background-color: #4285f4;
            color: white;
            text-decoration: none;
            padding: 10px 20px;
            border-radius: 4px;
            font-weight: bold;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="emoji">&#128168;</div>
        <h1>404 - Gas Leak!</h1>
        <p>Oops! The page you're looking for has dissipated into thin air.</p>
        <a href="/">Back to Safety</a>
    </div>
</body>
</html>"#;

const SUS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>666 DEMON PAGE</title>
    <style>
        body { background-color: black; color: red; font-family: monospace; margin: 0; }
        h1 { color: #FF0000; text-align: center; animation: pulse 2s infinite; }
        @keyframes pulse { 0% { opacity: 1; } 50% { opacity: 0.5; } 100% { opacity: 1; } }
        .escape-link { text-align: center; margin-top: 20px; padding: 10px; }
        .escape-link a { color: #FF0000; text-decoration: none; font-weight: bold; }
    </style>
</head>
<body>
    <h1>666 - DEMON PAGE</h1>
    <div class="escape-link"><a href="/">ESCAPE IF YOU DARE</a></div>
</body>
</html>"#;
