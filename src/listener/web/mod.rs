//! HTTP API for signal control.
//!
//! This layer only translates JSON to dispatcher calls and dispatcher
//! errors to status codes; every decision about the light lives in the
//! signal module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::JoinHandle;
use tokio::runtime::Runtime;

use crate::sensor::{self, SensorError};
use crate::signal::{Dispatcher, OffRequest, Outcome, SignalError, SignalRequest};

/// Start a thread that serves the HTTP API.
pub fn start_web_thread(addr: &str, dispatcher: Arc<Dispatcher>) -> JoinHandle<()> {
    println!("[web] Starting API server at {}", addr);

    let addr: SocketAddr = addr.parse().expect("[web] Invalid web address!");

    std::thread::spawn(move || {
        let runtime = Runtime::new().expect("[web] Unable to create runtime!");
        runtime.block_on(server(addr, dispatcher));
    })
}

async fn server(addr: SocketAddr, dispatcher: Arc<Dispatcher>) {
    let router = Router::new()
        .route("/API/signal", post(post_signal))
        .route("/API/off", post(post_off))
        .route("/API/temperature", get(get_temperature))
        .layer(Extension(dispatcher));

    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await
        .expect("[web] Server failed!");
}

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    message: String,
}

#[derive(Serialize)]
struct DetailBody {
    detail: String,
}

#[derive(Serialize)]
struct TemperatureBody {
    temperature: f32,
}

fn success(message: String) -> Response {
    (
        StatusCode::OK,
        Json(StatusBody {
            status: "success",
            message,
        }),
    )
        .into_response()
}

/// Map dispatcher failures onto status codes, keeping bad input (400)
/// distinct from policy blocks (403).
fn failure(err: SignalError) -> Response {
    let (code, detail) = match err {
        SignalError::InvalidColor(name) => (
            StatusCode::BAD_REQUEST,
            format!(
                "Unsupported color '{}'. Use 'green', 'red', 'orange' or 'off'.",
                name
            ),
        ),
        SignalError::InvalidIntensity(_) => (
            StatusCode::BAD_REQUEST,
            "Intensity must be between 0 and 100".to_string(),
        ),
        SignalError::InvalidHalf(half) => (
            StatusCode::BAD_REQUEST,
            format!("Unsupported half value '{}'", half),
        ),
        SignalError::ScheduleViolation => (
            StatusCode::FORBIDDEN,
            "Outside of operating hours".to_string(),
        ),
        SignalError::Device(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Device write failed: {}", err),
        ),
    };
    (code, Json(DetailBody { detail })).into_response()
}

async fn post_signal(
    Extension(dispatcher): Extension<Arc<Dispatcher>>,
    Json(request): Json<SignalRequest>,
) -> Response {
    match dispatcher.apply_signal(&request, Local::now().naive_local()) {
        Ok(Outcome {
            half,
            color,
            intensity,
        }) => success(format!(
            "LEDs {} set to {} with {}% intensity",
            half.label(),
            color,
            intensity
        )),
        Err(err) => failure(err),
    }
}

async fn post_off(
    Extension(dispatcher): Extension<Arc<Dispatcher>>,
    Json(request): Json<OffRequest>,
) -> Response {
    match dispatcher.apply_off(&request, Local::now().naive_local()) {
        Ok(outcome) => success(format!("LEDs {} turned off", outcome.half.label())),
        Err(err) => failure(err),
    }
}

async fn get_temperature() -> Response {
    match sensor::cpu_temperature() {
        Ok(temperature) => (StatusCode::OK, Json(TemperatureBody { temperature })).into_response(),
        Err(SensorError::Unavailable) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(DetailBody {
                detail: "Unable to retrieve temperature".to_string(),
            }),
        )
            .into_response(),
    }
}
