// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chordcraft_api::{
    map_error, progression_from_dto, progression_to_dto, scale_chords_dto, shape_from_dto,
    shape_to_dto, ApiError, ApiErrorCode, NewChordShapeDto, ProgressionDto,
};
use chordcraft_model::{PitchClass, ScaleType};
use chordcraft_store::{SaveOutcome, StoreError, StoreErrorCode};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::time::Instant;
use tracing::{error, info};

const INDEX_HTML: &str = include_str!("../../ui/index.html");

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

fn status_code(err: &ApiError) -> StatusCode {
    StatusCode::from_u16(map_error(err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

pub(crate) fn api_error_response(err: ApiError, request_id: &str) -> Response {
    let err = err.with_request_id(request_id);
    let status = status_code(&err);
    let resp = (status, Json(json!({"error": err}))).into_response();
    with_request_id(resp, request_id)
}

fn store_error_to_api(err: StoreError) -> ApiError {
    match err.code {
        StoreErrorCode::NotFound => {
            ApiError::new(ApiErrorCode::ProgressionNotFound, err.message, json!({}))
        }
        StoreErrorCode::Validation => ApiError::validation_failed(err.message, json!({})),
        StoreErrorCode::Unavailable => {
            error!("store failure: {err}");
            ApiError::storage_unavailable()
        }
    }
}

fn log_request(route: &str, status: StatusCode, started: Instant, request_id: &str) {
    info!(
        request_id = %request_id,
        route = %route,
        status = status.as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request complete"
    );
}

pub(crate) async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

pub(crate) async fn health_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub(crate) async fn list_progressions_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let records: Vec<ProgressionDto> = {
        let store = state.store.lock().await;
        store.list().iter().map(progression_to_dto).collect()
    };
    log_request("/api/progressions", StatusCode::OK, started, &request_id);
    with_request_id(Json(records).into_response(), &request_id)
}

pub(crate) async fn get_progression_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let result = {
        let store = state.store.lock().await;
        store.get(&name)
    };
    match result {
        Ok(progression) => {
            log_request("/api/progressions/:name", StatusCode::OK, started, &request_id);
            with_request_id(Json(progression_to_dto(&progression)).into_response(), &request_id)
        }
        Err(err) => {
            let err = store_error_to_api(err);
            log_request("/api/progressions/:name", status_code(&err), started, &request_id);
            api_error_response(err, &request_id)
        }
    }
}

pub(crate) async fn save_progression_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ProgressionDto>, JsonRejection>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);

    let Json(dto) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let err = ApiError::validation_failed(
                format!("invalid request body: {}", rejection.body_text()),
                json!({}),
            );
            log_request("/api/progressions", status_code(&err), started, &request_id);
            return api_error_response(err, &request_id);
        }
    };

    let progression = match progression_from_dto(&dto) {
        Ok(progression) => progression,
        Err(err) => {
            log_request("/api/progressions", status_code(&err), started, &request_id);
            return api_error_response(err, &request_id);
        }
    };

    let outcome = {
        let mut store = state.store.lock().await;
        store.save(&progression)
    };
    match outcome {
        Ok(outcome) => {
            let status = match outcome {
                SaveOutcome::Created => StatusCode::CREATED,
                SaveOutcome::Replaced => StatusCode::OK,
            };
            info!(
                request_id = %request_id,
                name = %progression.name,
                created = matches!(outcome, SaveOutcome::Created),
                "progression saved"
            );
            log_request("/api/progressions", status, started, &request_id);
            with_request_id(
                (status, Json(progression_to_dto(&progression))).into_response(),
                &request_id,
            )
        }
        Err(err) => {
            let err = store_error_to_api(err);
            log_request("/api/progressions", status_code(&err), started, &request_id);
            api_error_response(err, &request_id)
        }
    }
}

pub(crate) async fn delete_progression_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let result = {
        let mut store = state.store.lock().await;
        store.delete(&name)
    };
    match result {
        Ok(()) => {
            info!(request_id = %request_id, name = %name, "progression deleted");
            log_request(
                "/api/progressions/:name",
                StatusCode::NO_CONTENT,
                started,
                &request_id,
            );
            with_request_id(StatusCode::NO_CONTENT.into_response(), &request_id)
        }
        Err(err) => {
            let err = store_error_to_api(err);
            log_request("/api/progressions/:name", status_code(&err), started, &request_id);
            api_error_response(err, &request_id)
        }
    }
}

pub(crate) async fn theory_chords_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);

    let key = match required_param(&params, "key").and_then(|raw| {
        PitchClass::parse(raw).map_err(|e| ApiError::invalid_field("key", &e.0))
    }) {
        Ok(key) => key,
        Err(err) => {
            log_request("/api/theory/chords", status_code(&err), started, &request_id);
            return api_error_response(err, &request_id);
        }
    };
    let scale = match required_param(&params, "scale").and_then(|raw| {
        ScaleType::parse(raw).map_err(|e| ApiError::invalid_field("scale", &e.0))
    }) {
        Ok(scale) => scale,
        Err(err) => {
            log_request("/api/theory/chords", status_code(&err), started, &request_id);
            return api_error_response(err, &request_id);
        }
    };

    log_request("/api/theory/chords", StatusCode::OK, started, &request_id);
    with_request_id(Json(scale_chords_dto(key, scale)).into_response(), &request_id)
}

fn required_param<'a>(
    params: &'a HashMap<String, String>,
    name: &str,
) -> Result<&'a str, ApiError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| ApiError::invalid_field(name, "missing query parameter"))
}

pub(crate) async fn list_shapes_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let shapes: Vec<_> = {
        let store = state.store.lock().await;
        store.list_shapes().iter().map(shape_to_dto).collect()
    };
    log_request("/api/shapes", StatusCode::OK, started, &request_id);
    with_request_id(Json(shapes).into_response(), &request_id)
}

pub(crate) async fn create_shape_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewChordShapeDto>, JsonRejection>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);

    let Json(dto) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let err = ApiError::validation_failed(
                format!("invalid request body: {}", rejection.body_text()),
                json!({}),
            );
            log_request("/api/shapes", status_code(&err), started, &request_id);
            return api_error_response(err, &request_id);
        }
    };

    let shape = match shape_from_dto(dto) {
        Ok(shape) => shape,
        Err(err) => {
            log_request("/api/shapes", status_code(&err), started, &request_id);
            return api_error_response(err, &request_id);
        }
    };

    let result = {
        let mut store = state.store.lock().await;
        store.add_shape(shape)
    };
    match result {
        Ok(stored) => {
            log_request("/api/shapes", StatusCode::CREATED, started, &request_id);
            with_request_id(
                (StatusCode::CREATED, Json(shape_to_dto(&stored))).into_response(),
                &request_id,
            )
        }
        Err(err) => {
            let err = store_error_to_api(err);
            log_request("/api/shapes", status_code(&err), started, &request_id);
            api_error_response(err, &request_id)
        }
    }
}
