use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use carlot_service::{
	AutofillRequest, AutofillResponse, CreateVehicleRequest, CreateVehicleResponse, Error,
	ListResponse, SearchRequest, SearchResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/search", post(search))
		.route("/v1/vehicles", get(list_vehicles).post(create_vehicle))
		.route("/v1/vehicles/autofill", post(autofill))
		.route("/v1/vehicles/{id}", get(get_vehicle))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(payload).await?;
	Ok(Json(response))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<ListResponse>, ApiError> {
	let response = state.service.list().await?;
	Ok(Json(response))
}

async fn get_vehicle(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<carlot_domain::VehicleRecord>, ApiError> {
	let vehicle = state.service.get(&id).await?;
	Ok(Json(vehicle))
}

async fn create_vehicle(
	State(state): State<AppState>,
	Json(payload): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<CreateVehicleResponse>), ApiError> {
	let response = state.service.create(payload).await?;
	Ok((StatusCode::CREATED, Json(response)))
}

async fn autofill(
	State(state): State<AppState>,
	Json(payload): Json<AutofillRequest>,
) -> Result<Json<AutofillResponse>, ApiError> {
	let response = state.service.autofill(payload).await?;
	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		let message = err.to_string();

		match err {
			Error::InvalidRequest { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", message),
			Error::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, "not_found", message),
			Error::SearchUnavailable { .. } =>
				Self::new(StatusCode::SERVICE_UNAVAILABLE, "search_unavailable", message),
			Error::Provider { .. } => Self::new(StatusCode::BAD_GATEWAY, "provider_error", message),
			Error::Storage { .. } =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
