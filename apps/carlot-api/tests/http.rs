use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use tower::util::ServiceExt;

use carlot_api::{routes, state::AppState};
use carlot_service::{CarlotService, Providers};
use carlot_testkit::{
	MemoryInventory, ScriptedMatcher, ScriptedReply, sample_inventory, test_config,
};

fn test_app(matcher: std::sync::Arc<ScriptedMatcher>) -> axum::Router {
	let store = MemoryInventory::new(sample_inventory());
	let service = CarlotService::with_parts(test_config(), store, Providers { matcher });

	routes::router(AppState::with_service(service))
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");

	serde_json::from_slice(&bytes).expect("Failed to parse response.")
}

#[tokio::test]
async fn health_ok() {
	let app = test_app(ScriptedMatcher::with_text("No car found"));
	let response = app
		.oneshot(
			Request::builder().uri("/health").body(Body::empty()).expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_returns_hydrated_vehicles() {
	let app = test_app(ScriptedMatcher::with_text(r#"["car-a"]"#));
	let payload = serde_json::json!({ "query": "electric SUV under 80 lakh" });
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/search")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = read_json(response).await;

	assert_eq!(json["outcome"], "matched");
	assert_eq!(json["vehicles"][0]["id"], "car-a");
}

#[tokio::test]
async fn no_match_is_a_success_with_empty_results() {
	let app = test_app(ScriptedMatcher::with_text("No car found"));
	let payload = serde_json::json!({ "query": "submarine" });
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/search")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = read_json(response).await;

	assert_eq!(json["outcome"], "no_match");
	assert_eq!(json["vehicles"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn provider_failure_maps_to_service_unavailable() {
	let matcher =
		ScriptedMatcher::new(vec![ScriptedReply::Unavailable("quota exceeded".to_string())]);
	let app = test_app(matcher);
	let payload = serde_json::json!({ "query": "electric SUV" });
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/search")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

	let json = read_json(response).await;

	assert_eq!(json["error_code"], "search_unavailable");
}

#[tokio::test]
async fn blank_query_is_a_bad_request() {
	let app = test_app(ScriptedMatcher::with_text(r#"["car-a"]"#));
	let payload = serde_json::json!({ "query": "  " });
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/search")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let json = read_json(response).await;

	assert_eq!(json["error_code"], "invalid_request");
}

#[tokio::test]
async fn missing_vehicle_is_not_found() {
	let app = test_app(ScriptedMatcher::with_text("No car found"));
	let response = app
		.oneshot(
			Request::builder()
				.uri("/v1/vehicles/no-such-id")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call vehicle detail.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let json = read_json(response).await;

	assert_eq!(json["error_code"], "not_found");
}

#[tokio::test]
async fn create_then_fetch_roundtrip() {
	let app = test_app(ScriptedMatcher::with_text("No car found"));
	let payload = serde_json::json!({
		"name": "Meridian GT",
		"brand": "Meridian",
		"year": 2023,
		"mileage": 8000,
		"price": 3200000,
		"fuel_type": "Petrol",
		"transmission": "Manual",
		"body_type": "Coupe"
	});
	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/vehicles")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call create.");

	assert_eq!(response.status(), StatusCode::CREATED);

	let created = read_json(response).await;
	let id = created["vehicle"]["id"].as_str().expect("Created vehicle must have an id.");
	let response = app
		.oneshot(
			Request::builder()
				.uri(format!("/v1/vehicles/{id}"))
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call vehicle detail.");

	assert_eq!(response.status(), StatusCode::OK);

	let fetched = read_json(response).await;

	assert_eq!(fetched["name"], "Meridian GT");
	assert_eq!(fetched["images"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn autofill_returns_draft() {
	let app = test_app(ScriptedMatcher::with_text(
		r#"{"name": "Meridian GT", "carType": "Coupe", "fuel": "Petrol"}"#,
	));
	let payload = serde_json::json!({ "name": "Meridian GT" });
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/vehicles/autofill")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call autofill.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = read_json(response).await;

	assert_eq!(json["draft"]["name"], "Meridian GT");
	assert_eq!(json["draft"]["carType"], "Coupe");
}
