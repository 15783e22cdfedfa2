use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::{
	Client,
	header::{AUTHORIZATION, HeaderMap, HeaderName},
};
use serde_json::Value;

use carlot_config::MatcherConfig;

/// One chat-completion call against the configured matcher endpoint.
///
/// Sampling is pinned to the configured temperature and `max_tokens` bounds
/// the response so a rambling model cannot run up cost. The raw assistant
/// text is returned untouched; callers own sanitization.
pub async fn complete(cfg: &MatcherConfig, messages: &[Value]) -> Result<String> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"max_tokens": cfg.max_tokens,
		"messages": messages,
	});
	let res = client.post(&url).headers(request_headers(cfg)?).json(&body).send().await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_completion_text(json)
}

/// Bearer auth plus the `providers.matcher.default_headers` table, which is
/// how gateway-specific headers (org ids, routing tags) reach the endpoint
/// without code changes.
fn request_headers(cfg: &MatcherConfig) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	headers.insert(AUTHORIZATION, format!("Bearer {}", cfg.api_key).parse()?);

	for (name, value) in &cfg.default_headers {
		let Some(text) = value.as_str() else {
			return Err(eyre::eyre!(
				"providers.matcher.default_headers.{name} must be a string."
			));
		};

		headers.insert(HeaderName::from_bytes(name.as_bytes())?, text.parse()?);
	}

	Ok(headers)
}

fn parse_completion_text(json: Value) -> Result<String> {
	json.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
		.map(str::to_string)
		.ok_or_else(|| eyre::eyre!("Completion response is missing message content."))
}
