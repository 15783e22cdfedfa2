use uuid::Uuid;

use carlot_domain::{MatchResult, VehicleRecord, sanitize};

use crate::{CarlotService, Error, Result, hydrate, prompt};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub query: String,
}

/// Whether the matcher produced an id array or the explicit negative result.
/// An empty array still counts as `Matched`; it hydrates to zero vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
	Matched,
	NoMatch,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub trace_id: Uuid,
	pub outcome: SearchOutcome,
	pub vehicles: Vec<VehicleRecord>,
}

impl CarlotService {
	/// The end-to-end search pipeline: snapshot the inventory, ask the
	/// matcher, coerce its text into the strict grammar, and hydrate the
	/// surviving ids.
	///
	/// Only a failed model call surfaces as an error
	/// ([`Error::SearchUnavailable`]); malformed model output is absorbed
	/// into a valid no-match response.
	pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
		let query = request.query.trim();

		if query.is_empty() {
			return Err(Error::InvalidRequest { message: "query must be non-empty.".to_string() });
		}

		let trace_id = Uuid::new_v4();
		let vehicles = self.store.list_all().await?;
		let cap = self.cfg.search.max_snapshot_records as usize;

		if vehicles.len() > cap {
			tracing::warn!(
				%trace_id,
				total = vehicles.len(),
				cap,
				"Inventory exceeds the snapshot cap; prompt is truncated."
			);
		}

		let snapshot = carlot_domain::snapshot(&vehicles, cap);
		let messages = prompt::build_match_messages(&snapshot, query)?;
		let raw = self
			.providers
			.matcher
			.complete(&self.cfg.providers.matcher, &messages)
			.await
			.map_err(|err| Error::SearchUnavailable { message: err.to_string() })?;
		let result = carlot_domain::match_ids(&raw);

		if result.is_no_match()
			&& !raw.trim().is_empty()
			&& !sanitize::contains_no_match_phrase(&raw)
		{
			tracing::warn!(%trace_id, "Matcher output broke the contract; coerced to no match.");
		}

		let (outcome, hydrated) = match &result {
			MatchResult::NoMatch => (SearchOutcome::NoMatch, Vec::new()),
			MatchResult::Ids(ids) =>
				(SearchOutcome::Matched, hydrate::hydrate(&self.store, ids).await?),
		};

		tracing::info!(
			%trace_id,
			snapshot_len = snapshot.len(),
			matched = hydrated.len(),
			no_match = result.is_no_match(),
			"Search completed."
		);

		Ok(SearchResponse { trace_id, outcome, vehicles: hydrated })
	}
}
