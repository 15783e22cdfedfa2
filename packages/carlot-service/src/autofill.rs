use carlot_domain::VehicleDraft;

use crate::{CarlotService, Error, Result, prompt};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AutofillRequest {
	pub name: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AutofillResponse {
	pub draft: VehicleDraft,
}

impl CarlotService {
	/// Drafts a listing from a bare car name.
	///
	/// Unlike search there is no meaningful empty fallback here, so a
	/// response without a parseable draft object surfaces as
	/// [`Error::Provider`]. Drafts are returned to the caller, never
	/// persisted automatically.
	pub async fn autofill(&self, request: AutofillRequest) -> Result<AutofillResponse> {
		let name = request.name.trim();

		if name.is_empty() {
			return Err(Error::InvalidRequest { message: "name must be non-empty.".to_string() });
		}

		let messages = prompt::build_autofill_messages(name);
		let raw = self
			.providers
			.matcher
			.complete(&self.cfg.providers.matcher, &messages)
			.await
			.map_err(|err| Error::Provider { message: err.to_string() })?;
		let Some(object) = carlot_domain::extract_object(&raw) else {
			return Err(Error::Provider {
				message: "Auto-fill response contained no JSON object.".to_string(),
			});
		};
		let mut draft: VehicleDraft = serde_json::from_str(&object).map_err(|err| {
			Error::Provider { message: format!("Auto-fill draft did not match the schema: {err}") }
		})?;

		// Image URLs are never accepted from the model.
		draft.images.clear();

		Ok(AutofillResponse { draft })
	}
}
