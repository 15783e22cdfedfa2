//! Construction of the fixed prompt contracts sent to the matcher endpoint.
//!
//! The match contract permits exactly two response shapes: a JSON array of
//! listing ids, or the literal phrase "No car found". The contract is stated
//! here but never trusted; sanitization enforces it on the way back.

use serde_json::Value;

use carlot_domain::SnapshotEntry;

use crate::{Error, Result};

pub const MATCH_SYSTEM_PROMPT: &str = "\
You are a car matching system that returns ONLY JSON arrays or \"No car found\".

CRITICAL: Your first character must be either '[' or 'N' (from \"No car found\"). Any other first character is wrong.

MATCHING RULES:
- Match on car type, color, brand, fuel type, transmission, price, and features.
- Common interpretations: \"family car\" means SUV or Sedan, \"small car\" means Hatchback or Coupe, \"luxury\" means high price.

OUTPUT RULES:
1. Start your response immediately with [ or with No car found.
2. Do not write any text before or after the array.
3. Do not use markdown or code blocks.
4. Do not explain your reasoning or list car names.
5. ONLY return the JSON array of matching car IDs, or \"No car found\".";

pub const AUTOFILL_SYSTEM_PROMPT: &str = "\
You draft car listings from a car name.

PROCESS:
1. You receive a car name and the listing schema.
2. Infer the car's characteristics (type, brand, fuel, transmission, colors, features) from real-world knowledge of that model.
3. Convert units where the schema expects them, e.g. engine capacity given in liters becomes cubic centimeters.
4. Leave the images array empty; never invent image URLs.

OUTPUT RULES:
- Return ONLY the filled schema as a JSON object parseable by a strict JSON parser.
- No explanation, commentary, or markdown.";

/// Field sketch of the draft object the auto-fill model is asked to produce.
const AUTOFILL_SCHEMA: &str = r#"{
  "name": "string",
  "brand": "string",
  "year": "integer",
  "mileage": "integer",
  "price": "integer",
  "description": "string",
  "fuel": "string",
  "transmission": "string",
  "availableColors": ["string"],
  "location": "string",
  "features": ["string"],
  "carType": "string",
  "images": []
}"#;

/// Builds the chat messages for one match call: the fixed instruction plus
/// the serialized inventory snapshot as the system message, and the user's
/// free-text query as the user message.
pub fn build_match_messages(snapshot: &[SnapshotEntry<'_>], query: &str) -> Result<Vec<Value>> {
	let serialized = serde_json::to_string(snapshot)
		.map_err(|err| Error::Provider { message: format!("Failed to serialize snapshot: {err}") })?;
	let system = format!(
		"{MATCH_SYSTEM_PROMPT}\n\nCARS DATABASE:\n{serialized}\n\nREMEMBER: First character must be '[' or 'N'. Nothing else allowed."
	);

	Ok(vec![
		serde_json::json!({ "role": "system", "content": system }),
		serde_json::json!({ "role": "user", "content": query }),
	])
}

/// Builds the chat messages for one auto-fill call.
pub fn build_autofill_messages(name: &str) -> Vec<Value> {
	vec![
		serde_json::json!({ "role": "system", "content": AUTOFILL_SYSTEM_PROMPT }),
		serde_json::json!({
			"role": "system",
			"content": format!("The listing schema is: {AUTOFILL_SCHEMA}"),
		}),
		serde_json::json!({ "role": "user", "content": format!("The car name is {name}") }),
	]
}
