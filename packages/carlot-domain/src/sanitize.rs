//! Normalization of raw model text into the strict match grammar.
//!
//! The matcher is instructed to answer with either a JSON array of listing
//! ids or the literal phrase "No car found", but the output is probabilistic
//! free text and cannot be trusted. Everything here fails closed: any text
//! that does not contain a syntactically valid array is a negative result,
//! never an error.

use serde_json::Value;

/// The phrase the matcher uses to signal an explicit negative result.
pub const NO_MATCH_PHRASE: &str = "no car found";

/// Raw model text reduced to the two shapes the contract permits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizedResponse {
	/// No valid array was found; covers the explicit phrase and any noise.
	NoMatch,
	/// The first syntactically valid JSON array found in the text.
	Array(String),
}

/// The outcome of one match call. `Ids(vec![])` is a valid empty match from
/// a literal `[]` response and is distinct from `NoMatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
	NoMatch,
	Ids(Vec<String>),
}

impl MatchResult {
	pub fn ids(&self) -> &[String] {
		match self {
			Self::NoMatch => &[],
			Self::Ids(ids) => ids,
		}
	}

	pub fn is_no_match(&self) -> bool {
		matches!(self, Self::NoMatch)
	}
}

/// Repairs or rejects raw model text.
///
/// A response that is valid JSON in its entirety is taken at face value: an
/// array is accepted, anything else is a contract violation and coerces to
/// `NoMatch` without scanning for arrays nested inside it. Otherwise the
/// text is scanned for the first balanced bracket run that parses as a JSON
/// array, which wins even when the text also contains the negative phrase.
pub fn sanitize(raw: &str) -> SanitizedResponse {
	let trimmed = raw.trim();

	if trimmed.is_empty() {
		return SanitizedResponse::NoMatch;
	}
	if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
		return if value.is_array() {
			SanitizedResponse::Array(trimmed.to_string())
		} else {
			SanitizedResponse::NoMatch
		};
	}
	if let Some(array) = first_valid_array(trimmed) {
		return SanitizedResponse::Array(array.to_string());
	}

	SanitizedResponse::NoMatch
}

/// Parses sanitized array text into identifiers, preserving order and
/// duplicates. Non-string elements are coerced to their compact JSON
/// rendering (`1` becomes "1", `null` becomes "null"); hydration decides
/// what resolves, not this stage. A non-array value fails closed to empty.
pub fn parse_id_array(text: &str) -> Vec<String> {
	let Ok(Value::Array(elements)) = serde_json::from_str::<Value>(text) else {
		return Vec::new();
	};

	elements
		.into_iter()
		.map(|element| match element {
			Value::String(id) => id,
			other => other.to_string(),
		})
		.collect()
}

/// Full pipeline from raw model text to a [`MatchResult`].
pub fn match_ids(raw: &str) -> MatchResult {
	match sanitize(raw) {
		SanitizedResponse::NoMatch => MatchResult::NoMatch,
		SanitizedResponse::Array(text) => MatchResult::Ids(parse_id_array(&text)),
	}
}

/// Extracts the first balanced `{...}` run that parses as a JSON object.
/// Used by listing auto-fill, where the model drafts an object instead of
/// an id array.
pub fn extract_object(raw: &str) -> Option<String> {
	let trimmed = raw.trim();

	if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
		return value.is_object().then(|| trimmed.to_string());
	}

	first_valid_json(trimmed, '{', |value| value.is_object()).map(str::to_string)
}

fn first_valid_array(text: &str) -> Option<&str> {
	first_valid_json(text, '[', |value| value.is_array())
}

/// Scans for the first balanced run opened by `open` whose contents parse as
/// JSON and satisfy `accept`. Candidates that fail to parse do not abort the
/// scan; the search resumes at the next opening character, so behavior on
/// pathological input (multiple arrays, brackets inside prose) stays
/// well-defined.
fn first_valid_json(text: &str, open: char, accept: fn(&Value) -> bool) -> Option<&str> {
	let mut search_from = 0;

	while let Some(rel) = text[search_from..].find(open) {
		let start = search_from + rel;

		if let Some(len) = balanced_len(&text[start..], open) {
			let candidate = &text[start..start + len];

			if serde_json::from_str::<Value>(candidate).map(|v| accept(&v)).unwrap_or(false) {
				return Some(candidate);
			}
		}

		search_from = start + open.len_utf8();
	}

	None
}

/// Byte length of the balanced run starting at the opening character, with
/// JSON string awareness so quoted brackets neither open nor close a level.
fn balanced_len(text: &str, open: char) -> Option<usize> {
	let close = match open {
		'[' => ']',
		'{' => '}',
		_ => return None,
	};
	let mut depth = 0usize;
	let mut in_string = false;
	let mut escaped = false;

	for (idx, ch) in text.char_indices() {
		if in_string {
			if escaped {
				escaped = false;
			} else if ch == '\\' {
				escaped = true;
			} else if ch == '"' {
				in_string = false;
			}

			continue;
		}

		if ch == '"' {
			in_string = true;
		} else if ch == open {
			depth += 1;
		} else if ch == close {
			depth = depth.checked_sub(1)?;

			if depth == 0 {
				return Some(idx + ch.len_utf8());
			}
		}
	}

	None
}

/// True when the text contains the explicit negative phrase, case-insensitively.
pub fn contains_no_match_phrase(raw: &str) -> bool {
	raw.to_ascii_lowercase().contains(NO_MATCH_PHRASE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exact_phrase_is_no_match_any_case() {
		for raw in ["No car found", "no car found", "NO CAR FOUND", "  No Car Found  "] {
			assert_eq!(sanitize(raw), SanitizedResponse::NoMatch, "input: {raw:?}");
			assert!(contains_no_match_phrase(raw));
		}
	}

	#[test]
	fn clean_array_passes_through() {
		assert_eq!(
			sanitize(r#"["id1","id2"]"#),
			SanitizedResponse::Array(r#"["id1","id2"]"#.to_string())
		);
	}

	#[test]
	fn array_is_extracted_from_surrounding_prose() {
		let raw = r#"Sure, here you go: ["id1","id2"] Hope that helps!"#;

		assert_eq!(match_ids(raw), MatchResult::Ids(vec!["id1".to_string(), "id2".to_string()]));
	}

	#[test]
	fn array_wins_over_contradictory_phrase() {
		let raw = r#"No car found, but maybe ["id7"]"#;

		assert_eq!(match_ids(raw), MatchResult::Ids(vec!["id7".to_string()]));
	}

	#[test]
	fn empty_array_is_an_empty_match_not_no_match() {
		let result = match_ids("[]");

		assert_eq!(result, MatchResult::Ids(Vec::new()));
		assert!(!result.is_no_match());
		assert!(result.ids().is_empty());
	}

	#[test]
	fn non_string_elements_are_coerced() {
		assert_eq!(
			match_ids(r#"[1, null, "id2", true]"#),
			MatchResult::Ids(vec![
				"1".to_string(),
				"null".to_string(),
				"id2".to_string(),
				"true".to_string(),
			])
		);
	}

	#[test]
	fn non_array_json_fails_closed() {
		assert_eq!(match_ids(r#"{"ids": ["id1"]}"#), MatchResult::NoMatch);
	}

	#[test]
	fn unquoted_fragment_fails_closed() {
		assert_eq!(match_ids("[id1, id2]"), MatchResult::NoMatch);
	}

	#[test]
	fn arbitrary_prose_fails_closed() {
		assert_eq!(match_ids("Based on the list, the best option is the sedan."), MatchResult::NoMatch);
	}

	#[test]
	fn empty_input_fails_closed() {
		assert_eq!(match_ids(""), MatchResult::NoMatch);
		assert_eq!(match_ids("   \n "), MatchResult::NoMatch);
	}

	#[test]
	fn first_valid_array_wins_over_later_ones() {
		let raw = r#"candidates: ["id1"] and also ["id2"]"#;

		assert_eq!(match_ids(raw), MatchResult::Ids(vec!["id1".to_string()]));
	}

	#[test]
	fn invalid_first_bracket_run_does_not_mask_a_later_valid_array() {
		let raw = r#"[not json] but then ["id3"]"#;

		assert_eq!(match_ids(raw), MatchResult::Ids(vec!["id3".to_string()]));
	}

	#[test]
	fn brackets_inside_strings_do_not_close_the_scan() {
		let raw = r#"note ["id[1]", "id2"] done"#;

		assert_eq!(
			match_ids(raw),
			MatchResult::Ids(vec!["id[1]".to_string(), "id2".to_string()])
		);
	}

	#[test]
	fn markdown_fenced_array_is_recovered() {
		let raw = "```json\n[\"id1\"]\n```";

		assert_eq!(match_ids(raw), MatchResult::Ids(vec!["id1".to_string()]));
	}

	#[test]
	fn unterminated_bracket_fails_closed() {
		assert_eq!(match_ids(r#"["id1", "id2"#), MatchResult::NoMatch);
	}

	#[test]
	fn duplicates_and_order_are_preserved() {
		assert_eq!(
			match_ids(r#"["id1","id2","id1"]"#),
			MatchResult::Ids(vec!["id1".to_string(), "id2".to_string(), "id1".to_string()])
		);
	}

	#[test]
	fn parse_id_array_fails_closed_on_non_array() {
		assert!(parse_id_array(r#"{"a": 1}"#).is_empty());
		assert!(parse_id_array("not json").is_empty());
	}

	#[test]
	fn extract_object_finds_draft_in_prose() {
		let raw = "Here is the draft:\n```json\n{\"name\": \"Aurora EV\"}\n```";

		assert_eq!(extract_object(raw).as_deref(), Some(r#"{"name": "Aurora EV"}"#));
	}

	#[test]
	fn extract_object_rejects_text_without_object() {
		assert_eq!(extract_object("no object here"), None);
		assert_eq!(extract_object("{broken"), None);
	}
}
