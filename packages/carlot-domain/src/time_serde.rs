//! RFC 3339 wire format for listing timestamps (`created_at`/`updated_at`).

use serde::{Deserialize, Deserializer, Serializer, de, ser};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub fn serialize<S>(timestamp: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	timestamp
		.format(&Rfc3339)
		.map_err(ser::Error::custom)
		.and_then(|text| serializer.serialize_str(&text))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
	D: Deserializer<'de>,
{
	let text = String::deserialize(deserializer)?;

	OffsetDateTime::parse(&text, &Rfc3339).map_err(de::Error::custom)
}
