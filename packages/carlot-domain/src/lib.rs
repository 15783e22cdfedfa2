pub mod sanitize;
pub mod time_serde;
pub mod vehicle;

pub use sanitize::{
	MatchResult, SanitizedResponse, extract_object, match_ids, parse_id_array, sanitize,
};
pub use vehicle::{SnapshotEntry, VehicleDraft, VehicleRecord, snapshot};
