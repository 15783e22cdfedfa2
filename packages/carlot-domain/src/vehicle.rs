use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A full marketplace listing as stored in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
	pub id: String,
	pub name: String,
	pub brand: String,
	pub year: i32,
	pub mileage: i64,
	pub price: i64,
	pub images: Vec<String>,
	pub description: String,
	pub fuel_type: String,
	pub transmission: String,
	pub colors: Vec<String>,
	pub location: String,
	pub features: Vec<String>,
	pub body_type: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}

/// The per-search projection of a listing that is serialized into the match
/// prompt. Carries one representative image instead of the full gallery.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry<'a> {
	pub id: &'a str,
	pub name: &'a str,
	pub year: i32,
	pub mileage: i64,
	pub price: i64,
	pub image: Option<&'a str>,
	pub description: &'a str,
	pub brand: &'a str,
	pub fuel: &'a str,
	pub transmission: &'a str,
	pub available_colors: &'a [String],
	pub location: &'a str,
	pub features: &'a [String],
	pub car_type: &'a str,
}

/// Builds the inventory snapshot sent to the model, capped so prompt size
/// stays bounded as the inventory grows.
pub fn snapshot(vehicles: &[VehicleRecord], cap: usize) -> Vec<SnapshotEntry<'_>> {
	vehicles.iter().take(cap).map(SnapshotEntry::from).collect()
}

impl<'a> From<&'a VehicleRecord> for SnapshotEntry<'a> {
	fn from(vehicle: &'a VehicleRecord) -> Self {
		Self {
			id: &vehicle.id,
			name: &vehicle.name,
			year: vehicle.year,
			mileage: vehicle.mileage,
			price: vehicle.price,
			image: vehicle.images.first().map(String::as_str),
			description: &vehicle.description,
			brand: &vehicle.brand,
			fuel: &vehicle.fuel_type,
			transmission: &vehicle.transmission,
			available_colors: &vehicle.colors,
			location: &vehicle.location,
			features: &vehicle.features,
			car_type: &vehicle.body_type,
		}
	}
}

/// A model-drafted listing produced by auto-fill. Every field is optional
/// because the model fills in only what it can infer; images stay empty by
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleDraft {
	pub name: Option<String>,
	pub brand: Option<String>,
	pub year: Option<i32>,
	pub mileage: Option<i64>,
	pub price: Option<i64>,
	pub description: Option<String>,
	pub fuel: Option<String>,
	pub transmission: Option<String>,
	pub available_colors: Vec<String>,
	pub location: Option<String>,
	pub features: Vec<String>,
	pub car_type: Option<String>,
	pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use super::*;

	fn record(id: &str) -> VehicleRecord {
		VehicleRecord {
			id: id.to_string(),
			name: "Aurora EV".to_string(),
			brand: "Aurora".to_string(),
			year: 2024,
			mileage: 1_200,
			price: 4_500_000,
			images: vec!["https://img.example/a.jpg".to_string(), "b.jpg".to_string()],
			description: "Electric SUV.".to_string(),
			fuel_type: "Electric".to_string(),
			transmission: "Automatic".to_string(),
			colors: vec!["Red".to_string()],
			location: "Pune".to_string(),
			features: vec!["Sunroof".to_string()],
			body_type: "SUV".to_string(),
			created_at: datetime!(2025-01-01 00:00:00 UTC),
			updated_at: datetime!(2025-01-01 00:00:00 UTC),
		}
	}

	#[test]
	fn snapshot_takes_first_image_only() {
		let records = vec![record("car-a")];
		let entries = snapshot(&records, 10);

		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].image, Some("https://img.example/a.jpg"));
	}

	#[test]
	fn snapshot_is_capped_and_order_preserving() {
		let records = vec![record("car-a"), record("car-b"), record("car-c")];
		let entries = snapshot(&records, 2);

		assert_eq!(entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec!["car-a", "car-b"]);
	}

	#[test]
	fn snapshot_serializes_with_prompt_keys() {
		let records = vec![record("car-a")];
		let json = serde_json::to_value(snapshot(&records, 10)).expect("Failed to serialize.");

		assert_eq!(json[0]["availableColors"][0], "Red");
		assert_eq!(json[0]["carType"], "SUV");
		assert_eq!(json[0]["fuel"], "Electric");
	}

	#[test]
	fn draft_tolerates_missing_fields() {
		let draft: VehicleDraft =
			serde_json::from_str(r#"{"name":"Aurora EV","carType":"SUV"}"#).expect("Failed to parse.");

		assert_eq!(draft.name.as_deref(), Some("Aurora EV"));
		assert_eq!(draft.car_type.as_deref(), Some("SUV"));
		assert!(draft.images.is_empty());
		assert!(draft.price.is_none());
	}
}
