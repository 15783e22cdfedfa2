use time::OffsetDateTime;
use uuid::Uuid;

use carlot_domain::VehicleRecord;

use crate::{CarlotService, Error, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListResponse {
	pub vehicles: Vec<VehicleRecord>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateVehicleRequest {
	pub name: String,
	pub brand: String,
	pub year: i32,
	pub mileage: i64,
	pub price: i64,
	#[serde(default)]
	pub images: Vec<String>,
	#[serde(default)]
	pub description: String,
	pub fuel_type: String,
	pub transmission: String,
	#[serde(default)]
	pub colors: Vec<String>,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub features: Vec<String>,
	pub body_type: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateVehicleResponse {
	pub vehicle: VehicleRecord,
}

impl CarlotService {
	pub async fn list(&self) -> Result<ListResponse> {
		let vehicles = self.store.list_all().await?;

		Ok(ListResponse { vehicles })
	}

	pub async fn get(&self, id: &str) -> Result<VehicleRecord> {
		let Some(vehicle) = self.store.get_by_id(id).await? else {
			return Err(Error::NotFound { message: format!("No vehicle with id {id:?}.") });
		};

		Ok(vehicle)
	}

	pub async fn create(&self, request: CreateVehicleRequest) -> Result<CreateVehicleResponse> {
		if request.name.trim().is_empty() {
			return Err(Error::InvalidRequest { message: "name must be non-empty.".to_string() });
		}
		if request.brand.trim().is_empty() {
			return Err(Error::InvalidRequest { message: "brand must be non-empty.".to_string() });
		}

		let now = OffsetDateTime::now_utc();
		let vehicle = VehicleRecord {
			id: Uuid::new_v4().to_string(),
			name: request.name,
			brand: request.brand,
			year: request.year,
			mileage: request.mileage,
			price: request.price,
			images: request.images,
			description: request.description,
			fuel_type: request.fuel_type,
			transmission: request.transmission,
			colors: request.colors,
			location: request.location,
			features: request.features,
			body_type: request.body_type,
			created_at: now,
			updated_at: now,
		};

		self.store.insert(&vehicle).await?;

		Ok(CreateVehicleResponse { vehicle })
	}
}
