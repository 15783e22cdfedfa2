use time::OffsetDateTime;

use carlot_domain::VehicleRecord;

#[derive(Debug, sqlx::FromRow)]
pub struct VehicleRow {
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
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

impl From<VehicleRow> for VehicleRecord {
	fn from(row: VehicleRow) -> Self {
		Self {
			id: row.id,
			name: row.name,
			brand: row.brand,
			year: row.year,
			mileage: row.mileage,
			price: row.price,
			images: row.images,
			description: row.description,
			fuel_type: row.fuel_type,
			transmission: row.transmission,
			colors: row.colors,
			location: row.location,
			features: row.features,
			body_type: row.body_type,
			created_at: row.created_at,
			updated_at: row.updated_at,
		}
	}
}
