use carlot_domain::VehicleRecord;

use crate::{Result, db::Db, models::VehicleRow};

const SELECT_COLUMNS: &str = "\
id, name, brand, year, mileage, price, images, description, fuel_type, transmission, colors, \
location, features, body_type, created_at, updated_at";

pub async fn list_all(db: &Db) -> Result<Vec<VehicleRecord>> {
	let rows: Vec<VehicleRow> = sqlx::query_as(&format!(
		"SELECT {SELECT_COLUMNS} FROM vehicles ORDER BY created_at DESC, id"
	))
	.fetch_all(&db.pool)
	.await?;

	Ok(rows.into_iter().map(VehicleRecord::from).collect())
}

pub async fn get_by_id(db: &Db, id: &str) -> Result<Option<VehicleRecord>> {
	let row: Option<VehicleRow> =
		sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM vehicles WHERE id = $1"))
			.bind(id)
			.fetch_optional(&db.pool)
			.await?;

	Ok(row.map(VehicleRecord::from))
}

pub async fn insert(db: &Db, vehicle: &VehicleRecord) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO vehicles (
	id, name, brand, year, mileage, price, images, description, fuel_type, transmission, colors,
	location, features, body_type, created_at, updated_at
)
VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14,$15,$16)",
	)
	.bind(&vehicle.id)
	.bind(&vehicle.name)
	.bind(&vehicle.brand)
	.bind(vehicle.year)
	.bind(vehicle.mileage)
	.bind(vehicle.price)
	.bind(&vehicle.images)
	.bind(&vehicle.description)
	.bind(&vehicle.fuel_type)
	.bind(&vehicle.transmission)
	.bind(&vehicle.colors)
	.bind(&vehicle.location)
	.bind(&vehicle.features)
	.bind(&vehicle.body_type)
	.bind(vehicle.created_at)
	.bind(vehicle.updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn delete(db: &Db, id: &str) -> Result<bool> {
	let result = sqlx::query("DELETE FROM vehicles WHERE id = $1").bind(id).execute(&db.pool).await?;

	Ok(result.rows_affected() > 0)
}
