//! Test fixtures for exercising the search pipeline without a database or a
//! live model endpoint.

use std::{
	collections::VecDeque,
	sync::{Arc, Mutex},
};

use serde_json::{Map, Value};
use time::macros::datetime;

use carlot_config::{Config, MatcherConfig, Postgres, Search, Service, Storage};
use carlot_domain::VehicleRecord;
use carlot_service::{BoxFuture, InventoryStore, MatchProvider, Result};

/// In-memory [`InventoryStore`] with interior mutability so tests can delete
/// records between the snapshot and hydration.
pub struct MemoryInventory {
	vehicles: Mutex<Vec<VehicleRecord>>,
}

impl MemoryInventory {
	pub fn new(vehicles: Vec<VehicleRecord>) -> Arc<Self> {
		Arc::new(Self { vehicles: Mutex::new(vehicles) })
	}

	pub fn remove(&self, id: &str) {
		let mut vehicles = self.vehicles.lock().unwrap_or_else(|err| err.into_inner());

		vehicles.retain(|vehicle| vehicle.id != id);
	}
}

impl InventoryStore for MemoryInventory {
	fn list_all(&self) -> BoxFuture<'_, Result<Vec<VehicleRecord>>> {
		let vehicles = self.vehicles.lock().unwrap_or_else(|err| err.into_inner()).clone();

		Box::pin(async move { Ok(vehicles) })
	}

	fn get_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<VehicleRecord>>> {
		let found = self
			.vehicles
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.iter()
			.find(|vehicle| vehicle.id == id)
			.cloned();

		Box::pin(async move { Ok(found) })
	}

	fn insert<'a>(&'a self, vehicle: &'a VehicleRecord) -> BoxFuture<'a, Result<()>> {
		self.vehicles.lock().unwrap_or_else(|err| err.into_inner()).push(vehicle.clone());

		Box::pin(async move { Ok(()) })
	}
}

pub enum ScriptedReply {
	/// Raw assistant text the pipeline must sanitize.
	Text(String),
	/// Simulated transport failure from the model endpoint.
	Unavailable(String),
}

/// [`MatchProvider`] that replays queued responses and records the messages
/// it was called with.
pub struct ScriptedMatcher {
	replies: Mutex<VecDeque<ScriptedReply>>,
	requests: Mutex<Vec<Vec<Value>>>,
}

impl ScriptedMatcher {
	pub fn new(replies: Vec<ScriptedReply>) -> Arc<Self> {
		Arc::new(Self {
			replies: Mutex::new(replies.into()),
			requests: Mutex::new(Vec::new()),
		})
	}

	pub fn with_text(text: &str) -> Arc<Self> {
		Self::new(vec![ScriptedReply::Text(text.to_string())])
	}

	pub fn requests(&self) -> Vec<Vec<Value>> {
		self.requests.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}
}

impl MatchProvider for ScriptedMatcher {
	fn complete<'a>(
		&'a self,
		_cfg: &'a MatcherConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		self.requests.lock().unwrap_or_else(|err| err.into_inner()).push(messages.to_vec());

		let reply = self.replies.lock().unwrap_or_else(|err| err.into_inner()).pop_front();

		Box::pin(async move {
			match reply {
				Some(ScriptedReply::Text(text)) => Ok(text),
				Some(ScriptedReply::Unavailable(message)) =>
					Err(color_eyre::eyre::eyre!(message)),
				None => Err(color_eyre::eyre::eyre!("ScriptedMatcher has no reply queued.")),
			}
		})
	}
}

pub fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		storage: Storage {
			postgres: Postgres {
				dsn: "postgres://127.0.0.1:1/unused".to_string(),
				pool_max_conns: 1,
			},
		},
		providers: carlot_config::Providers {
			matcher: MatcherConfig {
				provider_id: "test".to_string(),
				api_base: "http://127.0.0.1:1".to_string(),
				api_key: "test-key".to_string(),
				path: "/v1/chat/completions".to_string(),
				model: "test-model".to_string(),
				temperature: 0.0,
				max_tokens: 100,
				timeout_ms: 1_000,
				default_headers: Map::new(),
			},
		},
		search: Search { max_snapshot_records: 200 },
	}
}

pub fn vehicle(id: &str) -> VehicleRecord {
	VehicleRecord {
		id: id.to_string(),
		name: "Aurora EV".to_string(),
		brand: "Aurora".to_string(),
		year: 2024,
		mileage: 1_200,
		price: 4_500_000,
		images: vec!["https://img.example/a.jpg".to_string()],
		description: "Electric SUV in excellent condition.".to_string(),
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

/// Three listings where only `car-a` is an electric SUV under the usual
/// test price threshold.
pub fn sample_inventory() -> Vec<VehicleRecord> {
	let mut electric_suv = vehicle("car-a");
	let mut petrol_sedan = vehicle("car-b");
	let mut diesel_truck = vehicle("car-c");

	petrol_sedan.name = "Meridian S".to_string();
	petrol_sedan.brand = "Meridian".to_string();
	petrol_sedan.fuel_type = "Petrol".to_string();
	petrol_sedan.body_type = "Sedan".to_string();
	petrol_sedan.price = 2_000_000;
	diesel_truck.name = "Hauler 90".to_string();
	diesel_truck.brand = "Hauler".to_string();
	diesel_truck.fuel_type = "Diesel".to_string();
	diesel_truck.body_type = "Truck".to_string();
	diesel_truck.price = 9_500_000;
	electric_suv.price = 7_800_000;

	vec![electric_suv, petrol_sedan, diesel_truck]
}
