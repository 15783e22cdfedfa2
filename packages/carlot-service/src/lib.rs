pub mod autofill;
mod error;
mod hydrate;
pub mod list;
pub mod prompt;
pub mod search;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

pub use autofill::{AutofillRequest, AutofillResponse};
pub use error::{Error, Result};
pub use list::{CreateVehicleRequest, CreateVehicleResponse, ListResponse};
pub use search::{SearchOutcome, SearchRequest, SearchResponse};

use carlot_config::{Config, MatcherConfig};
use carlot_domain::VehicleRecord;
use carlot_providers::matcher;
use carlot_storage::{db::Db, queries};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Outbound chat-completion seam. The model endpoint is injected so tests
/// exercise the full pipeline against scripted responses.
pub trait MatchProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a MatcherConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<String>>;
}

/// Read/write seam over the inventory store.
pub trait InventoryStore
where
	Self: Send + Sync,
{
	fn list_all(&self) -> BoxFuture<'_, Result<Vec<VehicleRecord>>>;
	fn get_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<VehicleRecord>>>;
	fn insert<'a>(&'a self, vehicle: &'a VehicleRecord) -> BoxFuture<'a, Result<()>>;
}

#[derive(Clone)]
pub struct Providers {
	pub matcher: Arc<dyn MatchProvider>,
}

struct DefaultMatcher;

impl MatchProvider for DefaultMatcher {
	fn complete<'a>(
		&'a self,
		cfg: &'a MatcherConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		Box::pin(matcher::complete(cfg, messages))
	}
}

impl Default for Providers {
	fn default() -> Self {
		Self { matcher: Arc::new(DefaultMatcher) }
	}
}

/// Postgres-backed [`InventoryStore`].
pub struct PgInventory {
	db: Db,
}

impl PgInventory {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}

impl InventoryStore for PgInventory {
	fn list_all(&self) -> BoxFuture<'_, Result<Vec<VehicleRecord>>> {
		Box::pin(async move { Ok(queries::list_all(&self.db).await?) })
	}

	fn get_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<VehicleRecord>>> {
		Box::pin(async move { Ok(queries::get_by_id(&self.db, id).await?) })
	}

	fn insert<'a>(&'a self, vehicle: &'a VehicleRecord) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move { Ok(queries::insert(&self.db, vehicle).await?) })
	}
}

pub struct CarlotService {
	pub cfg: Config,
	pub store: Arc<dyn InventoryStore>,
	pub providers: Providers,
}

impl CarlotService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, store: Arc::new(PgInventory::new(db)), providers: Providers::default() }
	}

	pub fn with_parts(cfg: Config, store: Arc<dyn InventoryStore>, providers: Providers) -> Self {
		Self { cfg, store, providers }
	}
}
