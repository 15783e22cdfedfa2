use std::sync::Arc;

use carlot_service::CarlotService;
use carlot_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<CarlotService>,
}
impl AppState {
	pub async fn new(config: carlot_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = CarlotService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}

	/// Wraps an already-assembled service, used by router tests that inject
	/// an in-memory store and a scripted matcher.
	pub fn with_service(service: CarlotService) -> Self {
		Self { service: Arc::new(service) }
	}
}
