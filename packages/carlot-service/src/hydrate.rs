use std::sync::Arc;

use carlot_domain::VehicleRecord;

use crate::{Error, InventoryStore, Result};

/// Resolves matched ids back into full records.
///
/// Lookups fan out concurrently but results are awaited in submission order,
/// so the output follows the match order rather than completion order. Ids
/// that no longer resolve are dropped silently; duplicates that resolve
/// appear once per occurrence.
pub(crate) async fn hydrate(
	store: &Arc<dyn InventoryStore>,
	ids: &[String],
) -> Result<Vec<VehicleRecord>> {
	let mut handles = Vec::with_capacity(ids.len());

	for id in ids {
		let store = Arc::clone(store);
		let id = id.clone();

		handles.push(tokio::spawn(async move { store.get_by_id(&id).await }));
	}

	let mut vehicles = Vec::with_capacity(handles.len());

	for handle in handles {
		let fetched =
			handle.await.map_err(|err| Error::Storage { message: err.to_string() })??;

		if let Some(vehicle) = fetched {
			vehicles.push(vehicle);
		}
	}

	Ok(vehicles)
}
