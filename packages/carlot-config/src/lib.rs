mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, MatcherConfig, Postgres, Providers, Search, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;

	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Invalid {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Invalid {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Invalid {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	let matcher = &cfg.providers.matcher;

	if matcher.api_key.trim().is_empty() {
		return Err(Error::Invalid {
			message: "providers.matcher.api_key must be non-empty.".to_string(),
		});
	}
	if matcher.api_base.trim().is_empty() {
		return Err(Error::Invalid {
			message: "providers.matcher.api_base must be non-empty.".to_string(),
		});
	}
	if matcher.model.trim().is_empty() {
		return Err(Error::Invalid {
			message: "providers.matcher.model must be non-empty.".to_string(),
		});
	}
	if !matcher.temperature.is_finite() {
		return Err(Error::Invalid {
			message: "providers.matcher.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=2.0).contains(&matcher.temperature) {
		return Err(Error::Invalid {
			message: "providers.matcher.temperature must be in the range 0.0-2.0.".to_string(),
		});
	}
	if matcher.max_tokens == 0 {
		return Err(Error::Invalid {
			message: "providers.matcher.max_tokens must be greater than zero.".to_string(),
		});
	}
	if matcher.timeout_ms == 0 {
		return Err(Error::Invalid {
			message: "providers.matcher.timeout_ms must be greater than zero.".to_string(),
		});
	}

	if cfg.search.max_snapshot_records == 0 {
		return Err(Error::Invalid {
			message: "search.max_snapshot_records must be greater than zero.".to_string(),
		});
	}

	Ok(())
}
