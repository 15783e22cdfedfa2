pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read carlot config at {path:?}.")]
	Read { path: std::path::PathBuf, source: std::io::Error },
	#[error("Carlot config at {path:?} is not valid TOML.")]
	Parse { path: std::path::PathBuf, source: toml::de::Error },
	/// A well-formed config with a value the service refuses to run with.
	/// The message names the offending field path.
	#[error("{message}")]
	Invalid { message: String },
}
