pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	/// The match call itself failed (network, HTTP error, timeout). Distinct
	/// from a negative match result, which is not an error at all.
	#[error("Search unavailable: {message}")]
	SearchUnavailable { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}

impl From<carlot_storage::Error> for Error {
	fn from(err: carlot_storage::Error) -> Self {
		match err {
			carlot_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			carlot_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}
