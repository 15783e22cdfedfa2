pub mod db;
mod error;
pub mod models;
pub mod queries;
pub mod schema;

pub use error::{Error, Result};
