mod error;
pub use error::Error;

pub mod schema;
pub use schema::{Record, RecordMapping};

pub mod stmt;

/// A Result type alias that uses Burrow's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
