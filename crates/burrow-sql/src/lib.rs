pub mod capability;
pub use capability::Capability;

pub mod migration;
pub use migration::{LiveColumn, LiveIndex, LiveTable, TableSynchronizer};

pub mod serializer;
pub use serializer::{Params, Serializer};

pub mod stmt;
pub use stmt::Statement;
