use super::{registry, RecordMapping};
use crate::{
    stmt::{Target, Value},
    Result,
};

use std::{fmt, sync::Arc};

/// A native type stored as rows of one table.
///
/// Usually implemented with `#[derive(Record)]`.
pub trait Record: 'static {
    /// Builds the record's mapping. Called at most once per process through
    /// the registry; use [`mapping`](super::mapping) to read it.
    fn mapping() -> Result<RecordMapping>;

    /// Borrows a field, by native name, as a decoding destination.
    fn target(&mut self, field: &str) -> Option<Target<'_>>;

    /// Reads a field, by native name, as a statement value.
    fn value(&self, field: &str) -> Option<Value>;
}

/// A lazily resolved handle to a record type's mapping.
///
/// Handles are cheap to copy and resolve through the registry, so records may
/// reference each other cyclically through joins.
#[derive(Clone, Copy)]
pub struct RecordRef {
    name: &'static str,
    resolve: fn() -> Result<Arc<RecordMapping>>,
}

impl RecordRef {
    pub fn of<T: Record>() -> RecordRef {
        RecordRef {
            name: std::any::type_name::<T>(),
            resolve: registry::mapping::<T>,
        }
    }

    /// Creates a handle from an explicit resolver.
    pub fn new(name: &'static str, resolve: fn() -> Result<Arc<RecordMapping>>) -> RecordRef {
        RecordRef { name, resolve }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn resolve(&self) -> Result<Arc<RecordMapping>> {
        (self.resolve)()
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordRef").field(&self.name).finish()
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
