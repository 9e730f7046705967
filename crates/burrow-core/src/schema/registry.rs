use super::{Record, RecordMapping};
use crate::Result;

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

type Registry = RwLock<HashMap<TypeId, Arc<RecordMapping>>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Returns the cached mapping for `T`, building it on first use.
///
/// The mapping is built outside the lock. When two threads race, both build
/// and the first insert wins; later callers all observe the same `Arc`.
/// Failed builds are not cached.
pub fn mapping<T: Record>() -> Result<Arc<RecordMapping>> {
    let registry = REGISTRY.get_or_init(Registry::default);
    let key = TypeId::of::<T>();

    if let Some(mapping) = registry
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(mapping.clone());
    }

    let mapping = Arc::new(T::mapping()?);

    tracing::debug!(
        record = %mapping.name,
        table = %mapping.table,
        columns = mapping.columns.len(),
        "built record mapping"
    );

    let mut registry = registry.write().unwrap_or_else(PoisonError::into_inner);
    Ok(registry.entry(key).or_insert(mapping).clone())
}
