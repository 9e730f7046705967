mod column;
pub(crate) use column::{Column, StorageOverride};

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod join;
pub(crate) use join::Join;

mod record;
pub(crate) use record::Record;

mod record_attr;
pub(crate) use record_attr::RecordAttr;
