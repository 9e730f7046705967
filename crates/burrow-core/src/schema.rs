mod builder;
pub use builder::Builder;

mod column;
pub use column::{Column, IndexDecl};

mod join;
pub use join::JoinNavigation;

mod mapping;
pub use mapping::RecordMapping;

mod record;
pub use record::{Record, RecordRef};

mod registry;
pub use registry::mapping;

mod storage_class;
pub use storage_class::StorageClass;

mod verify;

use crate::Result;
