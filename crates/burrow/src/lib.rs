pub use burrow_core::{bail, err, schema, stmt, Error, Record, RecordMapping, Result};

pub use burrow_sql::{
    Capability, LiveColumn, LiveIndex, LiveTable, Serializer, Statement, TableSynchronizer,
};

pub use burrow_macros::Record;

#[cfg(feature = "libsql")]
pub use burrow_driver_libsql as libsql;

#[doc(hidden)]
pub mod codegen_support {
    pub use burrow_core::{
        schema::{Column, JoinNavigation, Record, RecordMapping, RecordRef, StorageClass},
        stmt::{Expr, Primitive, Target, Value},
        Result,
    };
}
