use super::RecordRef;

/// A read-side `LEFT JOIN` edge from the owning record to another one.
///
/// Joins are never migrated as columns. When `foreign_key_index` is set, the
/// synchronizer also maintains an index over the right-hand column.
#[derive(Debug, Clone)]
pub struct JoinNavigation {
    /// Field of the owning record providing the left join column.
    pub left_field: String,

    /// The joined record.
    pub right: RecordRef,

    /// Field of the joined record providing the right join column.
    pub right_field: String,

    /// Index the right-hand column on the joined table.
    pub foreign_key_index: bool,
}

impl JoinNavigation {
    pub fn new(
        left_field: impl Into<String>,
        right: RecordRef,
        right_field: impl Into<String>,
    ) -> JoinNavigation {
        JoinNavigation {
            left_field: left_field.into(),
            right,
            right_field: right_field.into(),
            foreign_key_index: false,
        }
    }

    pub fn with_foreign_key_index(mut self) -> JoinNavigation {
        self.foreign_key_index = true;
        self
    }
}
