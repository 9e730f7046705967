use burrow_core::schema::{Column, RecordMapping, StorageClass};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn table_defaults_to_record_name() {
    let mapping = RecordMapping::builder("User")
        .column(Column::new("id", StorageClass::Integer).primary_key())
        .build()
        .unwrap();

    assert_eq!(mapping.table, "User");
    assert_eq!(mapping.columns[0].name, "id");
    assert!(!mapping.columns[0].is_renamed());
}

#[test]
fn column_rename_keeps_field_name() {
    let mapping = RecordMapping::builder("User")
        .table("users")
        .column(
            Column::new("Id", StorageClass::Integer)
                .primary_key()
                .column_name("user_id"),
        )
        .build()
        .unwrap();

    let column = mapping.column_by_field("Id").unwrap();
    assert_eq!(column.name, "user_id");
    assert!(column.is_renamed());
    assert!(column.is_auto_increment());
    assert_eq!(mapping.column_by_name("USER_ID").unwrap().field, "Id");
}

#[test]
fn conventional_key_field_becomes_primary_key() {
    let mapping = RecordMapping::builder("Entity")
        .column(Column::new("Name", StorageClass::Text))
        .column(Column::new("Id", StorageClass::Text))
        .build()
        .unwrap();

    let key = mapping.primary_key().unwrap();
    assert_eq!(key.field, "Id");
    assert!(!key.is_auto_increment());
}

#[test]
fn explicit_key_wins_over_convention() {
    let mapping = RecordMapping::builder("Entity")
        .column(Column::new("Id", StorageClass::Integer))
        .column(Column::new("Code", StorageClass::Text).primary_key())
        .build()
        .unwrap();

    assert_eq!(mapping.primary_key().unwrap().field, "Code");
    assert!(!mapping.columns[0].primary_key);
}

#[test]
fn index_name_defaults_to_table_and_column() {
    let column = Column::new("email", StorageClass::Text).indexed();
    let index = column.index.as_ref().unwrap();
    assert_eq!(index.name_for("users", "email"), "idx_users_email");

    let column = Column::new("email", StorageClass::Text).indexed_as("by_email");
    let index = column.index.as_ref().unwrap();
    assert_eq!(index.name_for("users", "email"), "by_email");
}

#[test]
fn storage_class_sql_types() {
    assert_eq!(StorageClass::Integer.to_string(), "INTEGER");
    assert_eq!(StorageClass::Real.to_string(), "REAL");
    assert_eq!(StorageClass::Text.to_string(), "TEXT");
    assert_eq!(StorageClass::Blob.to_string(), "BLOB");
    assert_eq!(StorageClass::FixedVector(4).to_string(), "F32_BLOB(4)");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn missing_primary_key_is_rejected() {
    let err = RecordMapping::builder("Note")
        .column(Column::new("body", StorageClass::Text))
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(err.to_string(), "invalid schema: record `Note` has no primary key");
}

#[test]
fn two_primary_keys_are_rejected() {
    let err = RecordMapping::builder("Note")
        .column(Column::new("a", StorageClass::Integer).primary_key())
        .column(Column::new("b", StorageClass::Integer).primary_key())
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn real_primary_key_is_rejected() {
    let err = RecordMapping::builder("Note")
        .column(Column::new("id", StorageClass::Real).primary_key())
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn nullable_primary_key_is_rejected() {
    let err = RecordMapping::builder("Note")
        .column(
            Column::new("id", StorageClass::Text)
                .primary_key()
                .nullable(true),
        )
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn duplicate_column_names_ignore_case() {
    let err = RecordMapping::builder("Note")
        .column(Column::new("id", StorageClass::Integer).primary_key())
        .column(Column::new("title", StorageClass::Text))
        .column(Column::new("other", StorageClass::Text).column_name("TITLE"))
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid schema: duplicate column name `TITLE` in record `Note`"
    );
}

#[test]
fn vector_without_size_is_rejected() {
    let err = RecordMapping::builder("Doc")
        .column(Column::new("id", StorageClass::Integer).primary_key())
        .column(Column::new("embedding", StorageClass::FixedVector(0)))
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn empty_table_name_is_rejected() {
    let err = RecordMapping::builder("Doc")
        .table("  ")
        .column(Column::new("id", StorageClass::Integer).primary_key())
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
}
