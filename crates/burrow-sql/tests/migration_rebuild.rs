use burrow_core::schema::{Column, RecordMapping, StorageClass};
use burrow_sql::{Capability, LiveColumn, LiveIndex, LiveTable, Statement, TableSynchronizer};

use pretty_assertions::assert_eq;

fn script(mapping: &RecordMapping, live: &LiveTable) -> Vec<String> {
    TableSynchronizer::new(mapping, &Capability::LIBSQL)
        .script(live)
        .unwrap()
}

fn users() -> RecordMapping {
    RecordMapping::builder("User")
        .table("users")
        .column(Column::new("id", StorageClass::Integer))
        .column(Column::new("name", StorageClass::Text))
        .column(Column::new("age", StorageClass::Integer))
        .build()
        .unwrap()
}

fn live_users() -> LiveTable {
    LiveTable::new()
        .column(LiveColumn::new("id", "INTEGER").primary_key())
        .column(LiveColumn::new("name", "TEXT").not_null())
        .column(LiveColumn::new("age", "INTEGER").not_null())
}

fn rebuild(create: &str, copy: &str) -> Vec<String> {
    vec![
        "PRAGMA foreign_keys=OFF;".to_string(),
        create.to_string(),
        copy.to_string(),
        "DROP TABLE users;".to_string(),
        "ALTER TABLE users_new RENAME TO users;".to_string(),
        "PRAGMA foreign_keys=ON;".to_string(),
    ]
}

// ---------------------------------------------------------------------------
// Column changes
// ---------------------------------------------------------------------------

#[test]
fn matching_table_needs_nothing() {
    assert!(script(&users(), &live_users()).is_empty());
}

#[test]
fn type_change_rebuilds() {
    let mut live = live_users();
    live.columns[2].declared_type = "TEXT".to_string();

    assert_eq!(
        script(&users(), &live),
        rebuild(
            "CREATE TABLE users_new (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, age INTEGER NOT NULL);",
            "INSERT INTO users_new (id, name, age) SELECT id, name, age FROM users;",
        )
    );
}

#[test]
fn type_names_compare_loosely() {
    let mut live = live_users();
    live.columns[1].declared_type = "  text ".to_string();
    live.columns[0].declared_type = "integer".to_string();

    assert!(script(&users(), &live).is_empty());
}

#[test]
fn nullability_change_rebuilds() {
    let mut live = live_users();
    live.columns[2].not_null = false;

    assert_eq!(script(&users(), &live).len(), 6);
}

#[test]
fn primary_key_change_rebuilds() {
    let mut live = live_users();
    live.columns[0].primary_key = 0;

    assert_eq!(script(&users(), &live)[0], "PRAGMA foreign_keys=OFF;");
}

#[test]
fn primary_key_nullability_is_ignored() {
    let mut live = live_users();
    live.columns[0].not_null = true;

    assert!(script(&users(), &live).is_empty());
}

#[test]
fn rebuild_copies_renamed_and_new_columns() {
    let mapping = RecordMapping::builder("User")
        .table("users")
        .column(Column::new("id", StorageClass::Integer))
        .column(Column::new("name", StorageClass::Text).column_name("full_name"))
        .column(Column::new("age", StorageClass::Integer))
        .column(Column::new("email", StorageClass::Text).nullable(true))
        .build()
        .unwrap();

    let live = LiveTable::new()
        .column(LiveColumn::new("id", "INTEGER").primary_key())
        .column(LiveColumn::new("name", "TEXT").not_null())
        .column(LiveColumn::new("age", "TEXT").not_null())
        .column(LiveColumn::new("legacy", "BLOB"));

    assert_eq!(
        script(&mapping, &live),
        rebuild(
            "CREATE TABLE users_new (id INTEGER PRIMARY KEY AUTOINCREMENT, full_name TEXT NOT NULL, age INTEGER NOT NULL, email TEXT);",
            "INSERT INTO users_new (id, full_name, age, email) SELECT id, name AS full_name, age, NULL AS email FROM users;",
        )
    );
}

#[test]
fn text_key_and_vector_columns() {
    let mapping = RecordMapping::builder("Doc")
        .table("docs")
        .column(Column::new("slug", StorageClass::Text).primary_key())
        .column(Column::new("embedding", StorageClass::FixedVector(4)).nullable(true))
        .build()
        .unwrap();

    let live = LiveTable::new()
        .column(LiveColumn::new("slug", "TEXT").primary_key().not_null())
        .column(LiveColumn::new("embedding", "BLOB"));

    assert_eq!(
        script(&mapping, &live),
        vec![
            "PRAGMA foreign_keys=OFF;",
            "CREATE TABLE docs_new (slug TEXT PRIMARY KEY NOT NULL, embedding F32_BLOB(4));",
            "INSERT INTO docs_new (slug, embedding) SELECT slug, embedding FROM docs;",
            "DROP TABLE docs;",
            "ALTER TABLE docs_new RENAME TO docs;",
            "PRAGMA foreign_keys=ON;",
        ]
    );
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

fn accounts(unique: bool) -> RecordMapping {
    let mut mail = Column::new("mail", StorageClass::Text);
    mail.unique = unique;

    RecordMapping::builder("Account")
        .table("accounts")
        .column(Column::new("id", StorageClass::Integer))
        .column(mail)
        .build()
        .unwrap()
}

fn live_accounts(index_sql: &str) -> LiveTable {
    LiveTable::new()
        .column(LiveColumn::new("id", "INTEGER").primary_key())
        .column(LiveColumn::new("mail", "TEXT").not_null())
        .index(LiveIndex::new("ux_accounts", "accounts", Some(index_sql)))
}

#[test]
fn unique_index_satisfies_a_unique_column() {
    let live = live_accounts("CREATE UNIQUE INDEX ux_accounts ON accounts ( `mail` )");
    assert!(script(&accounts(true), &live).is_empty());
}

#[test]
fn unique_index_matches_the_exact_column_name() {
    let live = live_accounts("CREATE UNIQUE INDEX ux_accounts ON accounts (email)");
    let script = script(&accounts(true), &live);

    assert_eq!(
        script[1],
        "CREATE TABLE accounts_new (id INTEGER PRIMARY KEY AUTOINCREMENT, mail TEXT NOT NULL UNIQUE);"
    );
}

#[test]
fn dropping_uniqueness_rebuilds() {
    let live = live_accounts("CREATE UNIQUE INDEX ux_accounts ON accounts (mail)");
    let script = script(&accounts(false), &live);

    assert_eq!(
        script[1],
        "CREATE TABLE accounts_new (id INTEGER PRIMARY KEY AUTOINCREMENT, mail TEXT NOT NULL);"
    );
    // The unique index went away with the old table
    assert_eq!(script.len(), 6);
}

#[test]
fn inline_unique_constraint_is_accepted() {
    let live = LiveTable::new()
        .column(LiveColumn::new("id", "INTEGER").primary_key())
        .column(LiveColumn::new("mail", "TEXT").not_null())
        .index(LiveIndex::new("sqlite_autoindex_accounts_1", "accounts", None));

    assert!(script(&accounts(true), &live).is_empty());
}

fn members() -> RecordMapping {
    RecordMapping::builder("Member")
        .table("members")
        .column(Column::new("code", StorageClass::Text).primary_key())
        .column(Column::new("email", StorageClass::Text).unique())
        .build()
        .unwrap()
}

fn live_members() -> LiveTable {
    LiveTable::new()
        .column(LiveColumn::new("code", "TEXT").primary_key())
        .column(LiveColumn::new("email", "TEXT").not_null())
        .index(LiveIndex::new("sqlite_autoindex_members_1", "members", None))
}

#[test]
fn text_key_autoindex_does_not_cover_a_unique_column() {
    assert_eq!(
        script(&members(), &live_members()),
        vec![
            "PRAGMA foreign_keys=OFF;",
            "CREATE TABLE members_new (code TEXT PRIMARY KEY NOT NULL, email TEXT NOT NULL UNIQUE);",
            "INSERT INTO members_new (code, email) SELECT code, email FROM members;",
            "DROP TABLE members;",
            "ALTER TABLE members_new RENAME TO members;",
            "PRAGMA foreign_keys=ON;",
        ]
    );
}

#[test]
fn text_key_and_unique_column_autoindexes_are_accepted() {
    let live = live_members().index(LiveIndex::new(
        "sqlite_autoindex_members_2",
        "members",
        None,
    ));

    assert!(script(&members(), &live).is_empty());
}

fn pairs() -> RecordMapping {
    RecordMapping::builder("Pair")
        .table("pairs")
        .column(Column::new("id", StorageClass::Integer))
        .column(Column::new("a", StorageClass::Text).unique())
        .column(Column::new("b", StorageClass::Text).unique())
        .build()
        .unwrap()
}

fn live_pairs() -> LiveTable {
    LiveTable::new()
        .column(LiveColumn::new("id", "INTEGER").primary_key())
        .column(LiveColumn::new("a", "TEXT").not_null())
        .column(LiveColumn::new("b", "TEXT").not_null())
        .index(LiveIndex::new("sqlite_autoindex_pairs_1", "pairs", None))
}

#[test]
fn one_autoindex_cannot_cover_two_unique_columns() {
    let script = script(&pairs(), &live_pairs());

    assert_eq!(script.len(), 6);
    assert_eq!(
        script[1],
        "CREATE TABLE pairs_new (id INTEGER PRIMARY KEY AUTOINCREMENT, a TEXT NOT NULL UNIQUE, b TEXT NOT NULL UNIQUE);"
    );
}

#[test]
fn explicit_index_leaves_the_autoindex_to_the_other_column() {
    let live = live_pairs().index(LiveIndex::new(
        "ux_pairs_b",
        "pairs",
        Some("CREATE UNIQUE INDEX ux_pairs_b ON pairs (b)"),
    ));

    assert!(script(&pairs(), &live).is_empty());
}

// ---------------------------------------------------------------------------
// Planned statements
// ---------------------------------------------------------------------------

#[test]
fn plan_returns_statements() {
    let mut live = live_users();
    live.columns[1].declared_type = "BLOB".to_string();

    let plan = TableSynchronizer::new(&users(), &Capability::LIBSQL)
        .plan(&live)
        .unwrap();

    assert_eq!(plan.len(), 6);
    assert!(plan.iter().all(Statement::is_ddl));
}
