use burrow_core::{
    schema::{Column, Record, RecordMapping, StorageClass},
    stmt::{Primitive, Target, Value},
    Result,
};
use burrow_sql::{Serializer, Statement};

use pretty_assertions::assert_eq;

#[derive(Default)]
struct Note {
    id: i64,
    title: String,
    body: Option<String>,
}

impl Record for Note {
    fn mapping() -> Result<RecordMapping> {
        RecordMapping::builder("Note")
            .table("notes")
            .column(Column::new("id", StorageClass::Integer))
            .column(Column::new("title", StorageClass::Text))
            .column(Column::new("body", StorageClass::Text).nullable(true))
            .build()
    }

    fn target(&mut self, field: &str) -> Option<Target<'_>> {
        match field {
            "id" => Some(self.id.target()),
            "title" => Some(self.title.target()),
            "body" => Some(self.body.target()),
            _ => None,
        }
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "title" => Some(self.title.to_value()),
            "body" => Some(self.body.to_value()),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Session {
    token: String,
    user: Option<i64>,
}

impl Record for Session {
    fn mapping() -> Result<RecordMapping> {
        RecordMapping::builder("Session")
            .table("sessions")
            .column(Column::new("token", StorageClass::Text).primary_key())
            .column(Column::new("user", StorageClass::Integer).column_name("user_id").nullable(true))
            .build()
    }

    fn target(&mut self, field: &str) -> Option<Target<'_>> {
        match field {
            "token" => Some(self.token.target()),
            "user" => Some(self.user.target()),
            _ => None,
        }
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "token" => Some(self.token.to_value()),
            "user" => Some(self.user.to_value()),
            _ => None,
        }
    }
}

fn serialize(stmt: Result<Statement>) -> (String, Vec<Value>) {
    let mut params = vec![];
    let sql = Serializer::libsql()
        .serialize(&stmt.unwrap(), &mut params)
        .unwrap();
    (sql, params)
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

#[test]
fn insert_skips_the_auto_increment_key() {
    let note = Note {
        id: 0,
        title: "hello".to_string(),
        body: None,
    };

    let (sql, params) = serialize(Statement::insert(&note));

    assert_eq!(sql, "INSERT INTO notes (title, body) VALUES (?, ?);");
    assert_eq!(params, vec![Value::from("hello"), Value::Null]);
}

#[test]
fn insert_keeps_a_text_key() {
    let session = Session {
        token: "t0k".to_string(),
        user: Some(7),
    };

    let (sql, params) = serialize(Statement::insert(&session));

    assert_eq!(sql, "INSERT INTO sessions (token, user_id) VALUES (?, ?);");
    assert_eq!(params, vec![Value::from("t0k"), Value::I64(7)]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_by_primary_key() {
    let note = Note {
        id: 3,
        title: "edited".to_string(),
        body: Some("text".to_string()),
    };

    let (sql, params) = serialize(Statement::update(&note));

    assert_eq!(sql, "UPDATE notes SET title = ?, body = ? WHERE id = ?;");
    assert_eq!(
        params,
        vec![Value::from("edited"), Value::from("text"), Value::I64(3)]
    );
}

#[test]
fn update_leaves_null_fields_alone() {
    let note = Note {
        id: 3,
        title: "edited".to_string(),
        body: None,
    };

    let (sql, params) = serialize(Statement::update(&note));

    assert_eq!(sql, "UPDATE notes SET title = ? WHERE id = ?;");
    assert_eq!(params, vec![Value::from("edited"), Value::I64(3)]);
}

#[test]
fn update_with_nothing_to_assign() {
    let session = Session {
        token: "t0k".to_string(),
        user: None,
    };

    let err = Statement::update(&session).unwrap_err();
    assert!(err.is_invalid_argument());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_by_primary_key() {
    let session = Session {
        token: "t0k".to_string(),
        user: None,
    };

    let (sql, params) = serialize(Statement::delete(&session));

    assert_eq!(sql, "DELETE FROM sessions WHERE token = ?;");
    assert_eq!(params, vec![Value::from("t0k")]);
}

#[test]
fn crud_statements_are_not_ddl() {
    let note = Note::default();
    assert!(!Statement::delete(&note).unwrap().is_ddl());
    assert!(Statement::drop_table("notes").is_ddl());
}
