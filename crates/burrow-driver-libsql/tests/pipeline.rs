use burrow_core::{
    schema::{Column, Record, RecordMapping, StorageClass},
    stmt::{F32Vector, Primitive, Target, Value},
    Result,
};
use burrow_driver_libsql::{
    pipeline::{StreamRequest, StreamResult},
    PipelineRequest, PipelineResponse, WireArg, WireValue,
};
use burrow_sql::{Serializer, Statement};

use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Debug, Default, PartialEq)]
struct Note {
    id: i64,
    title: String,
    pinned: bool,
}

impl Record for Note {
    fn mapping() -> Result<RecordMapping> {
        RecordMapping::builder("Note")
            .table("notes")
            .column(Column::new("id", StorageClass::Integer))
            .column(Column::new("title", StorageClass::Text))
            .column(Column::new("pinned", StorageClass::Integer))
            .build()
    }

    fn target(&mut self, field: &str) -> Option<Target<'_>> {
        match field {
            "id" => Some(self.id.target()),
            "title" => Some(self.title.target()),
            "pinned" => Some(self.pinned.target()),
            _ => None,
        }
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "title" => Some(self.title.to_value()),
            "pinned" => Some(self.pinned.to_value()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[test]
fn values_bind_as_typed_arguments() {
    let cases = [
        (Value::Null, json!({"type": "null"})),
        (Value::Bool(true), json!({"type": "integer", "value": "1"})),
        (Value::I64(-3), json!({"type": "integer", "value": "-3"})),
        (Value::U64(u64::MAX), json!({"type": "integer", "value": "18446744073709551615"})),
        (Value::F64(0.5), json!({"type": "float", "value": 0.5})),
        (Value::from("hi"), json!({"type": "text", "value": "hi"})),
        (Value::Bytes(vec![0, 1, 2]), json!({"type": "blob", "base64": "AAEC"})),
        (
            Value::Vector(F32Vector::from([1.0])),
            json!({"type": "blob", "base64": "AACAPw=="}),
        ),
    ];

    for (value, expected) in cases {
        let arg = WireArg::try_from(&value).unwrap();
        assert_eq!(serde_json::to_value(&arg).unwrap(), expected);
    }
}

#[test]
fn a_list_is_not_a_single_argument() {
    let err = WireArg::try_from(&Value::list([1_i64, 2])).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn result_cells_become_wire_values() {
    let cases = [
        (WireArg::Null, WireValue::Null),
        (
            WireArg::Integer {
                value: "42".to_string(),
            },
            WireValue::Integer(42),
        ),
        (
            WireArg::Integer {
                value: "18446744073709551615".to_string(),
            },
            WireValue::Unsigned(u64::MAX),
        ),
        (
            WireArg::Blob {
                base64: "AAEC".to_string(),
            },
            WireValue::Bytes(vec![0, 1, 2]),
        ),
    ];

    for (arg, expected) in cases {
        assert_eq!(WireValue::from(arg), expected);
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_envelope_json() {
    let request = PipelineRequest::new()
        .execute("SELECT * FROM notes WHERE id = ?;", &[Value::I64(7)])
        .unwrap()
        .close();

    let json: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        json!({
            "requests": [
                {
                    "type": "execute",
                    "stmt": {
                        "sql": "SELECT * FROM notes WHERE id = ?;",
                        "args": [{"type": "integer", "value": "7"}]
                    }
                },
                {"type": "close"}
            ]
        })
    );
}

#[test]
fn baton_is_sent_when_present() {
    let request = PipelineRequest {
        baton: Some("b1".to_string()),
        ..PipelineRequest::new()
    };

    let json: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
    assert_eq!(json, json!({"baton": "b1", "requests": []}));
}

#[test]
fn statements_are_serialized_in_order_and_closed() {
    let note = Note {
        id: 0,
        title: "first".to_string(),
        pinned: true,
    };

    let statements = [
        Statement::create_table_if_not_exists(&Note::mapping().unwrap()),
        Statement::insert(&note).unwrap(),
    ];

    let request = PipelineRequest::from_statements(&Serializer::libsql(), &statements).unwrap();

    let sql: Vec<_> = request
        .requests
        .iter()
        .filter_map(|request| match request {
            StreamRequest::Execute { stmt } => Some(stmt.sql.as_str()),
            StreamRequest::Close => None,
        })
        .collect();

    assert_eq!(sql.len(), 2);
    assert!(sql[0].starts_with("CREATE TABLE IF NOT EXISTS notes"));
    assert_eq!(sql[1], "INSERT INTO notes (title, pinned) VALUES (?, ?);");

    let StreamRequest::Execute { stmt } = &request.requests[1] else {
        panic!("expected execute");
    };
    assert_eq!(
        stmt.args,
        vec![
            WireArg::Text {
                value: "first".to_string()
            },
            WireArg::Integer {
                value: "1".to_string()
            },
        ]
    );

    assert_eq!(request.requests.last(), Some(&StreamRequest::Close));
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

const RESPONSE: &str = r#"{
    "baton": null,
    "results": [
        {
            "type": "ok",
            "response": {
                "type": "execute",
                "result": {
                    "cols": [
                        {"name": "id", "decltype": "INTEGER"},
                        {"name": "title", "decltype": "TEXT"},
                        {"name": "pinned", "decltype": "INTEGER"}
                    ],
                    "rows": [
                        [
                            {"type": "integer", "value": "1"},
                            {"type": "text", "value": "groceries"},
                            {"type": "integer", "value": "0"}
                        ],
                        [
                            {"type": "integer", "value": "2"},
                            {"type": "text", "value": "ideas"},
                            {"type": "integer", "value": "1"}
                        ]
                    ],
                    "affected_row_count": 0,
                    "last_insert_rowid": null
                }
            }
        },
        {"type": "ok", "response": {"type": "close"}}
    ]
}"#;

#[test]
fn response_rows_load_into_records() {
    let response = PipelineResponse::from_json(RESPONSE).unwrap();
    let results = response.execute_results().unwrap();
    assert_eq!(results.len(), 1);

    let notes: Vec<Note> = results[0].load().unwrap();

    assert_eq!(
        notes,
        vec![
            Note {
                id: 1,
                title: "groceries".to_string(),
                pinned: false,
            },
            Note {
                id: 2,
                title: "ideas".to_string(),
                pinned: true,
            },
        ]
    );
}

#[test]
fn last_insert_rowid_is_parsed() {
    let response = PipelineResponse::from_json(
        r#"{"results": [{"type": "ok", "response": {"type": "execute", "result": {
            "cols": [], "rows": [], "affected_row_count": 1, "last_insert_rowid": "17"
        }}}]}"#,
    )
    .unwrap();

    let results = response.execute_results().unwrap();
    assert_eq!(results[0].affected_row_count, 1);
    assert_eq!(results[0].last_insert_rowid().unwrap(), Some(17));
}

#[test]
fn failed_statement_is_an_invalid_response() {
    let response = PipelineResponse::from_json(
        r#"{"results": [{"type": "error", "error": {"message": "no such table: notes"}}]}"#,
    )
    .unwrap();

    assert!(matches!(response.results[0], StreamResult::Error { .. }));

    let err = response.execute_results().unwrap_err();
    assert!(err.is_invalid_response());
    assert!(err.to_string().contains("no such table: notes"));
}

#[test]
fn malformed_envelope_is_an_invalid_response() {
    let err = PipelineResponse::from_json(r#"{"results": 3}"#).unwrap_err();
    assert!(err.is_invalid_response());
}
