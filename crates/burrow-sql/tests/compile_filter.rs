use burrow_core::{
    schema::{Column, RecordMapping, RecordRef, StorageClass},
    stmt::{Expr, Query, Type, Value},
    Result,
};
use burrow_sql::{Serializer, Statement};

use pretty_assertions::assert_eq;
use std::sync::Arc;

fn users() -> Result<Arc<RecordMapping>> {
    let mapping = RecordMapping::builder("User")
        .table("users")
        .column(Column::new("Id", StorageClass::Text))
        .column(Column::new("Name", StorageClass::Text))
        .column(Column::new("Age", StorageClass::Integer))
        .column(Column::new("Email", StorageClass::Text).nullable(true))
        .column(Column::new("nickname", StorageClass::Text).column_name("nick"))
        .build()?;

    Ok(Arc::new(mapping))
}

fn query() -> Query {
    Query::from_ref(RecordRef::new("User", users))
}

fn compile(query: Query) -> (String, Vec<Value>) {
    let mut params = vec![];
    let sql = Serializer::libsql()
        .serialize(&Statement::from(query), &mut params)
        .unwrap();
    (sql, params)
}

fn where_clause(predicate: Expr) -> (String, Vec<Value>) {
    let (sql, params) = compile(query().filter(predicate));
    let clause = sql
        .strip_prefix("SELECT users.* FROM users WHERE ")
        .and_then(|rest| rest.strip_suffix(';'))
        .unwrap_or_else(|| panic!("unexpected SQL: {sql}"))
        .to_string();
    (clause, params)
}

// ---------------------------------------------------------------------------
// Comparisons and logic
// ---------------------------------------------------------------------------

#[test]
fn membership_and_equality() {
    let ids = ["id1", "id2"];
    let (sql, params) = compile(query().filter(Expr::and(
        Expr::in_list(Expr::field("Id"), Expr::list(ids)),
        Expr::eq(Expr::field("Name"), "test"),
    )));

    assert_eq!(
        sql,
        "SELECT users.* FROM users WHERE (Id IN (?, ?) AND (Name = ?));"
    );
    assert_eq!(
        params,
        vec![
            Value::from("id1"),
            Value::from("id2"),
            Value::from("test"),
        ]
    );
}

#[test]
fn no_filter_selects_every_row() {
    let (sql, params) = compile(query());
    assert_eq!(sql, "SELECT users.* FROM users;");
    assert!(params.is_empty());
}

#[test]
fn comparison_operators() {
    for (expr, expected) in [
        (Expr::eq(Expr::field("Age"), 1), "(Age = ?)"),
        (Expr::ne(Expr::field("Age"), 1), "(Age != ?)"),
        (Expr::lt(Expr::field("Age"), 1), "(Age < ?)"),
        (Expr::le(Expr::field("Age"), 1), "(Age <= ?)"),
        (Expr::gt(Expr::field("Age"), 1), "(Age > ?)"),
        (Expr::ge(Expr::field("Age"), 1), "(Age >= ?)"),
    ] {
        let (clause, params) = where_clause(expr);
        assert_eq!(clause, expected);
        assert_eq!(params, vec![Value::I64(1)]);
    }
}

#[test]
fn arithmetic_nests_in_parentheses() {
    let (clause, params) = where_clause(Expr::ge(
        Expr::mul(Expr::add(Expr::field("Age"), 2), 3),
        Expr::sub(100, Expr::div(Expr::field("Age"), 4)),
    ));

    assert_eq!(clause, "(((Age + ?) * ?) >= (? - (Age / ?)))");
    assert_eq!(
        params,
        vec![Value::I64(2), Value::I64(3), Value::I64(100), Value::I64(4)]
    );
}

#[test]
fn or_and_not() {
    let (clause, params) = where_clause(Expr::or(
        Expr::not(Expr::eq(Expr::field("Name"), "a")),
        Expr::lt(Expr::field("Age"), 30),
    ));

    assert_eq!(clause, "(NOT ((Name = ?)) OR (Age < ?))");
    assert_eq!(params, vec![Value::from("a"), Value::I64(30)]);
}

#[test]
fn renamed_field_resolves_to_its_column() {
    let (clause, _) = where_clause(Expr::eq(Expr::field("nickname"), "bob"));
    assert_eq!(clause, "(nick = ?)");
}

#[test]
fn casts_are_transparent() {
    let (clause, params) = where_clause(Expr::eq(
        Expr::cast(Expr::field("Age"), Type::I64),
        Expr::cast(7i32, Type::I64),
    ));

    assert_eq!(clause, "(Age = ?)");
    assert_eq!(params, vec![Value::I64(7)]);
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[test]
fn each_filter_adds_a_top_level_and_term() {
    let (sql, params) = compile(
        query()
            .filter(Expr::gt(Expr::field("Age"), 18))
            .filter(Expr::contains(Expr::field("Name"), "bo"))
            .filter(Expr::or(
                Expr::eq(Expr::field("Id"), "a"),
                Expr::eq(Expr::field("Id"), "b"),
            )),
    );

    assert_eq!(
        sql,
        "SELECT users.* FROM users WHERE (Age > ?) AND Name LIKE ? AND ((Id = ?) OR (Id = ?));"
    );
    assert_eq!(
        params,
        vec![
            Value::I64(18),
            Value::from("%bo%"),
            Value::from("a"),
            Value::from("b"),
        ]
    );
}

#[test]
fn placeholders_match_parameters() {
    let (sql, params) = compile(
        query()
            .filter(Expr::in_list(Expr::field("Age"), Expr::list([1, 2, 3, 4])))
            .filter(Expr::starts_with(Expr::field("Name"), "x"))
            .filter(Expr::ne(Expr::field("Email"), Expr::null()))
            .first_where(Expr::le(Expr::field("Age"), 99)),
    );

    assert_eq!(sql.matches('?').count(), params.len());
    assert_eq!(
        params,
        vec![
            Value::I64(1),
            Value::I64(2),
            Value::I64(3),
            Value::I64(4),
            Value::from("x%"),
            Value::I64(99),
        ]
    );
}

// ---------------------------------------------------------------------------
// Null handling
// ---------------------------------------------------------------------------

#[test]
fn comparing_with_null_is_a_null_test() {
    let (clause, params) = where_clause(Expr::eq(Expr::field("Email"), Expr::null()));
    assert_eq!(clause, "(Email IS NULL)");
    assert!(params.is_empty());

    let (clause, _) = where_clause(Expr::ne(Expr::field("Email"), Expr::null()));
    assert_eq!(clause, "(Email IS NOT NULL)");

    // Operand order does not matter
    let (clause, _) = where_clause(Expr::eq(Expr::null(), Expr::field("Email")));
    assert_eq!(clause, "(Email IS NULL)");

    let (clause, _) = where_clause(Expr::ne(Expr::null(), Expr::field("Email")));
    assert_eq!(clause, "(Email IS NOT NULL)");
}

#[test]
fn has_value() {
    let (clause, _) = where_clause(Expr::has_value(Expr::field("Email")));
    assert_eq!(clause, "Email IS NOT NULL");

    let (clause, _) = where_clause(Expr::not(Expr::has_value(Expr::field("Email"))));
    assert_eq!(clause, "NOT (Email IS NOT NULL)");
}

#[test]
fn null_list_element_is_bound() {
    let (clause, params) = where_clause(Expr::in_list(
        Expr::field("Email"),
        Expr::list([Some("a@x"), None]),
    ));

    assert_eq!(clause, "Email IN (?, ?)");
    assert_eq!(params, vec![Value::from("a@x"), Value::Null]);
}

#[test]
fn explicit_null_tests() {
    let (clause, _) = where_clause(Expr::is_null(Expr::field("Email")));
    assert_eq!(clause, "(Email IS NULL)");

    let (clause, _) = where_clause(Expr::is_not_null(Expr::field("Email")));
    assert_eq!(clause, "(Email IS NOT NULL)");
}

#[test]
fn null_constant_is_never_a_parameter() {
    let (clause, params) = where_clause(Expr::eq(
        Expr::add(Expr::field("Age"), Expr::null()),
        Expr::field("Age"),
    ));

    assert_eq!(clause, "((Age + NULL) = Age)");
    assert!(params.is_empty());
}

// ---------------------------------------------------------------------------
// Strings and membership
// ---------------------------------------------------------------------------

#[test]
fn pattern_matches() {
    for (expr, expected) in [
        (Expr::contains(Expr::field("Name"), "ann"), "%ann%"),
        (Expr::starts_with(Expr::field("Name"), "ann"), "ann%"),
        (Expr::ends_with(Expr::field("Name"), "ann"), "%ann"),
    ] {
        let (clause, params) = where_clause(expr);
        assert_eq!(clause, "Name LIKE ?");
        assert_eq!(params, vec![Value::from(expected)]);
    }
}

#[test]
fn pattern_from_a_number_uses_its_text() {
    let (clause, params) = where_clause(Expr::contains(Expr::field("Name"), 42));
    assert_eq!(clause, "Name LIKE ?");
    assert_eq!(params, vec![Value::from("%42%")]);
}

#[test]
fn membership_keeps_list_order() {
    let (clause, params) = where_clause(Expr::in_list(
        Expr::field("Name"),
        Expr::list(["c", "a", "b"]),
    ));

    assert_eq!(clause, "Name IN (?, ?, ?)");
    assert_eq!(
        params,
        vec![Value::from("c"), Value::from("a"), Value::from("b")]
    );
}
