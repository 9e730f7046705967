use burrow_core::{
    schema::{RecordMapping, RecordRef},
    stmt::{BinaryOp, Direction, Expr, PatternKind, Query, QueryOp, Slot, Target, Type, Value},
    Result,
};

use std::sync::Arc;

fn unresolved() -> Result<Arc<RecordMapping>> {
    Err(burrow_core::Error::schema_resolution("not registered"))
}

fn query() -> Query {
    Query::from_ref(RecordRef::new("Item", unresolved))
}

// ---------------------------------------------------------------------------
// Query chain
// ---------------------------------------------------------------------------

#[test]
fn operations_are_kept_in_order() {
    let query = query()
        .filter(Expr::eq(Expr::field("name"), "a"))
        .order_by_desc(Expr::field("rank"))
        .then_by(Expr::field("name"))
        .skip(5)
        .take(10);

    assert_eq!(
        query.ops,
        vec![
            QueryOp::Filter(Expr::eq(Expr::field("name"), "a")),
            QueryOp::OrderBy(Expr::field("rank"), Direction::Desc),
            QueryOp::ThenBy(Expr::field("name"), Direction::Asc),
            QueryOp::Skip(Expr::Value(Value::I64(5))),
            QueryOp::Take(Expr::Value(Value::I64(10))),
        ]
    );
    assert!(!query.is_aggregate());
}

#[test]
fn aggregates_end_the_chain() {
    assert!(query().count().is_aggregate());
    assert!(query().sum(Expr::field("price")).is_aggregate());
    assert!(!query().first().is_aggregate());
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[test]
fn constants_convert_to_values() {
    assert_eq!(Expr::from(7u8), Expr::Value(Value::I64(7)));
    assert_eq!(Expr::from(u64::MAX), Expr::Value(Value::U64(u64::MAX)));
    assert_eq!(Expr::from("x"), Expr::Value(Value::String("x".into())));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(2.5f64)), Value::F64(2.5));
}

#[test]
fn list_constant() {
    assert_eq!(
        Expr::list(["a", "b"]),
        Expr::Value(Value::List(vec![Value::from("a"), Value::from("b")]))
    );
}

#[test]
fn casts_are_stripped() {
    let expr = Expr::cast(Expr::cast(Expr::field("score"), Type::I64), Type::F64);
    assert_eq!(expr.strip_casts(), &Expr::field("score"));
}

#[test]
fn describe_names_the_construct() {
    assert_eq!(
        Expr::func("to_upper", [Expr::field("name")]).describe(),
        "method `to_upper`"
    );
    assert_eq!(
        Expr::binary_op(Expr::field("a"), BinaryOp::Mod, 2).describe(),
        "operator `%`"
    );
}

#[test]
fn pattern_wildcards() {
    assert_eq!(PatternKind::Contains.apply("ab"), "%ab%");
    assert_eq!(PatternKind::StartsWith.apply("ab"), "ab%");
    assert_eq!(PatternKind::EndsWith.apply("ab"), "%ab");
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

#[test]
fn required_slot_cannot_be_cleared() {
    let mut value = 3i32;
    assert!(!Slot::Required(&mut value).clear());
    assert_eq!(value, 3);

    let mut value = Some(3i32);
    assert!(Target::I32(Slot::Optional(&mut value)).clear());
    assert_eq!(value, None);
}
