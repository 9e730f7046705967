use super::{Direction, Expr};
use crate::schema::{Record, RecordRef};

/// A query against one record type, described as an ordered chain of
/// operations.
///
/// The chain reads the same way it is built:
///
/// ```text
/// Query::new::<User>()
///     .filter(Expr::eq(Expr::field("name"), "alice"))
///     .order_by(Expr::field("created_at"))
///     .take(10)
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    /// Root record of the query.
    pub source: RecordRef,

    /// Operations in application order.
    pub ops: Vec<QueryOp>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOp {
    /// Keep rows matching a predicate.
    Filter(Expr),

    /// Project the rows; a field or a record construction.
    Select(Expr),

    /// Start a new ordering.
    OrderBy(Expr, Direction),

    /// Append an ordering term.
    ThenBy(Expr, Direction),

    /// Limit the number of rows.
    Take(Expr),

    /// Skip leading rows.
    Skip(Expr),

    /// Count matching rows, with an optional extra predicate.
    Count(Option<Expr>),

    /// Sum a field over matching rows.
    Sum(Expr),

    /// The first matching row, with an optional extra predicate.
    First(Option<Expr>),
}

impl Query {
    pub fn new<T: Record>() -> Query {
        Query::from_ref(RecordRef::of::<T>())
    }

    pub fn from_ref(source: RecordRef) -> Query {
        Query {
            source,
            ops: vec![],
        }
    }

    fn push(mut self, op: QueryOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn filter(self, predicate: impl Into<Expr>) -> Self {
        self.push(QueryOp::Filter(predicate.into()))
    }

    pub fn select(self, projection: impl Into<Expr>) -> Self {
        self.push(QueryOp::Select(projection.into()))
    }

    pub fn order_by(self, key: impl Into<Expr>) -> Self {
        self.push(QueryOp::OrderBy(key.into(), Direction::Asc))
    }

    pub fn order_by_desc(self, key: impl Into<Expr>) -> Self {
        self.push(QueryOp::OrderBy(key.into(), Direction::Desc))
    }

    pub fn then_by(self, key: impl Into<Expr>) -> Self {
        self.push(QueryOp::ThenBy(key.into(), Direction::Asc))
    }

    pub fn then_by_desc(self, key: impl Into<Expr>) -> Self {
        self.push(QueryOp::ThenBy(key.into(), Direction::Desc))
    }

    pub fn take(self, count: impl Into<Expr>) -> Self {
        self.push(QueryOp::Take(count.into()))
    }

    pub fn skip(self, count: impl Into<Expr>) -> Self {
        self.push(QueryOp::Skip(count.into()))
    }

    pub fn count(self) -> Self {
        self.push(QueryOp::Count(None))
    }

    pub fn count_where(self, predicate: impl Into<Expr>) -> Self {
        self.push(QueryOp::Count(Some(predicate.into())))
    }

    pub fn sum(self, selector: impl Into<Expr>) -> Self {
        self.push(QueryOp::Sum(selector.into()))
    }

    pub fn first(self) -> Self {
        self.push(QueryOp::First(None))
    }

    pub fn first_where(self, predicate: impl Into<Expr>) -> Self {
        self.push(QueryOp::First(Some(predicate.into())))
    }

    /// Returns `true` if the query ends in an aggregate.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self.ops.last(),
            Some(QueryOp::Count(_) | QueryOp::Sum(_))
        )
    }
}
