use super::Serializer;

use burrow_core::{
    stmt::{Direction, Expr, F32Vector, Query, QueryOp, Value},
    Error, RecordMapping, Result,
};

use std::sync::Arc;

/// A query lowered to the clauses of one `SELECT`.
///
/// Field references used for projection, ordering and joins are resolved to
/// column names while planning. Filters are kept as expressions and resolved
/// while rendering, so their parameters are pushed in `WHERE` order.
#[derive(Debug)]
pub(super) struct QueryPlan<'q> {
    /// Mapping of the query's root record.
    pub(super) mapping: Arc<RecordMapping>,

    pub(super) joins: Vec<PlannedJoin>,

    /// Predicates, joined with `AND`.
    pub(super) filters: Vec<&'q Expr>,

    pub(super) projection: Projection,

    pub(super) order_by: Vec<OrderTerm>,

    pub(super) limit: Option<u64>,

    pub(super) offset: Option<u64>,
}

#[derive(Debug)]
pub(super) struct PlannedJoin {
    pub(super) table: String,
    pub(super) left_column: String,
    pub(super) right_column: String,
}

#[derive(Debug)]
pub(super) enum Projection {
    /// Every column of the root table and of each joined table.
    Star,

    /// `column AS alias` pairs.
    Columns(Vec<(String, String)>),

    /// `COUNT(*)`
    Count,

    /// `SUM(column)`
    Sum(String),
}

#[derive(Debug)]
pub(super) struct OrderTerm {
    pub(super) key: OrderKey,
    pub(super) direction: Direction,
}

#[derive(Debug)]
pub(super) enum OrderKey {
    Column(String),

    /// Cosine distance between a vector column and a literal vector.
    VectorDistance { column: String, vector: F32Vector },
}

impl<'q> QueryPlan<'q> {
    pub(super) fn build(serializer: &Serializer<'_>, query: &'q Query) -> Result<QueryPlan<'q>> {
        let mapping = query.source.resolve().map_err(|err| {
            err.context(Error::schema_resolution(format!(
                "cannot resolve the root record `{}`",
                query.source.name()
            )))
        })?;

        if mapping.table.is_empty() {
            return Err(Error::schema_resolution(format!(
                "record `{}` has no table name",
                mapping.name
            )));
        }

        let mut plan = QueryPlan {
            joins: plan_joins(&mapping)?,
            mapping,
            filters: vec![],
            projection: Projection::Star,
            order_by: vec![],
            limit: None,
            offset: None,
        };

        for op in &query.ops {
            plan.apply(serializer, op)?;
        }

        Ok(plan)
    }

    fn apply(&mut self, serializer: &Serializer<'_>, op: &'q QueryOp) -> Result<()> {
        match op {
            QueryOp::Filter(predicate) => self.filters.push(predicate),
            QueryOp::Select(projection) => {
                self.projection = Projection::Columns(self.projection_columns(projection)?);
            }
            QueryOp::OrderBy(key, direction) => {
                self.order_by.clear();
                let term = self.order_term(serializer, key, *direction)?;
                self.order_by.push(term);
            }
            QueryOp::ThenBy(key, direction) => {
                let term = self.order_term(serializer, key, *direction)?;
                self.order_by.push(term);
            }
            QueryOp::Take(count) => {
                self.limit = Some(paging_count("take", count)?);
            }
            QueryOp::Skip(count) => {
                let count = paging_count("skip", count)?;
                self.offset = (count > 0).then_some(count);
            }
            QueryOp::Count(predicate) => {
                self.filters.extend(predicate);
                self.projection = Projection::Count;
            }
            QueryOp::Sum(selector) => {
                let Expr::Field(field) = selector.strip_casts() else {
                    return Err(Error::invalid_argument(format!(
                        "sum requires a field selector, found {}",
                        selector.describe()
                    )));
                };
                self.projection = Projection::Sum(self.column(&field.name)?.to_string());
            }
            QueryOp::First(predicate) => {
                self.filters.extend(predicate);
                self.limit = Some(1);
            }
        }

        Ok(())
    }

    /// True when the select list is an aggregate.
    pub(super) fn is_aggregate(&self) -> bool {
        matches!(self.projection, Projection::Count | Projection::Sum(_))
    }

    fn column(&self, field: &str) -> Result<&str> {
        match self.mapping.column_by_field(field) {
            Some(column) => Ok(&column.name),
            None => Err(Error::schema_resolution(format!(
                "record `{}` has no mapped field `{field}`",
                self.mapping.name
            ))),
        }
    }

    fn projection_columns(&self, projection: &Expr) -> Result<Vec<(String, String)>> {
        match projection.strip_casts() {
            Expr::Field(field) => Ok(vec![(
                self.column(&field.name)?.to_string(),
                field.name.clone(),
            )]),
            Expr::Record(record) => record
                .fields
                .iter()
                .map(|(alias, expr)| match expr.strip_casts() {
                    Expr::Field(field) => {
                        Ok((self.column(&field.name)?.to_string(), alias.clone()))
                    }
                    other => Err(Error::unsupported_expression(format!(
                        "{} in a projection",
                        other.describe()
                    ))),
                })
                .collect(),
            other => Err(Error::unsupported_expression(format!(
                "{} in a projection",
                other.describe()
            ))),
        }
    }

    fn order_term(
        &self,
        serializer: &Serializer<'_>,
        key: &Expr,
        direction: Direction,
    ) -> Result<OrderTerm> {
        let key = match key.strip_casts() {
            Expr::Field(field) => OrderKey::Column(self.column(&field.name)?.to_string()),
            Expr::VectorDistance(distance) => {
                if !serializer.capability().vector_search {
                    return Err(Error::unsupported_expression(
                        "vector_distance on an engine without vector search",
                    ));
                }

                let Expr::Field(field) = distance.expr.strip_casts() else {
                    return Err(Error::unsupported_expression(format!(
                        "vector_distance over {}",
                        distance.expr.describe()
                    )));
                };

                let Expr::Value(Value::Vector(vector)) = distance.vector.strip_casts() else {
                    return Err(Error::invalid_argument(
                        "vector_distance requires a literal vector",
                    ));
                };

                OrderKey::VectorDistance {
                    column: self.column(&field.name)?.to_string(),
                    vector: vector.clone(),
                }
            }
            other => {
                return Err(Error::unsupported_expression(format!(
                    "ordering by {}",
                    other.describe()
                )))
            }
        };

        Ok(OrderTerm { key, direction })
    }
}

fn plan_joins(mapping: &RecordMapping) -> Result<Vec<PlannedJoin>> {
    let mut joins = vec![];

    for join in &mapping.joins {
        let Some(left) = mapping.column_by_field(&join.left_field) else {
            return Err(Error::schema_resolution(format!(
                "join from `{}` names unknown field `{}`",
                mapping.name, join.left_field
            )));
        };

        let right = join.right.resolve().map_err(|err| {
            err.context(Error::schema_resolution(format!(
                "cannot resolve join target `{}`",
                join.right.name()
            )))
        })?;

        let Some(right_column) = right.column_by_field(&join.right_field) else {
            return Err(Error::schema_resolution(format!(
                "join target `{}` has no mapped field `{}`",
                right.name, join.right_field
            )));
        };

        if right.table.is_empty() {
            return Err(Error::schema_resolution(format!(
                "join target `{}` has no table name",
                right.name
            )));
        }

        joins.push(PlannedJoin {
            table: right.table.clone(),
            left_column: left.name.clone(),
            right_column: right_column.name.clone(),
        });
    }

    Ok(joins)
}

/// Evaluates a `take` or `skip` argument.
fn paging_count(op: &str, count: &Expr) -> Result<u64> {
    match count.strip_casts() {
        Expr::Value(Value::I64(count)) => u64::try_from(*count).map_err(|_| {
            Error::invalid_argument(format!("{op} count must not be negative, got {count}"))
        }),
        Expr::Value(Value::U64(count)) => Ok(*count),
        other => Err(Error::invalid_argument(format!(
            "{op} count must be an integer constant, found {}",
            other.describe()
        ))),
    }
}
