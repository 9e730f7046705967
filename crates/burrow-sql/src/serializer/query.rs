use super::{
    plan::{OrderKey, OrderTerm, PlannedJoin, Projection},
    value::VectorLiteral,
    Comma, Delimited, Formatter, Ident, Params, QueryPlan, ToSql,
};

use burrow_core::{stmt::Direction, Result};

impl ToSql for &QueryPlan<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table = Ident(&self.mapping.table);

        let select_list = SelectList(self);
        fmt!(f, "SELECT " select_list " FROM " table);

        for join in &self.joins {
            let join = JoinClause { table, join };
            fmt!(f, join);
        }

        if !self.filters.is_empty() {
            let filters = Delimited(self.filters.iter().copied(), " AND ");
            fmt!(f, " WHERE " filters);
        }

        // Aggregates reduce to a single row
        if self.is_aggregate() {
            return Ok(());
        }

        if !self.order_by.is_empty() {
            let terms = Comma(&self.order_by);
            fmt!(f, " ORDER BY " terms);
        }

        match (self.limit, self.offset) {
            (Some(limit), _) => fmt!(f, " LIMIT " limit),
            // An offset needs a limit in front of it
            (None, Some(_)) => fmt!(f, " LIMIT -1"),
            (None, None) => {}
        }

        if let Some(offset) = self.offset {
            fmt!(f, " OFFSET " offset);
        }

        Ok(())
    }
}

struct SelectList<'a, 'q>(&'a QueryPlan<'q>);

impl ToSql for SelectList<'_, '_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let plan = self.0;

        match &plan.projection {
            Projection::Star => {
                let table = Ident(&plan.mapping.table);
                fmt!(f, table ".*");

                for join in &plan.joins {
                    let joined = Ident(&join.table);
                    fmt!(f, ", " joined ".*");
                }
            }
            Projection::Columns(columns) => {
                let columns = Comma(columns.iter().map(|(column, alias)| ColumnAlias {
                    column,
                    alias,
                }));
                fmt!(f, columns);
            }
            Projection::Count => fmt!(f, "COUNT(*)"),
            Projection::Sum(column) => {
                let column = Ident(column);
                fmt!(f, "SUM(" column ")");
            }
        }

        Ok(())
    }
}

/// `column AS alias`
struct ColumnAlias<'a> {
    column: &'a String,
    alias: &'a String,
}

impl ToSql for ColumnAlias<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let (column, alias) = (Ident(self.column), Ident(self.alias));
        fmt!(f, column " AS " alias);
        Ok(())
    }
}

/// ` LEFT JOIN right ON left.col = right.col`
struct JoinClause<'a> {
    table: Ident<&'a String>,
    join: &'a PlannedJoin,
}

impl ToSql for JoinClause<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let JoinClause { table, join } = self;
        let joined = Ident(&join.table);
        let (left_column, right_column) = (Ident(&join.left_column), Ident(&join.right_column));

        fmt!(
            f,
            " LEFT JOIN " joined " ON " table "." left_column " = " joined "." right_column
        );
        Ok(())
    }
}

impl ToSql for &OrderTerm {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match &self.key {
            OrderKey::Column(column) => {
                let column = Ident(column);
                fmt!(f, column);
            }
            OrderKey::VectorDistance { column, vector } => {
                let column = Ident(column);
                let vector = VectorLiteral(vector);
                fmt!(f, "vector_distance_cos(" column ", " vector ")");
            }
        }

        fmt!(f, " " self.direction);
        Ok(())
    }
}

impl ToSql for Direction {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let direction = match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };
        fmt!(f, direction);
        Ok(())
    }
}
