#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

mod plan;
use plan::QueryPlan;

// Fragment serializers
mod column_def;
mod expr;
mod name;
mod query;
mod statement;
mod value;

use crate::{stmt::Statement, Capability};

use burrow_core::{RecordMapping, Result};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Features of the target dialect.
    capability: &'a Capability,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Record that field references resolve against. Only set while
    /// serializing a query.
    mapping: Option<&'a RecordMapping>,
}

impl Serializer<'static> {
    /// Serializes for libSQL.
    pub fn libsql() -> Self {
        Serializer::new(&Capability::LIBSQL)
    }
}

impl<'a> Serializer<'a> {
    pub fn new(capability: &'a Capability) -> Self {
        Serializer { capability }
    }

    pub fn capability(&self) -> &'a Capability {
        self.capability
    }

    /// Serializes `stmt`, pushing its parameters onto `params` in placeholder
    /// order. The returned SQL always ends with `;`.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        match stmt {
            Statement::Query(query) => {
                let plan = QueryPlan::build(self, query)?;

                let mut fmt = Formatter {
                    serializer: self,
                    dst: &mut ret,
                    params,
                    mapping: Some(&*plan.mapping),
                };

                (&plan).to_sql(&mut fmt)?;

                tracing::debug!(
                    table = %plan.mapping.table,
                    sql = %ret,
                    params = ret.matches('?').count(),
                    "compiled query"
                );
            }
            stmt => {
                let mut fmt = Formatter {
                    serializer: self,
                    dst: &mut ret,
                    params,
                    mapping: None,
                };

                stmt.to_sql(&mut fmt)?;
            }
        }

        ret.push(';');
        Ok(ret)
    }
}
