//! The batched request/response envelope spoken by the libSQL server.
//!
//! A pipeline request carries an ordered list of statements with their
//! arguments; the response carries one result per request, in order.

use crate::{load_row, WireArg, WireValue};

use burrow_core::{stmt::Value, Error, Record, Result};
use burrow_sql::{Serializer, Statement};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineRequest {
    /// Stream handle returned by a previous response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baton: Option<String>,

    pub requests: Vec<StreamRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamRequest {
    Execute { stmt: Stmt },
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stmt {
    pub sql: String,
    pub args: Vec<WireArg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResponse {
    #[serde(default)]
    pub baton: Option<String>,

    pub results: Vec<StreamResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamResult {
    Ok { response: StreamResponse },
    Error { error: StreamError },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamResponse {
    Execute { result: StmtResult },
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamError {
    pub message: String,

    #[serde(default)]
    pub code: Option<String>,
}

/// Outcome of one executed statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StmtResult {
    pub cols: Vec<Col>,
    pub rows: Vec<Vec<WireArg>>,
    pub affected_row_count: u64,

    /// Decimal row id of the last insert, when the statement inserted.
    #[serde(default)]
    pub last_insert_rowid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Col {
    pub name: Option<String>,

    #[serde(default)]
    pub decltype: Option<String>,
}

impl PipelineRequest {
    pub fn new() -> PipelineRequest {
        PipelineRequest::default()
    }

    /// Appends a statement with its positional arguments.
    pub fn execute(mut self, sql: impl Into<String>, params: &[Value]) -> Result<PipelineRequest> {
        let args = params
            .iter()
            .map(WireArg::try_from)
            .collect::<Result<Vec<_>>>()?;

        self.requests.push(StreamRequest::Execute {
            stmt: Stmt {
                sql: sql.into(),
                args,
            },
        });

        Ok(self)
    }

    /// Appends a request closing the stream.
    pub fn close(mut self) -> PipelineRequest {
        self.requests.push(StreamRequest::Close);
        self
    }

    /// Serializes every statement and closes the stream after the last one.
    pub fn from_statements(
        serializer: &Serializer<'_>,
        statements: &[Statement],
    ) -> Result<PipelineRequest> {
        let mut request = PipelineRequest::new();

        for stmt in statements {
            let mut params: Vec<Value> = vec![];
            let sql = serializer.serialize(stmt, &mut params)?;
            request = request.execute(sql, &params)?;
        }

        tracing::debug!(statements = statements.len(), "built pipeline request");

        Ok(request.close())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| Error::from(anyhow::Error::from(err)))
    }
}

impl PipelineResponse {
    pub fn from_json(json: &str) -> Result<PipelineResponse> {
        serde_json::from_str(json).map_err(|err| {
            Error::from(anyhow::Error::from(err))
                .context(Error::invalid_response("malformed pipeline envelope"))
        })
    }

    /// The results of every `execute` request, in order. A failed statement
    /// fails the whole response.
    pub fn execute_results(&self) -> Result<Vec<&StmtResult>> {
        let mut results = vec![];

        for (index, result) in self.results.iter().enumerate() {
            match result {
                StreamResult::Ok {
                    response: StreamResponse::Execute { result },
                } => results.push(result),
                StreamResult::Ok {
                    response: StreamResponse::Close,
                } => {}
                StreamResult::Error { error } => {
                    return Err(Error::invalid_response(format!(
                        "request {index} failed: {}",
                        error.message
                    )));
                }
            }
        }

        Ok(results)
    }
}

impl StmtResult {
    /// Column names in result order. Unnamed columns are empty.
    pub fn column_names(&self) -> Vec<&str> {
        self.cols
            .iter()
            .map(|col| col.name.as_deref().unwrap_or_default())
            .collect()
    }

    /// Rows converted to wire values.
    pub fn rows(&self) -> impl Iterator<Item = Vec<WireValue>> + '_ {
        self.rows
            .iter()
            .map(|row| row.iter().cloned().map(WireValue::from).collect())
    }

    pub fn last_insert_rowid(&self) -> Result<Option<i64>> {
        self.last_insert_rowid
            .as_deref()
            .map(|id| {
                id.parse().map_err(|_| {
                    Error::invalid_response(format!("last_insert_rowid `{id}` is not an integer"))
                })
            })
            .transpose()
    }

    /// Decodes every row into a record.
    pub fn load<T: Record + Default>(&self) -> Result<Vec<T>> {
        let columns = self.column_names();
        self.rows()
            .map(|row| load_row::<T, _>(columns.as_slice(), &row))
            .collect()
    }
}
