//! Run an ad-hoc SQL query against PostgreSQL and return the result as a
//! table of display strings.

mod cell;

pub use cell::{Cell, CellKind};

/// A query result, every value rendered as text.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct QueryResult {
    /// Column names, in result order.
    pub columns: Vec<String>,

    /// Rows of rendered cells; SQL `NULL` is rendered as `"NULL"`.
    pub rows: Vec<Vec<String>>,
}

/// Errors returned while executing a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Failed to connect to the database.
    #[error("connect: {0}")]
    Connect(#[source] tokio_postgres::Error),

    /// The server rejected or failed the query.
    #[error("query: {0}")]
    Query(#[source] tokio_postgres::Error),

    /// A cell could not be decoded as its column type.
    #[error("decode column {column:?}: {source}")]
    Decode {
        /// The column name.
        column: String,

        /// Underlying decode error.
        #[source]
        source: tokio_postgres::Error,
    },
}

/// Connect, run a single query without parameters, and render the rows.
///
/// A query returning no rows yields an empty [`QueryResult`], without column
/// names.
pub async fn execute(connection_string: &str, query: &str) -> Result<QueryResult, QueryError> {
    tracing::debug!("connecting to database");
    let (client, connection) = tokio_postgres::connect(connection_string, tokio_postgres::NoTls)
        .await
        .map_err(QueryError::Connect)?;

    tokio::spawn(async move {
        if let Err(error) = connection.await {
            tracing::error!(message = "database connection error", %error);
        }
    });

    tracing::info!(query, "executing query");
    let rows = client.query(query, &[]).await.map_err(QueryError::Query)?;
    tracing::info!(rows = rows.len(), "query returned");

    render_rows(&rows)
}

/// Render rows, taking column names from the first one.
pub fn render_rows(rows: &[tokio_postgres::Row]) -> Result<QueryResult, QueryError> {
    let Some(first) = rows.first() else {
        return Ok(QueryResult::default());
    };

    let columns: Vec<String> = first
        .columns()
        .iter()
        .map(|col| col.name().to_owned())
        .collect();

    let rows = rows
        .iter()
        .map(render_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QueryResult { columns, rows })
}

/// Render every cell of a row.
fn render_row(row: &tokio_postgres::Row) -> Result<Vec<String>, QueryError> {
    row.columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let kind = CellKind::of(column.type_());
            Cell::decode(row, idx, kind)
                .map(|cell| cell.to_string())
                .map_err(|source| QueryError::Decode {
                    column: column.name().to_owned(),
                    source,
                })
        })
        .collect()
}
