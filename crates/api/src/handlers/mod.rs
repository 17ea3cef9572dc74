use axum::extract::rejection::QueryRejection;
use axum::extract::Query;

pub mod chapter_status;
pub mod run_task;

/// Decoded query string, in order, repeated keys included.
pub type QueryPairs = Vec<(String, String)>;

/// Unwrap the query pairs, treating an undecodable query as empty.
///
/// Field validation then reports the first missing parameter.
pub(crate) fn query_pairs(query: Result<Query<QueryPairs>, QueryRejection>) -> QueryPairs {
    query.map(|Query(pairs)| pairs).unwrap_or_else(|rejection| {
        tracing::warn!(error = %rejection, "Couldn't decode query string");
        Vec::new()
    })
}
