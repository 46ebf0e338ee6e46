//! Values bound to the `$n` placeholders produced by the builder.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Int(i64),
    Text(String),
    IntList(Vec<i64>),
}

/// Bind every value in placeholder order.
pub fn bind_all<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: &[BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for p in params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.clone()),
            BindValue::IntList(v) => query.bind(v.clone()),
        };
    }
    query
}
