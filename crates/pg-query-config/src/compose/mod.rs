//! Query-config composition.
//!
//! A [`QueryConfig`] is built incrementally: text fragments are appended,
//! identifiers and literals are quoted inline, and values are bound behind
//! `$1, $2, ...` placeholders that stay contiguous as fragments grow. Two
//! finished configs can be combined either in place
//! ([`QueryConfig::append_query_config`]) or into a fresh config
//! ([`QueryConfig::merge`]); both shift the second config's placeholders.
//!
//! # Example
//!
//! ```ignore
//! use pg_query_config::{Param, query_config};
//!
//! let mut q = query_config("SELECT * FROM");
//! q.append_identifier("public.users")?;
//! q.append_text("WHERE id IN");
//! q.open_brackets().bind_values([1_i64, 2, 3].map(Param::new)).append_raw(")");
//!
//! let rows = client.query(&q.text, &q.params_ref()).await?;
//! ```

mod builder;
mod merge;


pub use builder::{DEFAULT_SEPARATOR, QueryConfig};

/// Start building a config bound to `tokio-postgres` values.
pub fn query_config(initial_sql: impl Into<String>) -> QueryConfig {
    QueryConfig::new(initial_sql)
}
