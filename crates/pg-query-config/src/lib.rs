//! # pg-query-config
//!
//! Compose parameterized PostgreSQL queries as plain data: SQL text plus the
//! ordered list of values its `$N` placeholders refer to.
//!
//! ## Features
//!
//! - **Contiguous placeholders**: binding always emits the next `$N`
//! - **Composable**: append or merge finished configs, placeholders are shifted
//! - **Inline quoting**: identifiers (`"public"."users"`) and literals (`'it''s'`)
//! - **Driver-ready**: the default value type hands straight to `tokio-postgres`
//!
//! ```ignore
//! use pg_query_config::query_config;
//!
//! let mut filter = query_config("status =");
//! filter.append_raw(" ").push_bind("active");
//!
//! let mut q = query_config("SELECT id FROM users WHERE org_id = ");
//! q.push_bind(org_id).append_text("AND").append_query_config(&filter);
//! assert_eq!(q.text, "SELECT id FROM users WHERE org_id = $1 AND status = $2");
//!
//! let rows = client.query(&q.text, &q.params_ref()).await?;
//! ```
//!
//! The crate never executes SQL and never parses it: text is opaque except
//! for the `$<digits>` placeholder pattern.

pub mod compose;
pub mod error;
pub mod escape;
pub mod overlay;
pub mod param;
pub mod placeholder;

pub use compose::{DEFAULT_SEPARATOR, QueryConfig, query_config};
pub use error::{ComposeError, ComposeResult};
pub use escape::{escape_identifier, escape_literal};
pub use overlay::{Overlay, QueryOptions, RowMode};
pub use param::{Bind, Param};
