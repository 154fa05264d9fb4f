//! Bound parameter values.
//!
//! [`Param`] is the default value type of a [`QueryConfig`](crate::QueryConfig):
//! a clone-friendly handle to any `tokio-postgres` `ToSql` value. [`Bind`] adds
//! the two sentinels that bind no value at all and render as SQL keywords.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly parameter wrapper using Arc.
///
/// Merging configs clones their value lists; with `Param` that only bumps a
/// reference count.
#[derive(Clone)]
pub struct Param(pub(crate) Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new parameter from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }

    /// Check whether two params share the same underlying value.
    pub fn ptr_eq(&self, other: &Param) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Param").field(&self.0).finish()
    }
}

/// One entry handed to the parameter binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bind<V> {
    /// Renders `NULL`; nothing is pushed onto `values`.
    Null,
    /// Renders `DEFAULT`; nothing is pushed onto `values`.
    Default,
    /// Renders the next `$N` placeholder and pushes the value.
    Value(V),
}

impl<V> Bind<V> {
    /// `None` binds `NULL`, `Some(v)` binds `v`.
    pub fn nullable(value: Option<V>) -> Self {
        match value {
            Some(v) => Bind::Value(v),
            None => Bind::Null,
        }
    }

    /// `None` binds `DEFAULT`, `Some(v)` binds `v`.
    pub fn or_default(value: Option<V>) -> Self {
        match value {
            Some(v) => Bind::Value(v),
            None => Bind::Default,
        }
    }

    /// Map the bound value, keeping sentinels as they are.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Bind<U> {
        match self {
            Bind::Null => Bind::Null,
            Bind::Default => Bind::Default,
            Bind::Value(v) => Bind::Value(f(v)),
        }
    }
}

impl<V> From<V> for Bind<V> {
    fn from(value: V) -> Self {
        Bind::Value(value)
    }
}
