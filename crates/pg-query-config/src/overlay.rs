//! Extra fields carried alongside `text`/`values`/`name`.
//!
//! A [`QueryConfig`](crate::QueryConfig) can carry any additional record `X`.
//! [`QueryConfig::merge`](crate::QueryConfig::merge) combines the extras of both
//! sides with [`Overlay::overlay`], where fields present on the extension win.

use std::collections::BTreeMap;

/// Shallow-override composition.
pub trait Overlay {
    /// Combine `self` (the source) with `ext`; anything `ext` sets wins.
    fn overlay(&self, ext: &Self) -> Self;
}

impl Overlay for () {
    fn overlay(&self, _ext: &Self) -> Self {}
}

impl<T: Clone> Overlay for Option<T> {
    fn overlay(&self, ext: &Self) -> Self {
        ext.clone().or_else(|| self.clone())
    }
}

impl<K: Ord + Clone, T: Clone> Overlay for BTreeMap<K, T> {
    fn overlay(&self, ext: &Self) -> Self {
        let mut out = self.clone();
        out.extend(ext.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }
}

/// How the driver should shape result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    /// One record per row, keyed by column name.
    Object,
    /// One positional array per row.
    Array,
}

/// Driver-facing options a config may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Row shape requested from the execution layer. `None` leaves the driver default.
    pub row_mode: Option<RowMode>,
}

impl QueryOptions {
    /// Create options with driver defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific row shape.
    pub fn row_mode(mut self, mode: RowMode) -> Self {
        self.row_mode = Some(mode);
        self
    }
}

impl Overlay for QueryOptions {
    fn overlay(&self, ext: &Self) -> Self {
        Self {
            row_mode: self.row_mode.overlay(&ext.row_mode),
        }
    }
}
