use crate::error::{ComposeError, ComposeResult};
use crate::escape::{escape_identifier, escape_literal};
use crate::param::{Bind, Param};
use crate::placeholder::placeholders;
use std::fmt;
use tokio_postgres::types::ToSql;

/// Separator used by the list operations when none is given.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// SQL text plus the values its `$1, $2, ...` placeholders refer to.
///
/// `values[i]` is the value for placeholder `$(i + 1)`. Operations that grow
/// the config only ever append to `text` and `values`.
///
/// - `V` is the bound-value type (default [`Param`], a `tokio-postgres` value).
/// - `X` holds any extra fields; [`merge`](QueryConfig::merge) overlays them
///   via [`Overlay`](crate::Overlay).
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig<V = Param, X = ()> {
    /// The SQL being assembled.
    pub text: String,
    /// Bound values, in placeholder order.
    pub values: Vec<V>,
    /// Optional label (e.g. a prepared statement name). Never recomputed.
    pub name: Option<String>,
    /// Extra fields carried with the config.
    pub extra: X,
}

impl<V> QueryConfig<V, ()> {
    /// Create a config with initial SQL text and no values.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            values: Vec::new(),
            name: None,
            extra: (),
        }
    }

    /// Create an empty config.
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Create a config from pre-numbered SQL and its values.
    ///
    /// No consistency check is performed; see [`validate`](QueryConfig::validate).
    pub fn from_parts(text: impl Into<String>, values: Vec<V>) -> Self {
        Self {
            text: text.into(),
            values,
            name: None,
            extra: (),
        }
    }
}

impl<V, X> QueryConfig<V, X> {
    /// Set the label (consuming version).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the extra fields, changing their type.
    pub fn with_extra<Y>(self, extra: Y) -> QueryConfig<V, Y> {
        QueryConfig {
            text: self.text,
            values: self.values,
            name: self.name,
            extra,
        }
    }

    /// Split into `(text, values)`.
    pub fn into_parts(self) -> (String, Vec<V>) {
        (self.text, self.values)
    }

    // ==================== Text ====================

    /// Append text as-is.
    pub fn append_raw(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Append text, separated by one space unless `text` is empty so far or
    /// already ends in whitespace.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        if !self.text.is_empty() && !self.text.ends_with(char::is_whitespace) {
            self.text.push(' ');
        }
        self.text.push_str(text);
        self
    }

    /// Append `(` using the [`append_text`](QueryConfig::append_text) rule.
    pub fn open_brackets(&mut self) -> &mut Self {
        self.append_text("(")
    }

    /// Append `)` using the [`append_text`](QueryConfig::append_text) rule.
    pub fn close_brackets(&mut self) -> &mut Self {
        self.append_text(")")
    }

    // ==================== Escaping ====================

    /// Append a possibly schema-qualified identifier.
    ///
    /// Each `.`-separated segment is quoted on its own, so `public.users`
    /// renders as `"public"."users"`. On error nothing is appended.
    pub fn append_identifier(&mut self, identifier: &str) -> ComposeResult<&mut Self> {
        let segments = identifier
            .split('.')
            .map(escape_identifier)
            .collect::<ComposeResult<Vec<_>>>()?;
        Ok(self.append_text(&segments.join(".")))
    }

    /// Inline a quoted string literal into the text.
    ///
    /// The literal is **not** bound: `values` is untouched and no placeholder
    /// is emitted. Prefer [`bind_value`](QueryConfig::bind_value) for user data.
    pub fn append_literal(&mut self, input: &str) -> ComposeResult<&mut Self> {
        let literal = escape_literal(input)?;
        Ok(self.append_text(&literal))
    }

    /// Inline several quoted literals joined by [`DEFAULT_SEPARATOR`].
    ///
    /// See [`append_literals_separated`](QueryConfig::append_literals_separated).
    pub fn append_literals<S: AsRef<str>>(
        &mut self,
        input: &[Option<S>],
    ) -> ComposeResult<&mut Self> {
        self.append_literals_separated(input, DEFAULT_SEPARATOR)
    }

    /// Inline several quoted literals joined by `separator`, raw-appended.
    ///
    /// A `None` entry emits nothing, while the separator after every entry
    /// but the last is still written for present ones: `[Some("a"), None]`
    /// renders `'a', `. All entries are escaped before the text is touched.
    pub fn append_literals_separated<S: AsRef<str>>(
        &mut self,
        input: &[Option<S>],
        separator: &str,
    ) -> ComposeResult<&mut Self> {
        let mut out = String::new();
        for (i, item) in input.iter().enumerate() {
            let Some(item) = item else { continue };
            out.push_str(&escape_literal(item.as_ref())?);
            if i + 1 < input.len() {
                out.push_str(separator);
            }
        }
        Ok(self.append_raw(&out))
    }

    // ==================== Binding ====================

    /// Bind one value, raw-appending its placeholder.
    ///
    /// [`Bind::Null`] appends `NULL` and [`Bind::Default`] appends `DEFAULT`;
    /// neither touches `values`. A value appends `$N` with
    /// `N = values.len() + 1` and is then pushed.
    pub fn bind_value(&mut self, value: impl Into<Bind<V>>) -> &mut Self {
        match value.into() {
            Bind::Null => self.text.push_str("NULL"),
            Bind::Default => self.text.push_str("DEFAULT"),
            Bind::Value(v) => {
                let ix = self.values.len() + 1;
                self.text.push('$');
                self.text.push_str(&ix.to_string());
                self.values.push(v);
            }
        }
        self
    }

    /// Append `NULL` without binding a value.
    pub fn bind_null(&mut self) -> &mut Self {
        self.bind_value(Bind::Null)
    }

    /// Append `DEFAULT` without binding a value.
    pub fn bind_default(&mut self) -> &mut Self {
        self.bind_value(Bind::Default)
    }

    /// Bind every entry in order, joined by [`DEFAULT_SEPARATOR`].
    pub fn bind_values<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Bind<V>>,
    {
        self.bind_values_separated(values, DEFAULT_SEPARATOR)
    }

    /// Bind every entry in order, joined by `separator`.
    ///
    /// Each entry behaves exactly like [`bind_value`](QueryConfig::bind_value):
    /// sentinels take a slot in the rendered list but not in `values`. An
    /// empty input appends nothing.
    pub fn bind_values_separated<I>(&mut self, values: I, separator: &str) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Bind<V>>,
    {
        let mut iter = values.into_iter().peekable();
        while let Some(value) = iter.next() {
            self.bind_value(value);
            if iter.peek().is_some() {
                self.text.push_str(separator);
            }
        }
        self
    }

    // ==================== Checks ====================

    /// Check that every placeholder refers to an existing value.
    ///
    /// Composition never calls this; it exists for configs assembled by hand.
    pub fn validate(&self) -> ComposeResult<()> {
        let len = self.values.len();
        match placeholders(&self.text).find(|&ix| ix == 0 || ix > len) {
            Some(index) => Err(ComposeError::PlaceholderOutOfRange { index, values: len }),
            None => Ok(()),
        }
    }
}

impl<X> QueryConfig<Param, X> {
    /// Bind any `tokio-postgres` value.
    pub fn push_bind<T>(&mut self, value: T) -> &mut Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        self.bind_value(Param::new(value))
    }

    /// Bind `Some(value)`, or append `NULL` for `None`.
    pub fn push_bind_opt<T>(&mut self, value: Option<T>) -> &mut Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        self.bind_value(Bind::nullable(value.map(Param::new)))
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.iter().map(|p| p.as_ref()).collect()
    }
}

impl<V, X> fmt::Display for QueryConfig<V, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
