//! Quoting primitives for identifiers and string literals.
//!
//! - Identifiers are wrapped in `"` with embedded `"` doubled.
//! - Literals are wrapped in `'` with embedded `'` doubled. A literal that
//!   contains a backslash doubles it and uses the `E'...'` escape string form.
//!
//! Both reject input containing a NUL character, which Postgres cannot store
//! in identifiers or text.

use crate::error::{ComposeError, ComposeResult};

/// Quote a single identifier segment.
///
/// The input is not split on `.`; see
/// [`QueryConfig::append_identifier`](crate::QueryConfig::append_identifier)
/// for schema-qualified names.
pub fn escape_identifier(ident: &str) -> ComposeResult<String> {
    if ident.contains('\0') {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "pg_query_config", "rejected identifier containing NUL");
        return Err(ComposeError::invalid_identifier(
            "Identifier cannot contain NUL character",
        ));
    }

    let mut out = String::with_capacity(ident.len() + 2);
    out.push('"');
    for ch in ident.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    Ok(out)
}

/// Quote a string as a SQL literal.
pub fn escape_literal(input: &str) -> ComposeResult<String> {
    if input.contains('\0') {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "pg_query_config", "rejected literal containing NUL");
        return Err(ComposeError::invalid_literal(
            "Literal cannot contain NUL character",
        ));
    }

    let mut has_backslash = false;
    // 'E' + quotes
    let mut out = String::with_capacity(input.len() + 3);
    out.push('\'');
    for ch in input.chars() {
        match ch {
            '\'' => out.push('\''),
            '\\' => {
                out.push('\\');
                has_backslash = true;
            }
            _ => {}
        }
        out.push(ch);
    }
    out.push('\'');

    if has_backslash {
        out.insert(0, 'E');
    }
    Ok(out)
}
