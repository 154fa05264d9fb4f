//! Positional placeholder (`$1`, `$2`, ...) scanning and renumbering.
//!
//! The scan is purely textual: every `$` followed by one or more digits is
//! treated as a placeholder, including sequences inside string literals or
//! dollar-quoted bodies. Fragments that contain such sequences outside of
//! placeholder position are rewritten too.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE
        .get_or_init(|| Regex::new(r"\$(\d+)").expect("invalid built-in placeholder regex"))
}

/// Shift every placeholder in `text` by `offset`.
///
/// `$N` becomes `$(N + offset)`. A digit run that does not fit in `usize`
/// (or overflows after shifting) is left as written.
pub fn renumber(text: &str, offset: usize) -> Cow<'_, str> {
    if offset == 0 {
        return Cow::Borrowed(text);
    }

    placeholder_re().replace_all(text, |caps: &Captures<'_>| {
        match caps[1].parse::<usize>().ok().and_then(|n| n.checked_add(offset)) {
            Some(n) => format!("${n}"),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "pg_query_config",
                    token = &caps[0],
                    offset,
                    "placeholder left unshifted"
                );
                caps[0].to_string()
            }
        }
    })
}

/// Iterate the indices of all placeholders in `text`, in order of appearance.
///
/// Digit runs that do not fit in `usize` saturate to `usize::MAX`.
pub fn placeholders(text: &str) -> impl Iterator<Item = usize> + '_ {
    placeholder_re()
        .captures_iter(text)
        .map(|caps| caps[1].parse::<usize>().unwrap_or(usize::MAX))
}

/// Highest placeholder index referenced by `text`, if any.
pub fn max_placeholder(text: &str) -> Option<usize> {
    placeholders(text).max()
}
