use super::builder::QueryConfig;
use crate::overlay::Overlay;
use crate::placeholder::renumber;

impl<V, X> QueryConfig<V, X> {
    /// Append another config in place, shifting its placeholders past ours.
    ///
    /// With `k = self.values.len()`, every `$N` in `ext.text` becomes `$(N + k)`.
    /// The shifted text is joined with the [`append_text`](QueryConfig::append_text)
    /// rule and `ext.values` are appended in order. `name` and `extra` of `self`
    /// are kept; `ext` is only read.
    pub fn append_query_config<Y>(&mut self, ext: &QueryConfig<V, Y>) -> &mut Self
    where
        V: Clone,
    {
        let offset = self.values.len();
        let shifted = renumber(&ext.text, offset);
        self.append_text(&shifted);
        self.values.extend(ext.values.iter().cloned());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "pg_query_config",
            offset,
            ext_values = ext.values.len(),
            values = self.values.len(),
            "appended query config"
        );
        self
    }

    /// Combine two configs into a new one, leaving both untouched.
    ///
    /// Unlike [`append_query_config`](QueryConfig::append_query_config) the
    /// texts are always joined with exactly one space, even if `self.text`
    /// already ends in whitespace. Placeholders of `ext` are shifted by
    /// `self.values.len()`, `name` comes from `self`, and `extra` is
    /// `self.extra` overlaid with `ext.extra`.
    pub fn merge(&self, ext: &Self) -> Self
    where
        V: Clone,
        X: Overlay,
    {
        let offset = self.values.len();
        let shifted = renumber(&ext.text, offset);

        let mut text = String::with_capacity(self.text.len() + 1 + shifted.len());
        text.push_str(&self.text);
        text.push(' ');
        text.push_str(&shifted);

        let mut values = Vec::with_capacity(self.values.len() + ext.values.len());
        values.extend_from_slice(&self.values);
        values.extend_from_slice(&ext.values);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "pg_query_config",
            offset,
            ext_values = ext.values.len(),
            values = values.len(),
            "merged query configs"
        );

        QueryConfig {
            text,
            values,
            name: self.name.clone(),
            extra: self.extra.overlay(&ext.extra),
        }
    }
}
