//! Two-level lookup table with default keys.

type Row<V> = (&'static str, &'static [(&'static str, V)]);

/// Read-only mapping from an outer key to an inner key to a value.
///
/// Entries keep their declaration order so forms can list choices the same
/// way the table defines them. Unknown keys are replaced by the default keys,
/// which are the first outer and first inner key unless set explicitly.
#[derive(Debug)]
pub struct NestedTable<V: 'static> {
    rows: &'static [Row<V>],
    default_outer: usize,
    default_inner: &'static str,
}

impl<V: 'static> NestedTable<V> {
    /// Wrap a static row list. Rows and cells must be non-empty.
    pub const fn new(rows: &'static [Row<V>]) -> Self {
        assert!(!rows.is_empty(), "lookup table needs at least one row");
        let mut i = 0;
        while i < rows.len() {
            assert!(!rows[i].1.is_empty(), "lookup row needs at least one cell");
            i += 1;
        }
        Self {
            rows,
            default_outer: 0,
            default_inner: rows[0].1[0].0,
        }
    }

    /// Use the row at `index` as the outer default.
    pub const fn default_row(mut self, index: usize) -> Self {
        assert!(index < self.rows.len(), "default row out of range");
        self.default_outer = index;
        self
    }

    /// Use `key` as the inner default.
    pub const fn default_column(mut self, key: &'static str) -> Self {
        self.default_inner = key;
        self
    }

    fn default_row_ref(&self) -> &Row<V> {
        &self.rows[self.default_outer]
    }

    /// Outer keys in declaration order
    pub fn outer_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.iter().map(|(key, _)| *key)
    }

    /// Inner keys of the default row, in declaration order
    pub fn inner_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.default_row_ref().1.iter().map(|(key, _)| *key)
    }

    pub fn default_outer(&self) -> &'static str {
        self.default_row_ref().0
    }

    pub fn default_inner(&self) -> &'static str {
        self.default_inner
    }

    /// Look up `(outer, inner)`, substituting the default key at each level
    /// that does not match.
    pub fn get(&self, outer: &str, inner: &str) -> &V {
        let (_, cells) = self
            .rows
            .iter()
            .find(|(key, _)| *key == outer)
            .unwrap_or_else(|| self.default_row_ref());

        let default_inner = self.default_inner;
        cells
            .iter()
            .find(|(key, _)| *key == inner)
            .or_else(|| cells.iter().find(|(key, _)| *key == default_inner))
            .map(|(_, value)| value)
            .unwrap_or(&cells[0].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: NestedTable<&str> = NestedTable::new(&[
        ("a", &[("x", "ax"), ("y", "ay")]),
        ("b", &[("x", "bx"), ("y", "by")]),
    ]);

    #[test]
    fn test_exact_match() {
        assert_eq!(*SAMPLE.get("b", "y"), "by");
    }

    #[test]
    fn test_unknown_outer_uses_first_row() {
        assert_eq!(*SAMPLE.get("zzz", "y"), "ay");
    }

    #[test]
    fn test_unknown_inner_uses_default_inner() {
        assert_eq!(*SAMPLE.get("b", "zzz"), "bx");
    }

    #[test]
    fn test_both_unknown() {
        assert_eq!(*SAMPLE.get("", ""), "ax");
    }

    static WITH_DEFAULTS: NestedTable<&str> = NestedTable::new(&[
        ("a", &[("x", "ax"), ("y", "ay")]),
        ("b", &[("x", "bx"), ("y", "by")]),
    ])
    .default_row(1)
    .default_column("y");

    #[test]
    fn test_explicit_defaults() {
        assert_eq!(WITH_DEFAULTS.default_outer(), "b");
        assert_eq!(WITH_DEFAULTS.default_inner(), "y");
        assert_eq!(*WITH_DEFAULTS.get("?", "?"), "by");
        assert_eq!(*WITH_DEFAULTS.get("a", "?"), "ay");
        assert_eq!(*WITH_DEFAULTS.get("?", "x"), "bx");
    }

    #[test]
    #[should_panic(expected = "lookup row needs at least one cell")]
    fn test_empty_later_row_is_rejected() {
        let _ = NestedTable::<&str>::new(&[("a", &[("x", "ax")]), ("b", &[])]);
    }

    #[test]
    fn test_keys_keep_order() {
        assert_eq!(SAMPLE.outer_keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(SAMPLE.inner_keys().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(SAMPLE.default_outer(), "a");
        assert_eq!(SAMPLE.default_inner(), "x");
    }
}
