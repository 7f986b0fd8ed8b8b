//! Named column access
//!
//! A `ColumnKey` maps a symbolic name to a stable column index so a line can
//! be subscripted by name instead of raw position. It is a lookup adapter
//! over the index-based API, not part of the line's invariants: keeping the
//! mapping in sync with the actual column layout is the caller's convention.

/// A stable mapping from a symbolic column name to a non-negative index
///
/// Typically implemented on a field-less enum whose discriminants mirror the
/// document's column layout:
///
/// ```rust
/// use csvdoc::{ColumnKey, CsvLine};
///
/// #[derive(Clone, Copy)]
/// enum StationColumn {
///     Id = 0,
///     Name = 1,
/// }
///
/// impl ColumnKey for StationColumn {
///     fn index(&self) -> usize {
///         *self as usize
///     }
/// }
///
/// let line = CsvLine::new(vec!["1001".into(), "Heathrow".into()]);
/// assert_eq!(line[StationColumn::Name], "Heathrow");
/// ```
pub trait ColumnKey {
    /// The column index this key resolves to
    fn index(&self) -> usize;
}

/// Raw indices are their own key, so one subscript impl covers both
/// positional and named access
impl ColumnKey for usize {
    fn index(&self) -> usize {
        *self
    }
}
