//! Shared rendering of the bracketed space-separated sequence form.

use std::fmt::{self, Display, Formatter, Write};

/// Writes `items` as `[e1 e2 e3]`.
///
/// All container `Display` implementations delegate here so the format cannot drift.
pub(crate) fn write_sequence<'i, T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display + 'i,
    I: IntoIterator<Item = &'i T>,
{
    f.write_char('[')?;
    for (position, item) in items.into_iter().enumerate() {
        if position != 0 {
            f.write_char(' ')?;
        }
        Display::fmt(item, f)?;
    }
    f.write_char(']')
}
