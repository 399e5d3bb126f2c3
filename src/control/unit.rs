//! Unit type - a value that carries no information.
//!
//! `Unit` is returned by operations that exist only for their side effects
//! (such as [`sequence::for_each`](crate::sequence::for_each)) so that they
//! still produce a value and remain composable.

use std::fmt;

/// The zero-information value.
///
/// All instances are interchangeable: they compare equal, hash identically,
/// and order as equal.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Unit;
///
/// assert_eq!(Unit::DEFAULT, Unit::default());
/// assert_eq!(Unit::from(()), Unit::DEFAULT);
/// assert_eq!(Unit::DEFAULT.to_string(), "()");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The single `Unit` value.
    pub const DEFAULT: Self = Self;
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn all_units_are_equal() {
        assert_eq!(Unit, Unit::DEFAULT);
        assert_eq!(Unit::default(), Unit::DEFAULT);
    }

    #[rstest]
    fn units_collapse_in_a_set() {
        let set: HashSet<Unit> = [Unit, Unit::default(), Unit::from(())].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn unit_displays_as_empty_tuple() {
        assert_eq!(format!("{Unit}"), "()");
    }
}
