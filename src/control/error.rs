//! Error types for container access.
//!
//! Reading the payload of the wrong variant outside of `match_with` is a
//! programmer error. The unchecked accessors panic with a [`VariantError`]
//! message; the checked accessors return it.

/// The variants a container can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `Maybe::Some`.
    Some,
    /// `Maybe::None`.
    None,
    /// `Either::Left`.
    Left,
    /// `Either::Right`.
    Right,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Some => "Some",
            Self::None => "None",
            Self::Left => "Left",
            Self::Right => "Right",
        };
        formatter.write_str(name)
    }
}

/// Represents an attempt to read a payload from the wrong variant.
///
/// # Examples
///
/// ```rust
/// use railcar::control::{Variant, VariantError};
///
/// let error = VariantError {
///     container: "Either",
///     method_name: "unwrap_right",
///     found: Variant::Left,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "called `Either::unwrap_right()` on a `Left` value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantError {
    /// The container type that was accessed.
    pub container: &'static str,
    /// The accessor that was called.
    pub method_name: &'static str,
    /// The variant the container actually held.
    pub found: Variant,
}

impl VariantError {
    pub(crate) const fn new(
        container: &'static str,
        method_name: &'static str,
        found: Variant,
    ) -> Self {
        Self {
            container,
            method_name,
            found,
        }
    }
}

impl std::fmt::Display for VariantError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "called `{}::{}()` on a `{}` value",
            self.container, self.method_name, self.found
        )
    }
}

impl std::error::Error for VariantError {}
