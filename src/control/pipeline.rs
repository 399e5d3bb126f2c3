//! Pipeline combinators for arbitrary values.
//!
//! [`Pipeline`] is implemented for every sized type, so any value can be
//! threaded through a chain of transformations and side effects:
//!
//! ```rust
//! use railcar::control::Pipeline;
//!
//! let registrations = Vec::new()
//!     .tee_mut(|services: &mut Vec<&str>| services.push("cache"))
//!     .tee_mut(|services| services.push("client"))
//!     .pipe(|services| services.join(","));
//! assert_eq!(registrations, "cache,client");
//! ```
//!
//! `Maybe` and `Either` have their own inherent `tee`, which only runs on
//! the present/right payload and takes precedence over [`Pipeline::tee`].

/// Extension methods for threading any value through a pipeline.
pub trait Pipeline: Sized {
    /// Passes `self` to `function` and returns its result.
    #[inline]
    fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }

    /// Runs `action` on a reference to `self`, then returns `self`.
    #[inline]
    #[must_use]
    fn tee<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }

    /// Runs `action` on a mutable reference to `self`, then returns `self`.
    ///
    /// Useful for builders whose configuration methods take `&mut self`.
    #[inline]
    #[must_use]
    fn tee_mut<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        action(&mut self);
        self
    }
}

impl<T> Pipeline for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pipe_applies_function() {
        assert_eq!(20_i32.pipe(|x| x + 1), 21);
    }

    #[rstest]
    fn tee_returns_original_value() {
        let mut observed = None;
        let value = "abc".to_string().tee(|s| observed = Some(s.len()));
        assert_eq!(value, "abc");
        assert_eq!(observed, Some(3));
    }

    #[rstest]
    fn tee_mut_mutates_in_place() {
        let value = vec![1].tee_mut(|v| v.push(2)).tee_mut(|v| v.push(3));
        assert_eq!(value, vec![1, 2, 3]);
    }
}
