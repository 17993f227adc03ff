// kata-sequence/src/error.rs

//! Error types for positional operations.

use core::fmt;

/// Position outside the range an operation accepts.
///
/// Carries the value that was not stored so the caller can recover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange<T> {
    /// The value handed back to the caller.
    pub value: T,
    /// Requested position.
    pub index: usize,
    /// Sequence length at the time of the request.
    pub len: usize,
}

impl<T> OutOfRange<T> {
    /// Returns the value that could not be stored.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for OutOfRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl<T: fmt::Debug> std::error::Error for OutOfRange<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_len() {
        let err = OutOfRange {
            value: "x",
            index: 9,
            len: 3,
        };
        assert_eq!(err.to_string(), "index 9 out of range for length 3");
        assert_eq!(err.into_inner(), "x");
    }
}
