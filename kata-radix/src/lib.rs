//! Stable least-significant-digit radix sort for signed integers.
//!
//! Values are sorted by decimal digit, ones place first, distributing each
//! pass into 19 buckets, one per signed digit:
//!
//! ```text
//! digit:   -9  -8  ...  -1   0   1  ...   8   9
//! slot:     0   1  ...   8   9  10  ...  17  18
//! ```
//!
//! Negative values have non-positive digits (`-19` is `-1` tens, `-9`
//! ones), so a single ascending slot order handles both signs without a
//! separate pass or bias. Buckets keep insertion order, which makes every
//! pass, and therefore the whole sort, stable.
//!
//! # Quick Start
//!
//! ```
//! use kata_radix::{radix_sort, radix_sorted};
//!
//! let mut values = vec![123, -456, 789, 0, -1];
//! radix_sort(&mut values);
//! assert_eq!(values, vec![-456, -1, 0, 123, 789]);
//!
//! assert_eq!(radix_sorted(vec![7i64, 304, 43, 21]), vec![7, 21, 43, 304]);
//! ```
//!
//! # Sorting records
//!
//! [`radix_sort_by_key`] sorts arbitrary records by an integer key. Equal
//! keys keep input order:
//!
//! ```
//! use kata_radix::radix_sort_by_key;
//!
//! let mut fills = vec![("x", 10), ("y", -2), ("z", 10)];
//! radix_sort_by_key(&mut fills, |&(_, px)| px);
//! assert_eq!(fills, vec![("y", -2), ("x", 10), ("z", 10)]);
//! ```
//!
//! # Supported types
//!
//! [`SignedDigits`] is implemented for `i8`, `i16`, `i32`, `i64`, `i128`
//! and `isize`. `MIN` values are handled.
//!
//! Pass progress is reported through the `log` facade (`debug` per sort,
//! `trace` per pass).

#![warn(missing_docs)]

mod bucket;
mod digits;
mod sort;

pub use bucket::{BUCKET_COUNT, DigitBuckets};
pub use digits::{SignedDigits, decimal_digits, digit};
pub use sort::{pass_count, radix_sort, radix_sort_by_key, radix_sorted};
