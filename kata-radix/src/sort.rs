//! LSD radix sort over signed decimal digits.
//!
//! Each pass distributes the input into [`DigitBuckets`] by the digit at one
//! decimal place, ones first, then concatenates the buckets. Passes run for
//! as many places as the widest magnitude in the input has digits; shorter
//! values read as 0 on the extra places and hold their relative position.

use log::{debug, trace};

use crate::{DigitBuckets, SignedDigits};

/// Number of distribution passes needed to sort `values`.
///
/// The decimal digit count of the largest magnitude. Zero for an empty or
/// all-zero input.
///
/// ```
/// use kata_radix::pass_count;
///
/// assert_eq!(pass_count(&[7, 304, 43, 21]), 3);
/// assert_eq!(pass_count(&[0, 0]), 0);
/// assert_eq!(pass_count::<i32>(&[]), 0);
/// ```
pub fn pass_count<N: SignedDigits>(values: &[N]) -> u32 {
    values
        .iter()
        .map(|value| value.decimal_digits())
        .max()
        .unwrap_or(0)
}

/// Sorts `values` ascending, in place.
///
/// Stable, O(n * d) for `d` decimal digits in the largest magnitude, with
/// O(n) scratch space.
///
/// ```
/// use kata_radix::radix_sort;
///
/// let mut values = [123, -456, 789, 0, -1];
/// radix_sort(&mut values);
/// assert_eq!(values, [-456, -1, 0, 123, 789]);
/// ```
pub fn radix_sort<N: SignedDigits>(values: &mut [N]) {
    if values.len() < 2 {
        return;
    }

    let mut scratch = values.to_vec();
    radix_sort_by_key(&mut scratch, |&value| value);
    values.copy_from_slice(&scratch);
}

/// Sorts `values` ascending and returns them.
///
/// ```
/// use kata_radix::radix_sorted;
///
/// assert_eq!(radix_sorted(vec![7, 304, 43, 21]), vec![7, 21, 43, 304]);
/// ```
pub fn radix_sorted<N: SignedDigits>(mut values: Vec<N>) -> Vec<N> {
    radix_sort_by_key(&mut values, |&value| value);
    values
}

/// Stably sorts `values` by the integer `key` extracts.
///
/// Records with equal keys keep their input order. `key` is called once
/// per record per pass, plus once per record to size the pass count.
///
/// ```
/// use kata_radix::radix_sort_by_key;
///
/// let mut orders = vec![("b", 20), ("a", -5), ("c", 20), ("d", 3)];
/// radix_sort_by_key(&mut orders, |&(_, qty)| qty);
/// assert_eq!(orders, vec![("a", -5), ("d", 3), ("b", 20), ("c", 20)]);
/// ```
pub fn radix_sort_by_key<T, N, F>(values: &mut Vec<T>, mut key: F)
where
    N: SignedDigits,
    F: FnMut(&T) -> N,
{
    if values.len() < 2 {
        return;
    }

    let passes = values
        .iter()
        .map(|value| key(value).decimal_digits())
        .max()
        .unwrap_or(0);
    debug!("radix sort: {} elements, {} passes", values.len(), passes);

    let mut buckets = DigitBuckets::new();
    for place in 0..passes {
        trace!("pass {}: distributing {} elements", place, values.len());
        for value in values.drain(..) {
            let digit = key(&value).digit(place);
            buckets.push(digit, value);
        }
        buckets.drain_into(values);
    }
}
