//! Signed-digit buckets for one distribution pass.

/// Number of distinct signed decimal digits, `-9..=9`.
pub const BUCKET_COUNT: usize = 19;

/// Added to a digit to get its slot.
const DIGIT_OFFSET: i8 = 9;

/// 19 ordered slots, one per signed digit.
///
/// Slot 0 holds digit -9, slot 9 digit 0, slot 18 digit +9. Items keep
/// their push order within a slot, so draining slots in order yields a
/// sequence stably ordered by digit.
///
/// Slot allocations survive [`drain_into`](Self::drain_into) and are
/// reused by the next pass.
///
/// # Example
///
/// ```
/// use kata_radix::DigitBuckets;
///
/// let mut buckets = DigitBuckets::new();
/// buckets.push(3, "a");
/// buckets.push(-1, "b");
/// buckets.push(3, "c");
///
/// let mut out = Vec::new();
/// buckets.drain_into(&mut out);
/// assert_eq!(out, vec!["b", "a", "c"]);
/// assert!(buckets.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DigitBuckets<T> {
    slots: [Vec<T>; BUCKET_COUNT],
}

impl<T> Default for DigitBuckets<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DigitBuckets<T> {
    /// Creates 19 empty slots.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Vec::new()),
        }
    }

    /// Appends `item` to the slot for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is outside `-9..=9`.
    #[inline]
    pub fn push(&mut self, digit: i8, item: T) {
        let slot = slot_of(digit).expect("digit outside -9..=9");
        self.slots[slot].push(item);
    }

    /// Returns the items currently held for `digit`, in push order.
    ///
    /// Returns `None` if `digit` is outside `-9..=9`.
    pub fn bucket(&self, digit: i8) -> Option<&[T]> {
        slot_of(digit).map(|slot| self.slots[slot].as_slice())
    }

    /// Total number of items across all slots.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Returns `true` if every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Moves every item into `out`, slot 0 first.
    pub fn drain_into(&mut self, out: &mut Vec<T>) {
        out.reserve(self.len());
        for slot in &mut self.slots {
            out.append(slot);
        }
    }
}

#[inline]
fn slot_of(digit: i8) -> Option<usize> {
    if (-DIGIT_OFFSET..=DIGIT_OFFSET).contains(&digit) {
        Some((digit + DIGIT_OFFSET) as usize)
    } else {
        None
    }
}
