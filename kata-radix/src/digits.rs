//! Signed decimal digit extraction.

/// Signed integer that can be taken apart into decimal digits.
///
/// Digits carry the sign of the value: a negative integer yields digits in
/// `-9..=0`, a non-negative one digits in `0..=9`. That keeps every digit of
/// a number in a single 19-slot range and lets one bucket order (most
/// negative digit first) sort both halves of the number line.
///
/// # Example
///
/// ```
/// use kata_radix::SignedDigits;
///
/// assert_eq!(1594i32.digit(1), 9);
/// assert_eq!((-19i32).digit(1), -1);
/// assert_eq!(1594i32.decimal_digits(), 4);
/// assert_eq!(0i32.decimal_digits(), 0);
/// ```
pub trait SignedDigits: Copy + Ord {
    /// Digit at decimal `place` (0 = ones), in `-9..=9`.
    ///
    /// Places beyond the magnitude of the value, including ones whose power
    /// of ten does not fit the type, yield 0.
    fn digit(self, place: u32) -> i8;

    /// Number of decimal digits in the magnitude. Zero has none.
    fn decimal_digits(self) -> u32;
}

macro_rules! impl_signed_digits {
    ($($ty:ty),*) => {
        $(
            impl SignedDigits for $ty {
                #[inline]
                fn digit(self, place: u32) -> i8 {
                    // Division truncates toward zero, and `%` keeps the sign
                    // of the dividend.
                    match (10 as $ty).checked_pow(place) {
                        Some(scale) => ((self / scale) % 10) as i8,
                        None => 0,
                    }
                }

                #[inline]
                fn decimal_digits(self) -> u32 {
                    let magnitude = self.unsigned_abs();
                    if magnitude == 0 { 0 } else { magnitude.ilog10() + 1 }
                }
            }
        )*
    };
}

impl_signed_digits!(i8, i16, i32, i64, i128, isize);

/// Digit of `value` at decimal `place`. See [`SignedDigits::digit`].
#[inline]
pub fn digit<N: SignedDigits>(value: N, place: u32) -> i8 {
    value.digit(place)
}

/// Decimal digit count of `value`'s magnitude. See
/// [`SignedDigits::decimal_digits`].
#[inline]
pub fn decimal_digits<N: SignedDigits>(value: N) -> u32 {
    value.decimal_digits()
}
