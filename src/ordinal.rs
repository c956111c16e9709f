//! Fixed-point ordinal encoding.
//!
//! GP stores sequence positions that allow fractional insertion (sales line
//! item sequences, serial/lot sequences) as integers scaled by 16384. Line 1 is
//! stored as `16384`, a line inserted between lines 1 and 2 as `24576`, and so on.
//!
//! Both directions use exact decimal arithmetic. Encoding rounds the scaled
//! product to the nearest integer, ties to even, so any value that is an integer
//! multiple of `1 / scale` round-trips exactly.
//!
//! ```rust
//! use gp10::ordinal::{decode, encode, OrdinalValue};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(encode("2.5").unwrap(), 40960);
//! assert_eq!(decode(16384), 1i64);
//! assert_eq!(decode(24576), Decimal::new(15, 1));
//! assert!(matches!(decode(0), OrdinalValue::Whole(0)));
//! ```

use crate::error::{GpError, GpResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;

/// Scale factor used by every ordinal column in the GP 10 schema.
pub const DEFAULT_SCALE: u32 = 16384;

const DEFAULT_SCALE_NONZERO: NonZeroU32 = match NonZeroU32::new(DEFAULT_SCALE) {
    Some(scale) => scale,
    None => panic!("ordinal scale must be non-zero"),
};

/// Encode a value with the default scale.
///
/// # Errors
///
/// Returns [`GpError::InvalidOrdinalValue`] if the input is not an exact decimal
/// or the scaled value does not fit in an `i64`.
pub fn encode<V: OrdinalInput>(value: V) -> GpResult<i64> {
    OrdinalCodec::default().encode(value)
}

/// Decode a stored integer with the default scale.
pub fn decode(stored: i64) -> OrdinalValue {
    OrdinalCodec::default().decode(stored)
}

/// Encoder/decoder bound to a scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalCodec {
    scale: NonZeroU32,
}

impl Default for OrdinalCodec {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE_NONZERO,
        }
    }
}

impl OrdinalCodec {
    /// Create a codec with a non-default scale factor.
    pub fn with_scale(scale: NonZeroU32) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> u32 {
        self.scale.get()
    }

    /// `round_half_even(value * scale)`
    ///
    /// # Errors
    ///
    /// Returns [`GpError::InvalidOrdinalValue`] if the input cannot be read as an
    /// exact decimal or the product overflows.
    pub fn encode<V: OrdinalInput>(&self, value: V) -> GpResult<i64> {
        let value = value.into_ordinal_decimal()?;
        let scaled = value
            .checked_mul(Decimal::from(self.scale.get()))
            .ok_or_else(|| {
                GpError::InvalidOrdinalValue(format!("{value} overflows at scale {}", self.scale))
            })?;
        scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_i64()
            .ok_or_else(|| {
                GpError::InvalidOrdinalValue(format!(
                    "{value} does not fit a 64-bit ordinal at scale {}",
                    self.scale
                ))
            })
    }

    /// `stored / scale`, as a whole number when there is no fractional part.
    pub fn decode(&self, stored: i64) -> OrdinalValue {
        // |stored| < 2^63 and scale <= 2^32 keeps the quotient well inside the
        // 96-bit mantissa, and a power-of-two divisor always terminates.
        let quotient = Decimal::from(stored) / Decimal::from(self.scale.get());
        OrdinalValue::from(quotient)
    }
}

/// A decoded ordinal.
///
/// Whole positions are kept as integers so that a decoded `1` is
/// indistinguishable from the integer `1`; other positions keep their exact
/// decimal value.
#[derive(Debug, Clone, Copy)]
pub enum OrdinalValue {
    Whole(i64),
    Fraction(Decimal),
}

impl OrdinalValue {
    pub const ZERO: OrdinalValue = OrdinalValue::Whole(0);

    pub fn to_decimal(&self) -> Decimal {
        match *self {
            OrdinalValue::Whole(n) => Decimal::from(n),
            OrdinalValue::Fraction(d) => d,
        }
    }

    pub fn is_whole(&self) -> bool {
        matches!(self, OrdinalValue::Whole(_))
    }
}

impl Default for OrdinalValue {
    fn default() -> Self {
        OrdinalValue::ZERO
    }
}

impl From<Decimal> for OrdinalValue {
    fn from(value: Decimal) -> Self {
        let value = value.normalize();
        if value.fract().is_zero() {
            if let Some(n) = value.to_i64() {
                return OrdinalValue::Whole(n);
            }
        }
        OrdinalValue::Fraction(value)
    }
}

impl From<i64> for OrdinalValue {
    fn from(value: i64) -> Self {
        OrdinalValue::Whole(value)
    }
}

impl From<i32> for OrdinalValue {
    fn from(value: i32) -> Self {
        OrdinalValue::Whole(i64::from(value))
    }
}

impl PartialEq for OrdinalValue {
    fn eq(&self, other: &Self) -> bool {
        self.to_decimal() == other.to_decimal()
    }
}

impl PartialEq<i64> for OrdinalValue {
    fn eq(&self, other: &i64) -> bool {
        self.to_decimal() == Decimal::from(*other)
    }
}

impl PartialEq<Decimal> for OrdinalValue {
    fn eq(&self, other: &Decimal) -> bool {
        self.to_decimal() == *other
    }
}

impl PartialOrd for OrdinalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_decimal().partial_cmp(&other.to_decimal())
    }
}

impl fmt::Display for OrdinalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrdinalValue::Whole(n) => write!(f, "{n}"),
            OrdinalValue::Fraction(d) => write!(f, "{d}"),
        }
    }
}

/// Values accepted by [`OrdinalCodec::encode`].
///
/// Strings are parsed as exact decimals; anything that would need rounding to
/// fit a `Decimal` is rejected rather than approximated.
pub trait OrdinalInput {
    fn into_ordinal_decimal(self) -> GpResult<Decimal>;
}

impl OrdinalInput for Decimal {
    fn into_ordinal_decimal(self) -> GpResult<Decimal> {
        Ok(self)
    }
}

impl OrdinalInput for &str {
    fn into_ordinal_decimal(self) -> GpResult<Decimal> {
        Decimal::from_str_exact(self.trim())
            .map_err(|e| GpError::InvalidOrdinalValue(format!("{self:?}: {e}")))
    }
}

impl OrdinalInput for String {
    fn into_ordinal_decimal(self) -> GpResult<Decimal> {
        self.as_str().into_ordinal_decimal()
    }
}

impl OrdinalInput for &String {
    fn into_ordinal_decimal(self) -> GpResult<Decimal> {
        self.as_str().into_ordinal_decimal()
    }
}

impl OrdinalInput for i32 {
    fn into_ordinal_decimal(self) -> GpResult<Decimal> {
        Ok(Decimal::from(self))
    }
}

impl OrdinalInput for i64 {
    fn into_ordinal_decimal(self) -> GpResult<Decimal> {
        Ok(Decimal::from(self))
    }
}

impl OrdinalInput for OrdinalValue {
    fn into_ordinal_decimal(self) -> GpResult<Decimal> {
        Ok(self.to_decimal())
    }
}

impl OrdinalInput for &OrdinalValue {
    fn into_ordinal_decimal(self) -> GpResult<Decimal> {
        Ok(self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(encode(Decimal::ZERO).unwrap(), 0);
        let zero = decode(0);
        assert!(matches!(zero, OrdinalValue::Whole(0)));
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn test_whole_numbers_decode_as_integers() {
        let one = decode(16384);
        assert!(matches!(one, OrdinalValue::Whole(1)));
        assert_eq!(one, 1);
        assert_eq!(decode(16384 * 7), 7i64);
        assert_eq!(decode(-16384 * 3), -3i64);
    }

    #[test]
    fn test_fractions_decode_exactly() {
        let v = decode(24576);
        assert!(!v.is_whole());
        assert_eq!(v, dec("1.5"));
        assert_eq!(v.to_string(), "1.5");
        assert_eq!(decode(1), dec("0.00006103515625"));
    }

    #[test]
    fn test_string_input_matches_decimal_input() {
        assert_eq!(encode("2.5").unwrap(), encode(dec("2.5")).unwrap());
        assert_eq!(encode(" 2.5 ").unwrap(), 40960);
        assert_eq!(encode(String::from("-0.25")).unwrap(), -4096);
    }

    #[test]
    fn test_integer_input() {
        assert_eq!(encode(3i32).unwrap(), 49152);
        assert_eq!(encode(-1i64).unwrap(), -16384);
    }

    #[test]
    fn test_invalid_strings_rejected() {
        for bad in ["", "abc", "1.2.3", "1e5x"] {
            let err = encode(bad).unwrap_err();
            assert!(matches!(err, GpError::InvalidOrdinalValue(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_overflow_rejected() {
        let err = encode(Decimal::MAX).unwrap_err();
        assert!(matches!(err, GpError::InvalidOrdinalValue(_)));
    }

    #[test]
    fn test_round_half_even() {
        // 1/32768 scales to exactly 0.5, 3/32768 to exactly 1.5
        assert_eq!(encode(dec("0.000030517578125")).unwrap(), 0);
        assert_eq!(encode(dec("0.000091552734375")).unwrap(), 2);
        assert_eq!(encode(dec("-0.000030517578125")).unwrap(), 0);
        // 0.00001 * 16384 = 0.16384 rounds down to 0
        assert_eq!(encode(dec("0.00001")).unwrap(), 0);
    }

    #[test]
    fn test_round_trip_representable_values() {
        for s in ["0", "1", "1.5", "2.25", "0.0625", "1000.125", "-1.5", "-0.25", "-42"] {
            let v = dec(s);
            assert_eq!(decode(encode(v).unwrap()), v, "round trip of {s}");
        }
    }

    #[test]
    fn test_round_trip_from_stored_side() {
        for stored in [-40960i64, -1, 0, 1, 8192, 16384, 24576, 1_000_000_007] {
            assert_eq!(encode(decode(stored)).unwrap(), stored);
        }
    }

    #[test]
    fn test_custom_scale() {
        let codec = OrdinalCodec::with_scale(NonZeroU32::new(100).unwrap());
        assert_eq!(codec.scale(), 100);
        assert_eq!(codec.encode("1.25").unwrap(), 125);
        assert_eq!(codec.decode(250), dec("2.5"));
        assert_eq!(OrdinalCodec::default().scale(), DEFAULT_SCALE);
    }

    #[test]
    fn test_ordinal_value_from_decimal_normalizes() {
        assert!(matches!(OrdinalValue::from(dec("2.000")), OrdinalValue::Whole(2)));
        assert_eq!(OrdinalValue::from(dec("2.50")), dec("2.5"));
        assert!(OrdinalValue::from(1i32) < OrdinalValue::from(dec("1.5")));
    }
}
