//! # Legacy Numeric Compatibility
//!
//! Integer primitives that reproduce a legacy 32-bit runtime exactly.
//!
//! The universe was originally generated by a runtime whose `int` is a
//! two's-complement 32-bit value and whose `%` truncates toward zero. Every
//! existence test downstream compares hashes against that runtime, so the
//! emulation here must be bit-for-bit:
//!
//! - all intermediate arithmetic wraps at 32 bits
//! - signed reinterpretation maps `>= 2^31` to negative values
//! - the signed modulo is computed through a double-precision quotient
//!   truncated toward zero, so its sign follows the dividend
//!
//! Never replace [`legacy_mod`] with `%` or `rem_euclid`: `rem_euclid`
//! is floored and the native operator is only equivalent by accident of
//! the current implementation.
//!
//! ## Determinism Guarantee
//!
//! Every function here is total and pure. Same input, same output, on
//! any platform, any time.

/// Multiplier of the integer mixing function.
pub const HASH_MULTIPLIER: u32 = 0x27D4_EB2D;

/// Initial accumulator of [`hash_string`].
pub const STRING_HASH_SEED: u32 = 7;

/// Reduces any integer to its low 32 bits, unsigned.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn to_wrapped_u32(value: i64) -> u32 {
    value as u32
}

/// Reinterprets the low 32 bits of `value` as a two's-complement `i32`.
///
/// Values in `[2^31, 2^32)` become negative.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn to_legacy_i32(value: i64) -> i32 {
    to_wrapped_u32(value) as i32
}

/// Truncating modulo: `a - trunc(a / b) * b`.
///
/// The quotient goes through `f64` and is truncated toward zero, matching
/// the legacy runtime. The result carries the sign of `a`:
///
/// ```
/// use astrolabe_core::hash::legacy_mod;
///
/// assert_eq!(legacy_mod(-7, 3), -1);
/// assert_eq!(legacy_mod(7, -3), 1);
/// ```
///
/// A zero divisor yields `a` (the quotient saturates to zero) instead of
/// trapping.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn legacy_mod(a: i32, b: i32) -> i32 {
    let quotient = (f64::from(a) / f64::from(b)) as i32;
    a.wrapping_sub(quotient.wrapping_mul(b))
}

/// Integer mixing function over 32-bit unsigned values.
///
/// XOR/shift/multiply sequence; every step wraps at 32 bits. This is the
/// single primitive all higher-level hashing is built from.
#[inline]
#[must_use]
pub const fn hash_uint(value: u32) -> u32 {
    let mut a = (value ^ 61) ^ (value >> 16);
    a = a.wrapping_add(a << 3);
    a ^= a >> 4;
    a = a.wrapping_mul(HASH_MULTIPLIER);
    a ^= a >> 15;
    a
}

/// Folds bytes into an accumulator starting at [`STRING_HASH_SEED`].
///
/// Each byte is added (wrapping) and the sum is re-mixed with
/// [`hash_uint`], in natural order.
#[inline]
#[must_use]
pub const fn hash_bytes(bytes: &[u8]) -> u32 {
    let mut result = STRING_HASH_SEED;
    let mut i = 0;
    while i < bytes.len() {
        result = hash_uint(result.wrapping_add(bytes[i] as u32));
        i += 1;
    }
    result
}

/// Hashes the bytes of a string. See [`hash_bytes`].
#[inline]
#[must_use]
pub const fn hash_string(text: &str) -> u32 {
    hash_bytes(text.as_bytes())
}

/// Adds a salt (wrapping) and re-mixes.
#[inline]
#[must_use]
pub const fn salted(value: u32, salt: u32) -> u32 {
    hash_uint(value.wrapping_add(salt))
}

/// Seeds a 2-D tile from its coordinates and an external offset.
///
/// Computes `offset * width + height + i + j * width`, wraps it to 32 bits
/// and mixes it with [`hash_uint`]. `offset` is normally the signed hash of
/// the enclosing map's key (see [`to_legacy_i32`]).
#[inline]
#[must_use]
pub const fn hash_tile(i: i32, j: i32, width: i32, height: i32, offset: i32) -> u32 {
    let width = width as i64;
    let raw = (offset as i64)
        .wrapping_mul(width)
        .wrapping_add(height as i64)
        .wrapping_add(i as i64)
        .wrapping_add((j as i64).wrapping_mul(width));
    hash_uint(to_wrapped_u32(raw))
}
