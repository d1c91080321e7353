//! Helpers for integers which span an arbitrary number of bits.

/// Produces a mask with the lowest `$bits` bits set.
///
/// Evaluates to `u64::MAX` for a full 64-bit mask instead of
/// overflowing the shift.
#[macro_export]
macro_rules! bitmask {
    ($bits:expr) => {{
        let bits = $bits as u32;
        if bits >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        }
    }};
}

/// Truncates `value` to its lowest `width` bits.
#[inline]
pub const fn truncate(value: u64, width: u32) -> u64 {
    value & bitmask!(width)
}

/// Extends the sign of the `width`-bit two's complement value
/// stored in the low bits of `value`.
///
/// Bits above `width` are ignored.
#[inline]
pub const fn sign_extend(value: u64, width: u32) -> i64 {
    debug_assert!(0 < width && width <= u64::BITS);

    let shift = u64::BITS - width;
    ((value << shift) as i64) >> shift
}

/// Strips the sign of `value` into a `width`-bit two's complement
/// representation.
///
/// This is the inverse of [`sign_extend`] for every value that fits
/// into `width` bits. Larger magnitudes are truncated like an `as` cast.
#[inline]
pub const fn sign_unextend(value: i64, width: u32) -> u64 {
    truncate(value as u64, width)
}
