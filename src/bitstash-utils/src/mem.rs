//! Utilities for size and alignment calculations.

/// Aligns `value` up to the next multiple of `align`.
///
/// `align` must be a power of two.
#[inline]
pub const fn align_up(value: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    (value + align - 1) & !(align - 1)
}

/// Aligns `value` down to the previous multiple of `align`.
///
/// `align` must be a power of two.
#[inline]
pub const fn align_down(value: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    value & !(align - 1)
}

/// Gets the number of whole bytes needed to hold `bits` bits.
#[inline]
pub const fn bytes_for_bits(bits: usize) -> usize {
    align_up(bits, u8::BITS as usize) / u8::BITS as usize
}
