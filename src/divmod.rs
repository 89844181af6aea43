//! Division engine: restoring shift-and-subtract on two-limb values.
//!
//! The quotient and remainder fall out of the same loop, so `/` and `%`
//! share one pass. Division by zero panics exactly like the native types.

use crate::i128::Int128;
use crate::u128::Uint128;

/// 10^19, the largest power of ten below 2^64. The decimal formatter
/// carves values into chunks of this size.
pub(crate) const POW10_19: u64 = 10_000_000_000_000_000_000;

/// Unsigned divmod: `n = q * d + r` with `0 <= r < d`.
///
/// After the trivial and single-limb fast paths, the divisor is aligned
/// with the dividend's most significant bit and walked back down one bit
/// per iteration, subtracting wherever it still fits.
pub(crate) fn udivmod(n: Uint128, d: Uint128) -> (Uint128, Uint128) {
    if d.is_zero() {
        panic!("attempt to divide by zero");
    }
    if n < d {
        return (Uint128::ZERO, n);
    }
    if n.h == 0 && d.h == 0 {
        return (Uint128::new(n.l / d.l, 0), Uint128::new(n.l % d.l, 0));
    }

    // n >= d > 0, so the alignment distance is non-negative and < 128.
    let mut s = d.leading_zeros() - n.leading_zeros();
    let mut d = d.wrapping_shl(s);
    let mut q = Uint128::ZERO;
    let mut r = n;
    loop {
        if r >= d {
            r = r - d;
            q = q | Uint128::ONE;
        }
        if s == 0 {
            break;
        }
        s -= 1;
        d = d >> 1;
        q = q << 1;
    }
    (q, r)
}

/// Signed divmod around the unsigned engine: the quotient truncates toward
/// zero (negated when the operand signs differ) and the remainder takes
/// the dividend's sign. `MIN / -1` wraps to `MIN` and `MIN % -1` is zero.
pub(crate) fn idivmod(n: Int128, d: Int128) -> (Int128, Int128) {
    let n_neg = n.is_negative();
    let d_neg = d.is_negative();
    let un = if n_neg { n.wrapping_neg() } else { n }.as_unsigned();
    let ud = if d_neg { d.wrapping_neg() } else { d }.as_unsigned();
    let (q, r) = udivmod(un, ud);
    let q = if n_neg != d_neg { q.wrapping_neg() } else { q };
    let r = if n_neg { r.wrapping_neg() } else { r };
    (q.as_signed(), r.as_signed())
}

/// Split into three chunks below 10^19 for decimal rendering, most
/// significant first. Two divmod passes through the engine above.
pub(crate) fn split_decimal(v: Uint128) -> (u64, u64, u64) {
    let ten19 = Uint128::new(POW10_19, 0);
    let (q, low) = udivmod(v, ten19);
    let (high, mid) = udivmod(q, ten19);
    (high.l, mid.l, low.l)
}
