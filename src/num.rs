//! `num-traits` glue so generic numeric code can classify and convert the
//! two types: `Unsigned` marks `Uint128`, `Signed` marks `Int128`, and
//! the usual `Zero`/`One`/`Bounded`/`Num` plus the primitive-cast traits
//! round out the surface.

use std::iter::{Product, Sum};

use num_traits::{Bounded, FromPrimitive, Num, One, Signed, ToPrimitive, Unsigned, Zero};

use crate::i128::Int128;
use crate::literal::ParseError;
use crate::u128::Uint128;

/// 2^128 as a double; exact, since it is a power of two.
const TWO_POW_128: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;
/// 2^127 as a double.
const TWO_POW_127: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

// ============================================================================
// Uint128
// ============================================================================

impl Zero for Uint128 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Uint128::is_zero(self)
    }
}

impl One for Uint128 {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl Bounded for Uint128 {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl Num for Uint128 {
    type FromStrRadixErr = ParseError;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Uint128::from_str_radix(src, radix)
    }
}

impl Unsigned for Uint128 {}

impl ToPrimitive for Uint128 {
    fn to_i64(&self) -> Option<i64> {
        self.to_u128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        if self.h == 0 { Some(self.l) } else { None }
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|n| i128::try_from(n).ok())
    }

    fn to_u128(&self) -> Option<u128> {
        Some(Uint128::to_u128(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Uint128::to_f64(*self))
    }
}

impl FromPrimitive for Uint128 {
    fn from_i64(n: i64) -> Option<Self> {
        if n >= 0 { Some(Self::new(n as u64, 0)) } else { None }
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::new(n, 0))
    }

    fn from_i128(n: i128) -> Option<Self> {
        if n >= 0 {
            Some(Self::from_u128(n as u128))
        } else {
            None
        }
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from_u128(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        if n.is_finite() && n > -1.0 && n < TWO_POW_128 {
            Some(Self::from_f64(n))
        } else {
            None
        }
    }
}

// ============================================================================
// Int128
// ============================================================================

impl Zero for Int128 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Int128::is_zero(self)
    }
}

impl One for Int128 {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl Bounded for Int128 {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl Num for Int128 {
    type FromStrRadixErr = ParseError;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Int128::from_str_radix(src, radix)
    }
}

impl Signed for Int128 {
    #[inline]
    fn abs(&self) -> Self {
        Int128::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if *self <= *other {
            Self::ZERO
        } else {
            *self - *other
        }
    }

    #[inline]
    fn signum(&self) -> Self {
        Int128::signum(self)
    }

    #[inline]
    fn is_positive(&self) -> bool {
        Int128::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Int128::is_negative(self)
    }
}

impl ToPrimitive for Int128 {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        Some(Int128::to_i128(*self))
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_i128().and_then(|n| u128::try_from(n).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Int128::to_f64(*self))
    }
}

impl FromPrimitive for Int128 {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::new(n, 0))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from_i128(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        if n >> 127 == 0 {
            Some(Self::from_u128(n))
        } else {
            None
        }
    }

    fn from_f64(n: f64) -> Option<Self> {
        if n.is_finite() && n >= -TWO_POW_127 && n < TWO_POW_127 {
            Some(Self::from_f64(n))
        } else {
            None
        }
    }
}

// ============================================================================
// Iterator folds (wrapping, like the operators they use)
// ============================================================================

macro_rules! impl_fold_traits {
    ($($t:ty),+ $(,)?) => {$(
        impl Sum for $t {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<$t>::ZERO, |acc, x| acc + x)
            }
        }

        impl<'a> Sum<&'a $t> for $t {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(<$t>::ZERO, |acc, x| acc + *x)
            }
        }

        impl Product for $t {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<$t>::ONE, |acc, x| acc * x)
            }
        }

        impl<'a> Product<&'a $t> for $t {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(<$t>::ONE, |acc, x| acc * *x)
            }
        }
    )+};
}

impl_fold_traits!(Uint128, Int128);
