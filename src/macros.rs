//! Operator plumbing shared by the two integer types.

/// Compound-assignment operators forwarding to the binary operators.
macro_rules! forward_assign {
    ($t:ty, $({$trait:ident, $method:ident, $op:tt}),+ $(,)?) => {$(
        impl std::ops::$trait for $t {
            #[inline]
            fn $method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    )+};
}

/// Shift operators for a primitive count type. Only the low seven bits of
/// the count are consulted, as with the shift instructions being mirrored.
macro_rules! impl_shifts {
    ($t:ty => $($count:ty),+ $(,)?) => {$(
        impl std::ops::Shl<$count> for $t {
            type Output = Self;
            #[inline]
            fn shl(self, n: $count) -> Self {
                self.wrapping_shl(n as u32)
            }
        }

        impl std::ops::Shr<$count> for $t {
            type Output = Self;
            #[inline]
            fn shr(self, n: $count) -> Self {
                self.wrapping_shr(n as u32)
            }
        }

        impl std::ops::ShlAssign<$count> for $t {
            #[inline]
            fn shl_assign(&mut self, n: $count) {
                *self = self.wrapping_shl(n as u32);
            }
        }

        impl std::ops::ShrAssign<$count> for $t {
            #[inline]
            fn shr_assign(&mut self, n: $count) {
                *self = self.wrapping_shr(n as u32);
            }
        }
    )+};
}

/// Shift operators taking a 128-bit count: only the low seven bits of the
/// low limb matter.
macro_rules! impl_wide_shifts {
    ($t:ty => $($count:ty),+ $(,)?) => {$(
        impl std::ops::Shl<$count> for $t {
            type Output = Self;
            #[inline]
            fn shl(self, n: $count) -> Self {
                self.wrapping_shl(n.l as u32)
            }
        }

        impl std::ops::Shr<$count> for $t {
            type Output = Self;
            #[inline]
            fn shr(self, n: $count) -> Self {
                self.wrapping_shr(n.l as u32)
            }
        }

        impl std::ops::ShlAssign<$count> for $t {
            #[inline]
            fn shl_assign(&mut self, n: $count) {
                *self = self.wrapping_shl(n.l as u32);
            }
        }

        impl std::ops::ShrAssign<$count> for $t {
            #[inline]
            fn shr_assign(&mut self, n: $count) {
                *self = self.wrapping_shr(n.l as u32);
            }
        }
    )+};
}
