//! The literal macros, exercised from outside the crate: all four
//! spellings, every base prefix, and the wrapping fold.

use limb128::{Int128, Uint128, i128_lit, int128, u128_lit, uint128};

// Literals fold in const context; a bad digit would fail compilation here.
const COIN: Uint128 = uint128!(0xffff_0000_0000_0001);
const DEBT: Int128 = int128!(-40_000_000_000);
const _: () = assert!(COIN.l == 0xffff_0000_0000_0001 && COIN.h == 0);
const _: () = assert!(DEBT.l == (-40_000_000_000i64) as u64 && DEBT.h == u64::MAX);

#[test]
fn decimal_literals() {
    assert_eq!(uint128!(0), Uint128::ZERO);
    assert_eq!(uint128!(12345).to_u128(), 12345);
    assert_eq!(uint128!(1_000_000).to_u128(), 1_000_000);
    assert_eq!(
        uint128!(340282366920938463463374607431768211455),
        Uint128::MAX
    );
    assert_eq!(int128!(12345).to_i128(), 12345);
    assert_eq!(int128!(+99).to_i128(), 99);
}

#[test]
fn hex_literals() {
    assert_eq!(uint128!(0xff).to_u128(), 255);
    assert_eq!(uint128!(0xDead_Beef).to_u128(), 0xdead_beef);
    assert_eq!(
        uint128!(0xffffffffffffffffffffffffffffffff),
        Uint128::MAX
    );
    assert_eq!(int128!(0x7f).to_i128(), 127);
}

#[test]
fn octal_literals() {
    assert_eq!(uint128!(017).to_u128(), 15);
    assert_eq!(uint128!(0755).to_u128(), 0o755);
    assert_eq!(int128!(-017).to_i128(), -15);
    // a lone zero is decimal zero, not an octal prefix
    assert_eq!(uint128!(0), Uint128::ZERO);
}

#[test]
fn binary_literals() {
    assert_eq!(uint128!(0b1010).to_u128(), 10);
    assert_eq!(uint128!(0b1111_0000).to_u128(), 240);
    assert_eq!(int128!(-0b100).to_i128(), -4);
}

#[test]
fn uppercase_prefixes_dispatch_like_lowercase() {
    // Rust's lexer owns the macro spellings, so the uppercase prefixes go
    // through the parser entry point directly
    assert_eq!(Uint128::from_lit("0XFF").to_u128(), 255);
    assert_eq!(Uint128::from_lit("0B1010").to_u128(), 10);
    assert_eq!(Int128::from_lit("-0X10").to_i128(), -16);
}

#[test]
fn negative_literals_wrap_through_the_magnitude() {
    assert_eq!(int128!(-1), Int128::NEG_ONE);
    assert_eq!(
        int128!(-170141183460469231731687303715884105728),
        Int128::MIN
    );
}

#[test]
fn overlong_literals_wrap() {
    // 2^128 + 5 folds down to 5
    assert_eq!(
        uint128!(340282366920938463463374607431768211461).to_u128(),
        5
    );
}

#[test]
fn alternate_spellings_agree() {
    assert_eq!(u128_lit!(0xabc), uint128!(0xabc));
    assert_eq!(i128_lit!(-0xabc), int128!(-0xabc));
    assert_eq!(u128_lit!(42).to_u128(), 42);
    assert_eq!(i128_lit!(-42).to_i128(), -42);
}

#[test]
fn runtime_radix_parse_agrees_with_the_macros() {
    assert_eq!(Uint128::from_str_radix("ff", 16), Ok(uint128!(0xff)));
    assert_eq!(Uint128::from_str_radix("755", 8), Ok(uint128!(0755)));
    assert_eq!(Int128::from_str_radix("-1010", 2), Ok(int128!(-0b1010)));
    assert_eq!(Uint128::from_str_radix("zz", 36).map(Uint128::to_u128), Ok(35 * 36 + 35));
    assert!(Uint128::from_str_radix("12g", 16).is_err());
    assert!(Uint128::from_str_radix("", 10).is_err());
}
