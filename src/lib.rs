//! 128-bit signed and unsigned integers built from 64-bit limbs.
//!
//! [`Uint128`] and [`Int128`] carry exactly 128 bits as a pair of 64-bit
//! limbs laid out in native byte order, so a value can stand in for (and
//! be bit-cast to) the native 128-bit integers where those exist. Every
//! operation is synthesized from 64-bit primitives: arithmetic wraps
//! modulo 2^128 like the machine operations it mirrors, division is a
//! restoring shift-and-subtract engine, and the decimal formatter leans
//! on that engine instead of any 128-bit runtime support.
//!
//! The [`uint128!`]/[`int128!`] macros fold literals at compile time with
//! per-digit validation, [`Style`] covers stream-state formatting (base,
//! width, fill, adjustment, digit grouping) beyond what `std::fmt` flags
//! express, and the `num-traits` impls expose the usual numeric
//! classification to generic code.

#[macro_use]
mod macros;

mod convert;
mod divmod;
mod fmt;
mod i128;
mod literal;
mod num;
mod u128;


pub use convert::TryFromIntError;
pub use fmt::{Adjust, Base, Style};
pub use i128::Int128;
pub use literal::ParseError;
pub use u128::Uint128;
