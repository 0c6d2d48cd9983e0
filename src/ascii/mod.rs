//! Character-class and numeric-literal parsers over ASCII bytes
//!
//! Everything here is written against the public combinator API only.

pub mod class;
pub mod number;
pub mod whitespace;

pub use class::{alphanumeric, letter, none_of_chars, one_of_chars};
pub use number::digit::digit;
pub use number::f64::f64;
pub use number::i64::i64;
pub use number::u64::u64;
pub use number::{Number, number};
pub use whitespace::{line_ending, spaces, whitespace};
