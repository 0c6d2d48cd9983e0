use crate::element::OneOf;
use crate::prelude::*;

/// Parser that matches a single ASCII letter
pub fn letter<'code>() -> impl Parser<'code, Element = u8, Output = u8> {
    range(b'a', b'z').or(range(b'A', b'Z'))
}

/// Parser that matches a single ASCII letter or digit
pub fn alphanumeric<'code>() -> impl Parser<'code, Element = u8, Output = u8> {
    letter().or(range(b'0', b'9'))
}

/// Parser that matches one byte of `set`
pub fn one_of_chars(set: &str) -> OneOf<u8> {
    one_of(set.as_bytes())
}

/// Parser that matches one byte not in `set`
pub fn none_of_chars(set: &str) -> OneOf<u8> {
    none_of(set.as_bytes())
}
