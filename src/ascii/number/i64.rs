use super::digit::{digits, from_ascii};
use crate::prelude::*;

/// Parser that matches a signed decimal integer with an optional `+` or `-`
pub fn i64<'code>() -> impl Parser<'code, Element = u8, Output = i64> {
    one_of(b"+-")
        .optional()
        .and(digits())
        .recognize()
        .try_map(from_ascii::<i64>)
}
