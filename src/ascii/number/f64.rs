use super::digit::{digits, from_ascii};
use crate::prelude::*;

/// `.` followed by at least one digit
fn fraction<'code>() -> impl Parser<'code, Element = u8, Output = ()> {
    is(b'.').and(digits()).ignore()
}

/// `e` or `E`, an optional sign, then at least one digit
fn exponent<'code>() -> impl Parser<'code, Element = u8, Output = ()> {
    one_of(b"eE")
        .and(one_of(b"+-").optional())
        .and(digits())
        .ignore()
}

/// The text of a decimal number: `[+-]? digits ('.' digits)? ([eE] [+-]? digits)?`
pub(crate) fn float_text<'code>() -> impl Parser<'code, Element = u8, Output = &'code [u8]> {
    one_of(b"+-")
        .optional()
        .and(digits())
        .and(fraction().optional())
        .and(exponent().optional())
        .recognize()
}

/// Parser that matches an ASCII floating point number
///
/// Accepts an optional sign, integer digits, an optional fractional part and
/// an optional exponent. A `.` or exponent marker that is not followed by
/// digits is left unconsumed.
pub fn f64<'code>() -> impl Parser<'code, Element = u8, Output = f64> {
    float_text().try_map(from_ascii::<f64>)
}
