use super::digit::{digits, from_ascii};
use crate::prelude::*;

/// Parser that matches an unsigned decimal integer
///
/// Values that do not fit in a `u64` fail with [`ParseError::Custom`].
pub fn u64<'code>() -> impl Parser<'code, Element = u8, Output = u64> {
    digits().try_map(from_ascii::<u64>)
}
