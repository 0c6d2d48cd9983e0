use crate::prelude::*;

/// Parser that matches a single ASCII digit (0-9)
pub fn digit<'code>() -> impl Parser<'code, Element = u8, Output = u8> {
    range(b'0', b'9')
}

/// One or more ASCII digits, as the matched bytes
pub(crate) fn digits<'code>() -> impl Parser<'code, Element = u8, Output = &'code [u8]> {
    digit().some().recognize()
}

/// Decode matched ASCII text and hand it to `str::parse`
pub(crate) fn from_ascii<N>(bytes: &[u8]) -> Result<N, String>
where
    N: std::str::FromStr,
    N::Err: std::fmt::Display,
{
    let text = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
    text.parse::<N>()
        .map_err(|e| format!("invalid number '{}': {}", text, e))
}
