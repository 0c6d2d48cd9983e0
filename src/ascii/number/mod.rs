use crate::prelude::*;

pub mod digit;
pub mod f64;
pub mod i64;
pub mod u64;

pub use digit::digit;
pub use f64::f64;
pub use i64::i64;
pub use u64::u64;

#[derive(Debug, PartialEq)]
pub enum Number {
    I64(i64),
    F64(f64),
}

/// Classify matched number text: a fraction or exponent makes it a float
fn classify(text: &[u8]) -> Result<Number, String> {
    if text.iter().any(|&b| matches!(b, b'.' | b'e' | b'E')) {
        digit::from_ascii(text).map(Number::F64)
    } else {
        digit::from_ascii(text).map(Number::I64)
    }
}

/// Parser that matches either an integer or a float and returns a Number enum
pub fn number<'code>() -> impl Parser<'code, Element = u8, Output = Number> {
    f64::float_text().try_map(classify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_float() {
        let data = b"3.14abc";
        let cursor = Cursor::new(data);

        let (num, cursor) = number().parse(cursor).unwrap();
        match num {
            Number::F64(f) => assert!((f - 3.14).abs() < 1e-12),
            Number::I64(_) => panic!("Expected float, got int"),
        }
        assert_eq!(cursor.value().unwrap(), b'a');
    }

    #[test]
    fn test_number_int() {
        let (num, cursor) = number().parse(Cursor::new(b"123abc")).unwrap();
        assert_eq!(num, Number::I64(123));
        assert_eq!(cursor.value().unwrap(), b'a');
    }

    #[test]
    fn test_number_exponent_is_float() {
        assert_eq!(parse(&number(), b"1e2").unwrap(), Number::F64(100.0));
    }

    #[test]
    fn test_number_negative() {
        assert_eq!(parse(&number(), b"-456").unwrap(), Number::I64(-456));
        assert_eq!(parse(&number(), b"-2.5").unwrap(), Number::F64(-2.5));
    }

    #[test]
    fn test_number_integer_overflow() {
        let error = parse(&number(), b"99999999999999999999").unwrap_err();
        assert!(matches!(error, ParseError::Custom { .. }));
    }
}
