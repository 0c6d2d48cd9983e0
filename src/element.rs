use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes and returns a single element
pub struct Any<T> {
    _element: PhantomData<fn() -> T>,
}

/// Convenience function to create an Any parser
pub fn any<T>() -> Any<T> {
    Any {
        _element: PhantomData,
    }
}

impl<'code, T: Atomic + 'code> Parser<'code> for Any<T> {
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        let element = cursor.value()?;
        Ok((element, cursor.next()))
    }
}

/// Parser that matches a specific element
pub struct Is<T> {
    expected: T,
}

/// Convenience function to create an Is parser
pub fn is<T>(expected: T) -> Is<T> {
    Is { expected }
}

impl<'code, T: Atomic + 'code> Parser<'code> for Is<T> {
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        let element = cursor.value()?;
        if element == self.expected {
            return Ok((element, cursor.next()));
        }
        Err(ParseError::LiteralMismatch {
            reason: format!(
                "expected {}, found {}",
                self.expected.describe(),
                element.describe()
            ),
            position: cursor.position(),
        })
    }
}

/// Parser that matches an element within an inclusive range
pub struct Range<T> {
    start: T,
    end: T,
}

/// Convenience function to create a Range parser
pub fn range<T>(start: T, end: T) -> Range<T> {
    Range { start, end }
}

impl<'code, T: Atomic + PartialOrd + 'code> Parser<'code> for Range<T> {
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        let element = cursor.value()?;
        if self.start <= element && element <= self.end {
            return Ok((element, cursor.next()));
        }
        Err(ParseError::RangeMismatch {
            reason: format!(
                "expected element in range {}-{}, found {}",
                self.start.describe(),
                self.end.describe(),
                element.describe()
            ),
            position: cursor.position(),
        })
    }
}

/// Parser that matches any element of a set, or any element outside it
pub struct OneOf<T> {
    set: Vec<T>,
    negated: bool,
}

/// Match one element that is contained in `set`
pub fn one_of<T: Atomic>(set: &[T]) -> OneOf<T> {
    OneOf {
        set: set.to_vec(),
        negated: false,
    }
}

/// Match one element that is not contained in `set`
pub fn none_of<T: Atomic>(set: &[T]) -> OneOf<T> {
    OneOf {
        set: set.to_vec(),
        negated: true,
    }
}

impl<'code, T: Atomic + 'code> Parser<'code> for OneOf<T> {
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        let element = cursor.value()?;
        if self.set.contains(&element) != self.negated {
            return Ok((element, cursor.next()));
        }
        let set = self
            .set
            .iter()
            .map(Atomic::describe)
            .collect::<Vec<_>>()
            .join(", ");
        let reason = if self.negated {
            format!("expected none of [{}], found {}", set, element.describe())
        } else {
            format!("expected one of [{}], found {}", set, element.describe())
        };
        Err(ParseError::RangeMismatch {
            reason,
            position: cursor.position(),
        })
    }
}

/// Parser that matches a single element accepted by a predicate
pub struct Satisfy<T, F> {
    predicate: F,
    reason: Cow<'static, str>,
    _element: PhantomData<fn() -> T>,
}

/// Match one element for which `predicate` returns true
pub fn satisfy<T, F>(predicate: F, reason: impl Into<Cow<'static, str>>) -> Satisfy<T, F>
where
    F: Fn(&T) -> bool,
{
    Satisfy {
        predicate,
        reason: reason.into(),
        _element: PhantomData,
    }
}

impl<'code, T, F> Parser<'code> for Satisfy<T, F>
where
    T: Atomic + 'code,
    F: Fn(&T) -> bool,
{
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        let element = cursor.value()?;
        if (self.predicate)(&element) {
            return Ok((element, cursor.next()));
        }
        Err(ParseError::RangeMismatch {
            reason: format!("expected {}, found {}", self.reason, element.describe()),
            position: cursor.position(),
        })
    }
}

/// Parser that succeeds only at the end of the input
pub struct End<T> {
    _element: PhantomData<fn() -> T>,
}

pub fn end<T>() -> End<T> {
    End {
        _element: PhantomData,
    }
}

impl<'code, T: Atomic + 'code> Parser<'code> for End<T> {
    type Element = T;
    type Output = ();

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, (), T> {
        match cursor.value() {
            Err(_) => Ok(((), cursor)),
            Ok(element) => Err(ParseError::LiteralMismatch {
                reason: format!("expected end of input, found {}", element.describe()),
                position: cursor.position(),
            }),
        }
    }
}

/// Parser that always fails with the given reason without consuming input
pub struct Fail<T, O> {
    reason: Cow<'static, str>,
    _marker: PhantomData<fn() -> (T, O)>,
}

pub fn fail<T, O>(reason: impl Into<Cow<'static, str>>) -> Fail<T, O> {
    Fail {
        reason: reason.into(),
        _marker: PhantomData,
    }
}

impl<'code, T: Atomic + 'code, O> Parser<'code> for Fail<T, O> {
    type Element = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, O, T> {
        Err(ParseError::custom(self.reason.clone(), cursor.position()))
    }
}

/// Parser that always succeeds with a clone of `value` without consuming input
pub struct Success<T, O> {
    value: O,
    _element: PhantomData<fn() -> T>,
}

pub fn success<T, O: Clone>(value: O) -> Success<T, O> {
    Success {
        value,
        _element: PhantomData,
    }
}

impl<'code, T: Atomic + 'code, O: Clone> Parser<'code> for Success<T, O> {
    type Element = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, O, T> {
        Ok((self.value.clone(), cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_any_success() {
        let data = b"hello";
        let (byte, cursor) = any::<u8>().parse(Cursor::new(data)).unwrap();
        assert_eq!(byte, b'h');
        assert_eq!(cursor.value().unwrap(), b'e');
    }

    #[test]
    fn test_any_at_end() {
        let data = b"x";
        let (byte, cursor) = any::<u8>().parse(Cursor::new(data)).unwrap();
        assert_eq!(byte, b'x');
        assert!(cursor.eos());

        let error = any::<u8>().parse(cursor).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnexpectedEnd {
                position: Position::start().successor()
            }
        );
        assert!(error.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn test_any_other_element_types() {
        let data = [100u32, 200];
        let (value, _) = any::<u32>().parse(Cursor::new(&data)).unwrap();
        assert_eq!(value, 100);

        let chars: Vec<char> = "λx".chars().collect();
        let (value, _) = any::<char>().parse(Cursor::new(&chars[..])).unwrap();
        assert_eq!(value, 'λ');
    }

    #[test]
    fn test_is_success() {
        let data = b"hello";
        let (byte, cursor) = is(b'h').parse(Cursor::new(data)).unwrap();
        assert_eq!(byte, b'h');
        assert_eq!(cursor.position().offset(), 1);
    }

    #[test]
    fn test_is_failure() {
        let data = b"world";
        let error = is(b'h').parse(Cursor::new(data)).unwrap_err();
        assert!(matches!(error, ParseError::LiteralMismatch { .. }));
        assert_eq!(error.position(), Position::start());
        assert!(error.to_string().contains("expected 'h', found 'w'"));
    }

    #[test]
    fn test_is_non_printable() {
        let data = [0xFFu8, 0xFE];
        let error = is(0xAAu8).parse(Cursor::new(&data)).unwrap_err();
        assert!(error.to_string().contains("expected 0xAA, found 0xFF"));
    }

    #[test]
    fn test_range_success() {
        let data = b"5abc";
        let (byte, cursor) = range(b'0', b'9').parse(Cursor::new(data)).unwrap();
        assert_eq!(byte, b'5');
        assert_eq!(cursor.value().unwrap(), b'a');
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(range(b'0', b'9').parse(Cursor::new(b"0")).is_ok());
        assert!(range(b'0', b'9').parse(Cursor::new(b"9")).is_ok());
    }

    #[test]
    fn test_range_failure_below_and_above() {
        let error = range(b'0', b'9').parse(Cursor::new(b"/")).unwrap_err();
        assert!(matches!(error, ParseError::RangeMismatch { .. }));
        assert!(
            error
                .to_string()
                .contains("expected element in range '0'-'9', found '/'")
        );

        let error = range(b'0', b'9').parse(Cursor::new(b":")).unwrap_err();
        assert!(error.to_string().contains("found ':'"));
    }

    #[test]
    fn test_range_eof() {
        let data: &[u8] = b"";
        let error = range(b'a', b'z').parse(Cursor::new(data)).unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_range_over_integers() {
        let data = [7u32];
        assert!(range(1u32, 10).parse(Cursor::new(&data)).is_ok());
        assert!(range(8u32, 10).parse(Cursor::new(&data)).is_err());
    }

    #[test]
    fn test_one_of_and_none_of() {
        let data = b"+1";
        let (sign, cursor) = one_of(b"+-").parse(Cursor::new(data)).unwrap();
        assert_eq!(sign, b'+');
        assert!(one_of(b"+-").parse(cursor).is_err());

        let (digit, _) = none_of(b"+-").parse(cursor).unwrap();
        assert_eq!(digit, b'1');

        let error = none_of(b"+-").parse(Cursor::new(data)).unwrap_err();
        assert!(error.to_string().contains("expected none of ['+', '-']"));
    }

    #[test]
    fn test_satisfy() {
        let data = b"aB";
        let upper = satisfy(|b: &u8| b.is_ascii_uppercase(), "uppercase letter");
        let error = upper.parse(Cursor::new(data)).unwrap_err();
        assert!(error.to_string().contains("expected uppercase letter, found 'a'"));

        let (byte, _) = upper.parse(Cursor::new(data).next()).unwrap();
        assert_eq!(byte, b'B');
    }

    #[test]
    fn test_end() {
        let data = b"a";
        assert!(end::<u8>().parse(Cursor::new(data)).is_err());
        let (_, cursor) = end::<u8>().parse(Cursor::new(data).next()).unwrap();
        assert!(cursor.eos());
    }

    #[test]
    fn test_fail_and_success() {
        let data = b"abc";
        let error = fail::<u8, ()>("nope").parse(Cursor::new(data)).unwrap_err();
        assert_eq!(error, ParseError::custom("nope", Position::start()));

        let (value, cursor) = success::<u8, _>(42).parse(Cursor::new(data)).unwrap();
        assert_eq!(value, 42);
        assert_eq!(cursor.position(), Position::start());
    }
}
