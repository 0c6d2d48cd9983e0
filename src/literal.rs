use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches an exact sequence of elements
///
/// On success the output is the matched slice of the input, which is equal
/// to the expected sequence. A failure is reported at the first element that
/// differs, or as `UnexpectedEnd` where the input ran out.
pub struct Literal<T> {
    expected: Vec<T>,
}

impl<T: Atomic> Literal<T> {
    pub fn new(expected: &[T]) -> Self {
        Literal {
            expected: expected.to_vec(),
        }
    }
}

/// Convenience function to create a Literal parser
///
/// ```
/// use pcomb::{Cursor, Parser, literal};
///
/// let (matched, cursor) = literal(b"foo").parse(Cursor::new(b"foot")).unwrap();
/// assert_eq!(matched, b"foo");
/// assert_eq!(cursor.remaining(), b"t");
/// ```
pub fn literal<T: Atomic>(expected: &[T]) -> Literal<T> {
    Literal::new(expected)
}

impl<'code, T: Atomic + 'code> Parser<'code> for Literal<T> {
    type Element = T;
    type Output = &'code [T];

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, &'code [T], T> {
        let remaining = cursor.remaining();
        let matched = remaining
            .iter()
            .zip(&self.expected)
            .take_while(|(found, expected)| found == expected)
            .count();

        if matched == self.expected.len() {
            let consumed = &remaining[..matched];
            return Ok((consumed, cursor.advance(matched)));
        }

        let at = cursor.advance(matched).position();
        match remaining.get(matched) {
            Some(found) => Err(ParseError::LiteralMismatch {
                reason: format!(
                    "expected {}, found {} while matching '{}'",
                    self.expected[matched].describe(),
                    found.describe(),
                    T::describe_slice(&self.expected)
                ),
                position: at,
            }),
            None => Err(ParseError::UnexpectedEnd { position: at }),
        }
    }
}
