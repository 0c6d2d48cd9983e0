use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// How a sequence combines the trees of its two sides
pub trait Keep<A, B> {
    type Output;

    fn keep(left: A, right: B) -> Self::Output;
}

/// Keep both trees as a pair
pub struct Both;
/// Keep the left tree only
pub struct Left;
/// Keep the right tree only
pub struct Right;
/// Keep neither tree
pub struct Neither;

impl<A, B> Keep<A, B> for Both {
    type Output = (A, B);

    fn keep(left: A, right: B) -> (A, B) {
        (left, right)
    }
}

impl<A, B> Keep<A, B> for Left {
    type Output = A;

    fn keep(left: A, _: B) -> A {
        left
    }
}

impl<A, B> Keep<A, B> for Right {
    type Output = B;

    fn keep(_: A, right: B) -> B {
        right
    }
}

impl<A, B> Keep<A, B> for Neither {
    type Output = ();

    fn keep(_: A, _: B) {}
}

/// Parser combinator that sequences two parsers
///
/// The second parser starts where the first one stopped. If either fails the
/// failure propagates unchanged; nothing needs undoing since parsers never
/// commit side effects.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. Use the
/// `and_left`/`and_right` forms to drop delimiters along the way.
///
/// ```
/// use pcomb::prelude::*;
///
/// let (((a, _), b), _) = is(b'1')
///     .and(is(b'.'))
///     .and(is(b'5'))
///     .parse(Cursor::new(b"1.5"))
///     .unwrap();
/// assert_eq!((a, b), (b'1', b'5'));
/// ```
pub struct And<P1, P2, K = Both> {
    parser1: P1,
    parser2: P2,
    _keep: PhantomData<fn() -> K>,
}

impl<P1, P2, K> And<P1, P2, K> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And {
            parser1,
            parser2,
            _keep: PhantomData,
        }
    }
}

impl<'code, P1, P2, K> Parser<'code> for And<P1, P2, K>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
    K: Keep<P1::Output, P2::Output>,
{
    type Element = P1::Element;
    type Output = K::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok((K::keep(result1, result2), cursor))
    }
}

/// Convenience function to create an And parser keeping both trees
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2, Both>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add the sequencing methods to parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    /// Sequence, keeping both trees
    fn and<P>(self, other: P) -> And<Self, P, Both>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        And::new(self, other)
    }

    /// Sequence, keeping only this parser's tree
    fn and_left<P>(self, other: P) -> And<Self, P, Left>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        And::new(self, other)
    }

    /// Sequence, keeping only the other parser's tree
    fn and_right<P>(self, other: P) -> And<Self, P, Right>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        And::new(self, other)
    }

    /// Sequence, discarding both trees
    fn and_neither<P>(self, other: P) -> And<Self, P, Neither>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        And::new(self, other)
    }
}

impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{any, is};
    use crate::error::ParseError;
    use crate::literal::literal;
    use crate::position::Position;

    #[test]
    fn test_and_both_succeed() {
        let data = b"A5xyz";
        let ((a, five), cursor) = is(b'A').and(is(b'5')).parse(Cursor::new(data)).unwrap();
        assert_eq!(a, b'A');
        assert_eq!(five, b'5');
        assert_eq!(cursor.value().unwrap(), b'x');
    }

    #[test]
    fn test_and_first_fails() {
        let data = b"Bxyz";
        let error = is(b'A').and(is(b'x')).parse(Cursor::new(data)).unwrap_err();
        assert_eq!(error.position(), Position::start());
    }

    #[test]
    fn test_and_second_failure_is_unmodified() {
        let data = b"Axyz";
        let cursor = Cursor::new(data);
        let error = is(b'A').and(is(b'5')).parse(cursor).unwrap_err();
        let direct = is(b'5').parse(cursor.next()).unwrap_err();
        assert_eq!(error, direct);
    }

    #[test]
    fn test_and_chain() {
        let data = b"A5B";
        let parser = is(b'A').and(is(b'5')).and(is(b'B'));

        let (((a, five), b), cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!((a, five, b), (b'A', b'5', b'B'));
        assert!(cursor.eos());
    }

    #[test]
    fn test_and_left_and_right() {
        let data = b"(x)";
        let parser = is(b'(').and_right(any::<u8>()).and_left(is(b')'));

        let (inner, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(inner, b'x');
        assert!(cursor.eos());
    }

    #[test]
    fn test_and_neither() {
        let data = b"ab!";
        let ((), cursor) = is(b'a').and_neither(literal(b"b")).parse(Cursor::new(data)).unwrap();
        assert_eq!(cursor.value().unwrap(), b'!');
    }

    #[test]
    fn test_function_syntax() {
        let data = b"XY";
        let ((x, y), _) = and(is(b'X'), is(b'Y')).parse(Cursor::new(data)).unwrap();
        assert_eq!((x, y), (b'X', b'Y'));
    }

    #[test]
    fn test_and_at_end_of_input() {
        let data = b"X";
        let error = and(is(b'X'), is(b'Y')).parse(Cursor::new(data)).unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEnd { .. }));
    }
}
