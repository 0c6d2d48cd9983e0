use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::repeat::Repeat;

/// Parser combinator that matches zero or one occurrence of a parser
///
/// This is a `(0, 1)` repetition whose tree is an `Option` instead of a
/// vector. It never fails; when the inner parser fails the cursor is left
/// where it was.
///
/// ```
/// use pcomb::prelude::*;
///
/// let sign = is(b'-').optional();
/// let (present, cursor) = sign.parse(Cursor::new(b"-5")).unwrap();
/// assert_eq!((present, cursor.position().offset()), (Some(b'-'), 1));
///
/// let (absent, cursor) = sign.parse(Cursor::new(b"5")).unwrap();
/// assert_eq!((absent, cursor.position().offset()), (None, 0));
/// ```
pub struct Optional<P> {
    inner: Repeat<P>,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional {
            inner: Repeat::new(parser, 0, Some(1)),
        }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = Option<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let (mut results, cursor) = self.inner.parse(cursor)?;
        Ok((results.pop(), cursor))
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}
