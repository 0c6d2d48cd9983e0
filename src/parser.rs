use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use std::sync::Arc;

/// Outcome of running a parser: the tree and the cursor after it, or a failure
pub type ParseResult<'code, O, T> = Result<(O, Cursor<'code, T>), ParseError>;

/// A type-erased parser, used where a grammar needs a nameable type
pub type BoxedParser<'code, T, O> =
    Box<dyn Parser<'code, Element = T, Output = O> + Send + Sync + 'code>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    /// The input element type this parser reads
    type Element: Atomic + 'code;
    /// The tree produced on success
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Parsers hold no state between calls, so a
    /// caller can always retry from the cursor it passed in.
    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Element, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{any, is};
    use crate::or::OrExt;

    #[test]
    fn test_reference_is_a_parser() {
        let data = b"ab";
        let parser = is(b'a');
        let by_ref = &parser;

        let (byte, cursor) = by_ref.parse(Cursor::new(data)).unwrap();
        assert_eq!(byte, b'a');
        assert!(by_ref.parse(cursor).is_err());
        assert!(parser.parse(Cursor::new(data)).is_ok());
    }

    #[test]
    fn test_boxed_alternatives_share_a_type() {
        let data = b"b";
        let choices: Vec<BoxedParser<'_, u8, u8>> = vec![is(b'a').boxed(), any::<u8>().boxed()];

        let results: Vec<_> = choices
            .iter()
            .map(|p| p.parse(Cursor::new(data)).map(|(v, _)| v))
            .collect();
        assert!(results[0].is_err());
        assert_eq!(results[1], Ok(b'b'));
    }

    #[test]
    fn test_boxed_in_combinator() {
        let data = b"z";
        let parser = is(b'y').boxed().or(Arc::new(is(b'z')));
        let (byte, _) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(byte, b'z');
    }
}
