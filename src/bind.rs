use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that chooses the next parser from the previous tree
///
/// On success of the first parser, its tree is handed to the function, and
/// the parser the function returns runs from where the first one stopped.
/// This allows context-sensitive grammars such as a length prefix followed
/// by exactly that many elements.
///
/// ```
/// use pcomb::prelude::*;
///
/// let counted = range(b'0', b'9')
///     .bind(|n| any::<u8>().exactly((n - b'0') as usize))
///     .recognize();
/// assert_eq!(parse(&counted, b"3abc").unwrap(), b"3abc");
/// assert!(parse(&counted, b"3ab").is_err());
/// ```
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, P2> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code, Element = P::Element>,
{
    type Element = P::Element;
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, P2>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code, Element = P::Element>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, P2>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'code, Element = Self::Element>,
    {
        Bind::new(self, binder)
    }
}

impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::element::{any, is, range};
    use crate::error::ParseError;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::repeat::RepeatExt;

    #[test]
    fn test_bind_count_prefix() {
        let parser = range(b'0', b'9').bind(|n| any::<u8>().exactly((n - b'0') as usize));

        let (items, cursor) = parser.parse(Cursor::new(b"2xyz")).unwrap();
        assert_eq!(items, vec![b'x', b'y']);
        assert_eq!(cursor.value().unwrap(), b'z');
    }

    #[test]
    fn test_bind_second_parser_starts_after_first() {
        let parser = is(b'a').bind(|first| is(first));
        assert!(parser.parse(Cursor::new(b"aa")).is_ok());
        assert!(parser.parse(Cursor::new(b"ab")).is_err());
    }

    #[test]
    fn test_bind_first_failure_propagates() {
        let cursor = Cursor::new(b"x");
        let direct = is(b'a').parse(cursor).unwrap_err();
        let error = bind(is(b'a'), |_| any::<u8>()).parse(cursor).unwrap_err();
        assert_eq!(error, direct);
    }

    #[test]
    fn test_bind_selects_grammar_by_tag() {
        let parser = is(b'#')
            .optional()
            .map(|tag| tag.is_some())
            .bind(|hex| {
                let digits = if hex {
                    range(b'0', b'f').some()
                } else {
                    range(b'0', b'9').some()
                };
                digits.map(|d| d.len())
            });

        let (len, _) = parser.parse(Cursor::new(b"#ff")).unwrap();
        assert_eq!(len, 2);

        let error = parser.parse(Cursor::new(b"ff")).unwrap_err();
        assert!(matches!(error, ParseError::RangeMismatch { .. }));
    }

    #[test]
    fn test_bind_with_literal_from_tree() {
        let parser = range(b'a', b'z').bind(|open| literal(b"--").and_right(is(open)));
        let (close, _) = parser.parse(Cursor::new(b"q--q")).unwrap();
        assert_eq!(close, b'q');
        assert!(parser.parse(Cursor::new(b"q--r")).is_err());
    }
}
