use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that keeps success, failure and advancement but drops the tree
pub struct Ignore<P> {
    parser: P,
}

impl<P> Ignore<P> {
    pub fn new(parser: P) -> Self {
        Ignore { parser }
    }
}

impl<'code, P> Parser<'code> for Ignore<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = ();

    fn parse(&self, cursor: Cursor<'code, Self::Element>) -> ParseResult<'code, (), Self::Element> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok(((), cursor))
    }
}

/// Convenience function to create an Ignore parser
pub fn ignore<'code, P>(parser: P) -> Ignore<P>
where
    P: Parser<'code>,
{
    Ignore::new(parser)
}

/// Extension trait to add .ignore() method support for parsers
pub trait IgnoreExt<'code>: Parser<'code> + Sized {
    fn ignore(self) -> Ignore<Self> {
        Ignore::new(self)
    }
}

impl<'code, P> IgnoreExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::is;
    use crate::literal::literal;

    #[test]
    fn test_ignore_keeps_advancement() {
        let data = b"abc!";
        let ((), cursor) = literal(b"abc").ignore().parse(Cursor::new(data)).unwrap();
        assert_eq!(cursor.value().unwrap(), b'!');
    }

    #[test]
    fn test_ignore_keeps_failure() {
        let cursor = Cursor::new(b"x");
        let direct = is(b'a').parse(cursor).unwrap_err();
        assert_eq!(ignore(is(b'a')).parse(cursor).unwrap_err(), direct);
    }
}
