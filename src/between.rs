use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches content surrounded by delimiters
///
/// Parses `open`, then `content`, then `close`, and yields only the content
/// tree.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
    P3: Parser<'code, Element = P1::Element>,
{
    type Element = P1::Element;
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((content, cursor))
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
    P3: Parser<'code, Element = P1::Element>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{is, none_of};
    use crate::error::ParseError;
    use crate::position::PositionExt;
    use crate::repeat::RepeatExt;

    #[test]
    fn test_between_quotes() {
        let string = between(is(b'"'), none_of(b"\"").many().recognize(), is(b'"'));
        let (text, cursor) = string.parse(Cursor::new(b"\"hi there\" rest")).unwrap();
        assert_eq!(text, b"hi there");
        assert_eq!(cursor.value().unwrap(), b' ');
    }

    #[test]
    fn test_between_missing_close() {
        let parens = between(is(b'('), is(b'x'), is(b')'));
        let error = parens.parse(Cursor::new(b"(x")).unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEnd { .. }));
    }
}
