use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected tree fails with [`ParseError::Custom`] at the position where
/// the inner parser started.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<'code, P, F> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let (value, next) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, next))
        } else {
            Err(ParseError::custom(
                self.error_message.clone(),
                cursor.position(),
            ))
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> + Sized {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}
