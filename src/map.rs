use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Element = P::Element;
    type Output = U;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Parser combinator whose mapping function may reject the tree
///
/// A rejection becomes a [`ParseError::Custom`] at the position where the
/// inner parser started.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<'code, P, F, U, R> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, R>,
    R: Into<String>,
{
    type Element = P::Element;
    type Output = U;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let (value, next) = self.parser.parse(cursor)?;
        match (self.mapper)(value) {
            Ok(mapped) => Ok((mapped, next)),
            Err(reason) => Err(ParseError::custom(reason, cursor.position())),
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() and .try_map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U, R>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, R>,
        R: Into<String>,
    {
        TryMap::new(self, mapper)
    }
}

impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
