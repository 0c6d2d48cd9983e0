use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// The tree of a heterogeneous alternation: which branch matched, and its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<A, B> {
    Left(A),
    Right(B),
}

impl<A, B> Either<A, B> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Collapse both sides into one value
    pub fn either<U>(self, left: impl FnOnce(A) -> U, right: impl FnOnce(B) -> U) -> U {
        match self {
            Either::Left(a) => left(a),
            Either::Right(b) => right(b),
        }
    }
}

/// How an alternation presents the tree of whichever branch succeeded
pub trait Choose<A, B> {
    type Output;

    fn left(tree: A) -> Self::Output;
    fn right(tree: B) -> Self::Output;
}

/// Both branches produce the same tree type
pub struct Unify;
/// Tag the tree with the branch that produced it
pub struct Tagged;
/// Keep the left tree, `None` when the right branch matched
pub struct KeepLeft;
/// Keep the right tree, `None` when the left branch matched
pub struct KeepRight;
/// Keep no tree
pub struct KeepNeither;

impl<A> Choose<A, A> for Unify {
    type Output = A;

    fn left(tree: A) -> A {
        tree
    }

    fn right(tree: A) -> A {
        tree
    }
}

impl<A, B> Choose<A, B> for Tagged {
    type Output = Either<A, B>;

    fn left(tree: A) -> Either<A, B> {
        Either::Left(tree)
    }

    fn right(tree: B) -> Either<A, B> {
        Either::Right(tree)
    }
}

impl<A, B> Choose<A, B> for KeepLeft {
    type Output = Option<A>;

    fn left(tree: A) -> Option<A> {
        Some(tree)
    }

    fn right(_: B) -> Option<A> {
        None
    }
}

impl<A, B> Choose<A, B> for KeepRight {
    type Output = Option<B>;

    fn left(_: A) -> Option<B> {
        None
    }

    fn right(tree: B) -> Option<B> {
        Some(tree)
    }
}

impl<A, B> Choose<A, B> for KeepNeither {
    type Output = ();

    fn left(_: A) {}

    fn right(_: B) {}
}

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both parsers start from the same cursor, so the second branch never sees
/// input the first one consumed before failing. When both fail their errors
/// are combined into [`ParseError::AlternativesExhausted`].
pub struct Or<P1, P2, C = Unify> {
    parser1: P1,
    parser2: P2,
    _choose: PhantomData<fn() -> C>,
}

impl<P1, P2, C> Or<P1, P2, C> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or {
            parser1,
            parser2,
            _choose: PhantomData,
        }
    }
}

impl<'code, P1, P2, C> Parser<'code> for Or<P1, P2, C>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
    C: Choose<P1::Output, P2::Output>,
{
    type Element = P1::Element;
    type Output = C::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let left = match self.parser1.parse(cursor) {
            Ok((tree, cursor)) => return Ok((C::left(tree), cursor)),
            Err(error) => error,
        };
        match self.parser2.parse(cursor) {
            Ok((tree, cursor)) => Ok((C::right(tree), cursor)),
            Err(right) => Err(ParseError::alternatives(cursor.position(), left, right)),
        }
    }
}

/// Extension trait to add the alternation methods to parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    /// Alternation between two parsers with the same tree type
    fn or<P>(self, other: P) -> Or<Self, P, Unify>
    where
        P: Parser<'code, Element = Self::Element, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Alternation between parsers of different tree types
    fn or_either<P>(self, other: P) -> Or<Self, P, Tagged>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        Or::new(self, other)
    }

    /// Alternation keeping only this parser's tree
    fn or_left<P>(self, other: P) -> Or<Self, P, KeepLeft>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        Or::new(self, other)
    }

    /// Alternation keeping only the other parser's tree
    fn or_right<P>(self, other: P) -> Or<Self, P, KeepRight>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        Or::new(self, other)
    }

    /// Alternation discarding both trees
    fn or_neither<P>(self, other: P) -> Or<Self, P, KeepNeither>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        Or::new(self, other)
    }
}

impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a same-typed Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2, Unify>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Convenience function to create a tagged Or parser
pub fn either<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2, Tagged>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
{
    Or::new(parser1, parser2)
}
