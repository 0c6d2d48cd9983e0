use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::ParseResult;
use std::fmt;

/// An opaque index into an input sequence
///
/// Positions only ever move forward while parsing. Comparing positions that
/// were taken from different inputs is meaningless.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// The position of the first element of any input
    pub const fn start() -> Self {
        Position(0)
    }

    /// The position one past the last element of `data`
    pub fn end_of<T>(data: &[T]) -> Self {
        Position(data.len())
    }

    pub const fn advance(self, n: usize) -> Self {
        Position(self.0.saturating_add(n))
    }

    pub const fn successor(self) -> Self {
        self.advance(1)
    }

    /// Number of elements before this position
    pub const fn offset(self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}", self.0)
    }
}

/// Represents a span in the source code with start and end positions
/// and a reference to the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code, T: Atomic> {
    /// Reference to the source code
    pub source: &'code [T],
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl<'code, T: Atomic> Span<'code, T> {
    pub fn new(source: &'code [T], start: Position, end: Position) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slice().is_empty()
    }

    /// Get the slice of code that this span represents
    ///
    /// Bounds are clamped to the source; an inverted span is empty.
    pub fn slice(&self) -> &'code [T] {
        let end = self.end.offset().min(self.source.len());
        let start = self.start.offset().min(end);
        &self.source[start..end]
    }

    /// Format the spanned content as a string
    pub fn as_string(&self) -> String {
        T::describe_slice(self.slice())
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = (P::Output, Span<'code, P::Element>);

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let start = cursor.position();
        let (output, cursor) = self.parser.parse(cursor)?;
        let span = Span::new(cursor.source(), start, cursor.position());
        Ok(((output, span), cursor))
    }
}

/// Parser combinator that replaces the output with the slice of input consumed
pub struct Recognize<P> {
    parser: P,
}

impl<P> Recognize<P> {
    pub fn new(parser: P) -> Self {
        Recognize { parser }
    }
}

impl<'code, P> Parser<'code> for Recognize<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = &'code [P::Element];

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let start = cursor.position();
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok((cursor.slice_from(start), cursor))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its position span
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }

    /// Discard the output and yield the input this parser consumed
    fn recognize(self) -> Recognize<Self> {
        Recognize::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Spanned combinator
pub fn spanned<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}

/// Convenience function to create a Recognize combinator
pub fn recognize<P>(parser: P) -> Recognize<P> {
    Recognize::new(parser)
}
