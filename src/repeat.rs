use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::optional::Optional;
use crate::parser::{ParseResult, Parser};
use log::trace;

/// Parser combinator that applies a parser between `min` and `max` times
///
/// Repetition is greedy and runs in a loop, so long inputs do not grow the
/// call stack. A failure that stops the loop once `min` trees have been
/// collected is expected control flow and is not reported. When the loop
/// stops short of `min`, the failure that stopped it is surfaced: as-is if
/// nothing matched at all, otherwise wrapped in
/// [`ParseError::RepetitionBelowMinimum`].
///
/// An unbounded repetition whose parser succeeds without consuming input
/// stops after that match once `min` is reached, instead of looping forever.
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Repeat<P> {
    /// `max` of `None` means unbounded
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        Repeat { parser, min, max }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let max = self.max.unwrap_or(usize::MAX);
        let mut results = Vec::new();

        let halted = loop {
            if results.len() >= max {
                break None;
            }
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    let advanced = next.position() > cursor.position();
                    results.push(value);
                    cursor = next;
                    if !advanced && self.max.is_none() && results.len() >= self.min {
                        trace!(
                            "repetition stopped at {}: match consumed no input",
                            cursor.position()
                        );
                        break None;
                    }
                }
                Err(error) => break Some(error),
            }
        };

        if results.len() >= self.min {
            return Ok((results, cursor));
        }
        match halted {
            Some(error) if results.is_empty() => Err(error),
            Some(error) => Err(ParseError::RepetitionBelowMinimum {
                position: cursor.position(),
                min: self.min,
                matched: results.len(),
                cause: Box::new(error),
            }),
            None => Err(ParseError::custom(
                format!(
                    "repetition minimum {} exceeds maximum {}",
                    self.min, max
                ),
                cursor.position(),
            )),
        }
    }
}

/// Apply `parser` at least `min` and at most `max` times
pub fn repeat<'code, P>(parser: P, min: usize, max: usize) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, min, Some(max))
}

/// Zero or more occurrences of `parser`
pub fn many<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, 0, None)
}

/// One or more occurrences of `parser`
pub fn some<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, 1, None)
}

/// Extension trait to add the repetition methods to parsers
pub trait RepeatExt<'code>: Parser<'code> + Sized {
    /// Between `min` and `max` occurrences, inclusive
    fn repeat(self, min: usize, max: usize) -> Repeat<Self> {
        Repeat::new(self, min, Some(max))
    }

    /// `min` or more occurrences
    fn at_least(self, min: usize) -> Repeat<Self> {
        Repeat::new(self, min, None)
    }

    /// Exactly `n` occurrences
    fn exactly(self, n: usize) -> Repeat<Self> {
        Repeat::new(self, n, Some(n))
    }

    /// Zero or more occurrences
    fn many(self) -> Repeat<Self> {
        Repeat::new(self, 0, None)
    }

    /// One or more occurrences
    fn some(self) -> Repeat<Self> {
        Repeat::new(self, 1, None)
    }

    /// Zero or one occurrence
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'code, P> RepeatExt<'code> for P where P: Parser<'code> {}
