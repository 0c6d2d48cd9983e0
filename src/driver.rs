use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use log::{debug, trace};

/// Run `parser` over the whole of `input`
///
/// The parser starts at the first element and must stop exactly at the end
/// of the input. A parser that succeeds on a prefix only is reported as
/// [`ParseError::PartialMatch`]; trailing input is never silently ignored.
///
/// ```
/// use pcomb::{literal, parse, ParseError};
///
/// assert_eq!(parse(&literal(b"foo"), b"foo").unwrap(), b"foo");
/// assert!(matches!(
///     parse(&literal(b"foo"), b"foot"),
///     Err(ParseError::PartialMatch { .. })
/// ));
/// ```
pub fn parse<'code, P>(parser: &P, input: &'code [P::Element]) -> Result<P::Output, ParseError>
where
    P: Parser<'code> + ?Sized,
{
    trace!("parsing input of {} elements", input.len());
    match parser.parse(Cursor::new(input)) {
        Ok((tree, cursor)) if cursor.eos() => {
            trace!("parse consumed all {} elements", input.len());
            Ok(tree)
        }
        Ok((_, cursor)) => {
            let error = ParseError::PartialMatch {
                position: cursor.position(),
                end: cursor.end(),
            };
            debug!("parse failed: {}", error);
            Err(error)
        }
        Err(error) => {
            debug!("parse failed: {}", error);
            Err(error)
        }
    }
}
