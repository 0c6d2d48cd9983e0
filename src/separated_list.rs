use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec![b'a', b'b', b'c']`
///
/// # Note
/// - Requires at least one element
/// - A separator not followed by an item is left unconsumed
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Element = P::Element>,
{
    type Element = P::Element;
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Output, Self::Element> {
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut items = vec![first];

        loop {
            let Ok((_, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            let Ok((item, next)) = self.parser.parse(after_separator) else {
                break;
            };
            if next.position() == cursor.position() {
                break;
            }
            items.push(item);
            cursor = next;
        }

        Ok((items, cursor))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Element = P::Element>,
{
    SeparatedList::new(parser, separator)
}
