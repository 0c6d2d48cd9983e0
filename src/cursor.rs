use crate::atomic::Atomic;
use crate::error::ParseError;
use crate::position::Position;

/// A read-only view of an input sequence at a given position
///
/// Cursors are `Copy`: a parser that wants to backtrack simply keeps the
/// cursor it was handed and tries again from it. The underlying input is a
/// shared borrow, so nothing a parser does through a cursor can mutate it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code, T: Atomic> {
    data: &'code [T],
    position: Position,
}

impl<'code, T: Atomic> Cursor<'code, T> {
    /// Create a cursor at the start of `data`
    pub fn new(data: &'code [T]) -> Self {
        Cursor {
            data,
            position: Position::start(),
        }
    }

    /// Create a cursor at `position`, clamped to the end of `data`
    pub fn at(data: &'code [T], position: Position) -> Self {
        let end = Position::end_of(data);
        Cursor {
            data,
            position: position.min(end),
        }
    }

    /// Get the element at the current cursor position
    ///
    /// Returns `UnexpectedEnd` if the cursor is positioned at the end of the sequence
    pub fn value(&self) -> Result<T, ParseError> {
        self.data
            .get(self.position.offset())
            .copied()
            .ok_or(ParseError::UnexpectedEnd {
                position: self.position,
            })
    }

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    pub fn next(self) -> Self {
        self.advance(1)
    }

    /// Advance by `n` elements, saturating at the end of the input
    pub fn advance(self, n: usize) -> Self {
        Cursor::at(self.data, self.position.advance(n))
    }

    /// Check if the cursor is at the end of the sequence
    pub fn eos(&self) -> bool {
        self.position.offset() >= self.data.len()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Position one past the last element of the input
    pub fn end(&self) -> Position {
        Position::end_of(self.data)
    }

    /// Get the whole input this cursor reads from
    pub fn source(&self) -> &'code [T] {
        self.data
    }

    /// The unread part of the input
    pub fn remaining(&self) -> &'code [T] {
        &self.data[self.position.offset()..]
    }

    /// The input between `start` and this cursor's position
    ///
    /// `start` must come from the same input and not lie after this cursor;
    /// otherwise the slice is empty.
    pub fn slice_from(&self, start: Position) -> &'code [T] {
        let end = self.position.offset();
        let start = start.offset().min(end);
        &self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let data = b"hello\nworld";
        let cursor = Cursor::new(data);

        assert_eq!(cursor.value().unwrap(), b'h');

        let cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), b'e');
        assert_eq!(cursor.position(), Position::start().successor());
    }

    #[test]
    fn test_eos() {
        let data = b"ab";
        let mut cursor = Cursor::new(data);

        assert_eq!(cursor.value().unwrap(), b'a');
        cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), b'b');

        cursor = cursor.next();
        assert!(cursor.eos());
        assert_eq!(cursor.position(), cursor.end());
        assert!(matches!(
            cursor.value(),
            Err(ParseError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn test_empty_data() {
        let data: &[u8] = b"";
        let cursor = Cursor::new(data);

        assert!(cursor.eos());
        assert!(cursor.value().is_err());
    }

    #[test]
    fn test_next_saturates_at_end() {
        let data = b"x";
        let cursor = Cursor::new(data).next().next().next();
        assert!(cursor.eos());
        assert_eq!(cursor.position().offset(), 1);
    }

    #[test]
    fn test_advance_and_remaining() {
        let data = b"abcdef";
        let cursor = Cursor::new(data).advance(2);
        assert_eq!(cursor.remaining(), b"cdef");
        assert_eq!(cursor.advance(10).remaining(), b"");
    }

    #[test]
    fn test_slice_from() {
        let data = b"abcdef";
        let start = Cursor::new(data).next();
        let cursor = start.advance(3);
        assert_eq!(cursor.slice_from(start.position()), b"bcd");
        assert_eq!(start.slice_from(cursor.position()), b"");
    }

    #[test]
    fn test_copy_independence() {
        let data = [5u32, 10, 15, 20];
        let cursor = Cursor::new(&data);

        let saved_at_5 = cursor;
        let cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), 10);
        assert_eq!(saved_at_5.value().unwrap(), 5);

        let from_5 = saved_at_5.next();
        assert_eq!(from_5, cursor);
    }

    #[test]
    fn test_at_clamps_to_end() {
        let data = b"abc";
        let cursor = Cursor::at(data, Position::start().advance(99));
        assert!(cursor.eos());
        assert_eq!(cursor.position().offset(), 3);
    }
}
