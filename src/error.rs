use crate::atomic::Atomic;
use crate::position::Position;
use thiserror::Error;

/// Failure of a parser, carrying where and why it failed
///
/// Errors form a tree: [`ParseError::AlternativesExhausted`] is the only
/// variant built from two other errors, and it is only created when both
/// sides of an alternation fail. Every other variant is a leaf, except
/// [`ParseError::RepetitionBelowMinimum`] which wraps the single failure
/// that stopped a repetition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A matcher needed an element but the input was exhausted
    #[error("unexpected end of input at {position}")]
    UnexpectedEnd { position: Position },

    /// A literal element or sequence did not match
    #[error("{reason} at {position}")]
    LiteralMismatch { reason: String, position: Position },

    /// An element fell outside the accepted range or set
    #[error("{reason} at {position}")]
    RangeMismatch { reason: String, position: Position },

    /// Both branches of an alternation failed
    #[error("no alternative matched at {position}")]
    AlternativesExhausted {
        position: Position,
        left: Box<ParseError>,
        right: Box<ParseError>,
    },

    /// A repetition stopped before reaching its minimum count
    #[error("expected at least {min} repetitions but matched {matched} at {position}")]
    RepetitionBelowMinimum {
        position: Position,
        min: usize,
        matched: usize,
        #[source]
        cause: Box<ParseError>,
    },

    /// The parser succeeded without consuming the whole input
    #[error("unconsumed input: parsing stopped at {position} but input ends at {end}")]
    PartialMatch { position: Position, end: Position },

    /// A failure raised by a predicate, a conversion or an explicit `fail`
    #[error("{reason} at {position}")]
    Custom { reason: String, position: Position },
}

impl ParseError {
    /// Combine the failures of two alternatives tried at `position`
    pub fn alternatives(position: Position, left: ParseError, right: ParseError) -> Self {
        ParseError::AlternativesExhausted {
            position,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn custom(reason: impl Into<String>, position: Position) -> Self {
        ParseError::Custom {
            reason: reason.into(),
            position,
        }
    }

    /// Returns the position where this error occurred
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedEnd { position }
            | ParseError::LiteralMismatch { position, .. }
            | ParseError::RangeMismatch { position, .. }
            | ParseError::AlternativesExhausted { position, .. }
            | ParseError::RepetitionBelowMinimum { position, .. }
            | ParseError::PartialMatch { position, .. }
            | ParseError::Custom { position, .. } => *position,
        }
    }

    /// The failure reason without its position
    pub fn reason(&self) -> String {
        match self {
            ParseError::UnexpectedEnd { .. } => "unexpected end of input".to_string(),
            ParseError::LiteralMismatch { reason, .. }
            | ParseError::RangeMismatch { reason, .. }
            | ParseError::Custom { reason, .. } => reason.clone(),
            ParseError::AlternativesExhausted { .. } => "no alternative matched".to_string(),
            ParseError::RepetitionBelowMinimum { min, matched, .. } => {
                format!("expected at least {} repetitions but matched {}", min, matched)
            }
            ParseError::PartialMatch { end, .. } => {
                format!("unconsumed input before {}", end)
            }
        }
    }

    /// Flatten alternation branches into their leaf failures, left to right
    ///
    /// `RepetitionBelowMinimum` is a leaf here; its cause is reachable
    /// through [`std::error::Error::source`].
    pub fn leaves(&self) -> Vec<&ParseError> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(error) = stack.pop() {
            match error {
                ParseError::AlternativesExhausted { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
                leaf => leaves.push(leaf),
            }
        }
        leaves
    }

    /// The leaf failure that progressed furthest into the input
    ///
    /// When several leaves share the furthest position the leftmost
    /// alternative wins.
    pub fn furthest(&self) -> &ParseError {
        let mut best = self;
        for leaf in self.leaves() {
            if std::ptr::eq(best, self) || leaf.position() > best.position() {
                best = leaf;
            }
        }
        best
    }

    /// Render a multi-line diagnostic pointing into `input`
    pub fn report<T: Atomic>(&self, input: &[T]) -> String {
        let likely = self.furthest();
        let loc = CodeLoc::new(input, likely.position());
        let pos = loc.readable_position();
        let mut out = format!(
            "{} at line {}, offset {} (absolute position: {})\n",
            likely.reason(),
            pos.line,
            pos.element_offset,
            likely.position().offset()
        );
        if !std::ptr::eq(likely, self) {
            out.push_str(&format!("  while parsing: {}\n", self));
        }
        out.push('\n');
        for line in loc.context_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub element_offset: usize,
}

/// A position paired with the input it indexes, for human-readable reports
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code, T: Atomic> {
    code: &'code [T],
    loc: usize,
}

impl<'code, T: Atomic> CodeLoc<'code, T> {
    pub fn new(code: &'code [T], position: Position) -> Self {
        Self {
            code,
            loc: position.offset().min(code.len()),
        }
    }

    pub fn position(&self) -> Position {
        Position::start().advance(self.loc)
    }

    /// Line number (1-based) and element offset within that line
    ///
    /// Element offsets are reported rather than columns, since a column
    /// depends on encoding and rendering.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in self.code[..self.loc].iter().enumerate() {
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            element_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines before and after the error line, with a pointer under it
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;

        let mut lines = Vec::new();
        for (index, line) in self.code.split(|e| e.is_newline()).enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > last {
                break;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, T::describe_slice(line)));
            if number == pos.line {
                let pointer_offset = prefix.len() + pos.element_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }
        lines
    }
}
