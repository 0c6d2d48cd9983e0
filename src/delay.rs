use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, ParseResult, Parser};
use log::trace;
use once_cell::sync::OnceCell;
use std::sync::{Arc, Weak};

type Producer<'code, T, O> = Box<dyn Fn() -> BoxedParser<'code, T, O> + Send + Sync + 'code>;

/// The write-once cell behind a [`Delay`]
struct Thunk<'code, T, O> {
    producer: Producer<'code, T, O>,
    parser: OnceCell<BoxedParser<'code, T, O>>,
}

impl<'code, T, O> Thunk<'code, T, O> {
    fn new(producer: Producer<'code, T, O>) -> Self {
        Thunk {
            producer,
            parser: OnceCell::new(),
        }
    }

    /// Build the parser on first use; concurrent first uses wait for one build
    fn force(&self) -> &BoxedParser<'code, T, O> {
        self.parser.get_or_init(|| {
            trace!("building delayed parser");
            (self.producer)()
        })
    }
}

enum Handle<'code, T, O> {
    Strong(Arc<Thunk<'code, T, O>>),
    /// Self-reference from inside a [`recursive`] definition
    Weak(Weak<Thunk<'code, T, O>>),
}

/// A parser whose construction is deferred until it is first used
///
/// The producer runs at most once per `Delay`; the parser it returns is
/// cached and every later call, from any clone of the handle, dispatches to
/// it. Only construction is memoized. Parse results are never cached, so
/// running the same `Delay` twice at one position does the work twice.
///
/// This breaks the infinite construction that a recursive grammar would
/// otherwise cause:
///
/// ```
/// use pcomb::prelude::*;
///
/// // nesting := "(" nesting? ")"
/// fn nesting<'code>() -> Delay<'code, u8, usize> {
///     delay(|| {
///         is(b'(')
///             .and_right(nesting().optional())
///             .and_left(is(b')'))
///             .map(|inner| inner.map_or(1, |depth| depth + 1))
///     })
/// }
///
/// assert_eq!(parse(&nesting(), b"((()))").unwrap(), 3);
/// assert!(parse(&nesting(), b"(()").is_err());
/// ```
///
/// Left recursion is not handled: a definition that reaches itself again
/// without consuming input recurses until the stack overflows.
pub struct Delay<'code, T, O> {
    thunk: Handle<'code, T, O>,
}

impl<'code, T, O> Clone for Delay<'code, T, O> {
    fn clone(&self) -> Self {
        let thunk = match &self.thunk {
            Handle::Strong(thunk) => Handle::Strong(Arc::clone(thunk)),
            Handle::Weak(thunk) => Handle::Weak(Weak::clone(thunk)),
        };
        Delay { thunk }
    }
}

impl<'code, T, O> Delay<'code, T, O> {
    /// Whether the producer has already run
    pub fn is_built(&self) -> bool {
        match &self.thunk {
            Handle::Strong(thunk) => thunk.parser.get().is_some(),
            Handle::Weak(thunk) => thunk
                .upgrade()
                .is_some_and(|thunk| thunk.parser.get().is_some()),
        }
    }
}

impl<'code, T, O> Parser<'code> for Delay<'code, T, O>
where
    T: Atomic + 'code,
{
    type Element = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, O, T> {
        match &self.thunk {
            Handle::Strong(thunk) => thunk.force().parse(cursor),
            Handle::Weak(thunk) => match thunk.upgrade() {
                Some(thunk) => thunk.force().parse(cursor),
                None => Err(ParseError::custom(
                    "recursive parser used after its definition was dropped",
                    cursor.position(),
                )),
            },
        }
    }
}

/// Defer building a parser until it is first used
pub fn delay<'code, T, O, F, P>(producer: F) -> Delay<'code, T, O>
where
    T: Atomic + 'code,
    F: Fn() -> P + Send + Sync + 'code,
    P: Parser<'code, Element = T, Output = O> + Send + Sync + 'code,
{
    let producer: Producer<'code, T, O> = Box::new(move || Box::new(producer()));
    Delay {
        thunk: Handle::Strong(Arc::new(Thunk::new(producer))),
    }
}

/// Define a self-referential parser
///
/// `definition` receives a handle to the parser being defined and runs once,
/// on first use. The handle dispatches to the same cached parser as the
/// returned `Delay`; it holds only a weak reference, so the definition does
/// not keep itself alive.
///
/// ```
/// use pcomb::prelude::*;
///
/// // list := "[" (list ("," list)*)? "]", counting the lists
/// let lists = recursive(|list: Delay<'_, u8, usize>| {
///     let items = separated_list(list, is(b',')).optional();
///     between(is(b'['), items, is(b']'))
///         .map(|items| 1 + items.map_or(0, |counts| counts.iter().sum::<usize>()))
/// });
///
/// assert_eq!(parse(&lists, b"[[],[[]]]").unwrap(), 4);
/// ```
pub fn recursive<'code, T, O, F, P>(definition: F) -> Delay<'code, T, O>
where
    T: Atomic + 'code,
    O: 'code,
    F: Fn(Delay<'code, T, O>) -> P + Send + Sync + 'code,
    P: Parser<'code, Element = T, Output = O> + Send + Sync + 'code,
{
    let thunk = Arc::new_cyclic(|this: &Weak<Thunk<'code, T, O>>| {
        let this = Weak::clone(this);
        let producer: Producer<'code, T, O> = Box::new(move || {
            let handle = Delay {
                thunk: Handle::Weak(Weak::clone(&this)),
            };
            Box::new(definition(handle))
        });
        Thunk::new(producer)
    });
    Delay {
        thunk: Handle::Strong(thunk),
    }
}
