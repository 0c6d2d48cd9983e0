//! # pcomb - Parser Combinator Engine
//!
//! Parsers are values that consume a prefix of an input slice and either
//! produce a tree together with the position where they stopped, or fail
//! with a structured [`ParseError`]. Small parsers combine into larger ones
//! through sequencing, ordered choice, mapping, binding and repetition.
//!
//! - **Generic input**: any `Copy + PartialEq` element type implementing
//!   [`Atomic`], bytes and chars included
//! - **Backtracking choice**: alternation always retries from the original
//!   position and failures of both branches are kept
//! - **Recursive grammars**: [`delay`] and [`recursive`] defer construction
//!   and build each parser once, safely across threads
//! - **Zero panics**: every failure is a `Result`
//!
//! ```
//! use pcomb::prelude::*;
//!
//! // key=value pairs separated by ';'
//! let key = range(b'a', b'z').some().recognize();
//! let value = range(b'0', b'9').some().recognize();
//! let pair = key.and_left(is(b'=')).and(value);
//! let pairs = separated_list(pair, is(b';'));
//!
//! let parsed = parse(&pairs, b"a=1;bc=23").unwrap();
//! assert_eq!(parsed, vec![(&b"a"[..], &b"1"[..]), (&b"bc"[..], &b"23"[..])]);
//! ```

pub mod and;
pub mod ascii;
pub mod atomic;
pub mod between;
pub mod bind;
pub mod cursor;
pub mod delay;
pub mod driver;
pub mod element;
pub mod error;
pub mod filter;
pub mod ignore;
pub mod literal;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod repeat;
pub mod separated_list;

pub use and::{And, AndExt, Both, Keep, Left, Neither, Right, and};
pub use atomic::Atomic;
pub use between::{Between, between};
pub use bind::{Bind, BindExt, bind};
pub use cursor::Cursor;
pub use delay::{Delay, delay, recursive};
pub use driver::parse;
pub use element::{
    Any, End, Fail, Is, OneOf, Range, Satisfy, Success, any, end, fail, is, none_of, one_of,
    range, satisfy, success,
};
pub use error::{CodeLoc, ParseError, ReadablePosition};
pub use filter::{FilterExt, FilterParser};
pub use ignore::{Ignore, IgnoreExt, ignore};
pub use literal::{Literal, literal};
pub use map::{Map, MapExt, TryMap, map};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{
    Choose, Either, KeepLeft, KeepNeither, KeepRight, Or, OrExt, Tagged, Unify, either, or,
};
pub use parser::{BoxedExt, BoxedParser, ParseResult, Parser};
pub use position::{Position, PositionExt, Recognize, Span, Spanned, recognize, spanned};
pub use repeat::{Repeat, RepeatExt, many, repeat, some};
pub use separated_list::{SeparatedList, separated_list};

/// Everything needed to write a grammar: the core types, the terminal and
/// combinator constructors, and every extension trait
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::bind::BindExt;
    pub use crate::filter::FilterExt;
    pub use crate::ignore::IgnoreExt;
    pub use crate::map::MapExt;
    pub use crate::or::{Either, OrExt};
    pub use crate::parser::BoxedExt;
    pub use crate::position::PositionExt;
    pub use crate::repeat::RepeatExt;

    pub use crate::between::between;
    pub use crate::delay::{Delay, delay, recursive};
    pub use crate::driver::parse;
    pub use crate::element::{any, end, fail, is, none_of, one_of, range, satisfy, success};
    pub use crate::literal::literal;
    pub use crate::not::not;
    pub use crate::separated_list::separated_list;

    pub use crate::atomic::Atomic;
    pub use crate::cursor::Cursor;
    pub use crate::error::ParseError;
    pub use crate::parser::{BoxedParser, ParseResult, Parser};
    pub use crate::position::{Position, Span};
}
