//! # pegcomb - byte-level parser combinators
//!
//! pegcomb builds recursive-descent parsers over byte slices out of a handful
//! of composable pieces: single-byte primitives, sequencing, ordered choice,
//! repetition, optionality and lookahead.
//!
//! Every parser maps a [`ByteCursor`] to either a value plus the cursor to
//! resume from, or a [`ParseFailure`] located at the cursor it was entered at.
//! Failures carry nothing else, which keeps backtracking trivial: a combinator
//! that gives up hands its caller back the position it started from.
//!
//! ```
//! use pegcomb::apply::apply;
//! use pegcomb::byte::literal;
//! use pegcomb::many::many;
//! use pegcomb::seq::seq;
//! use pegcomb::Parser;
//!
//! let abc = apply(
//!     |bytes: Vec<u8>| String::from_utf8_lossy(&bytes).into_owned(),
//!     seq(vec![literal(b'a'), literal(b'b'), literal(b'c')]),
//! );
//! let (groups, position) = many(abc).parse_at(b"abcabc123abc", 0);
//! assert_eq!(groups.unwrap(), vec!["abc", "abc"]);
//! assert_eq!(position, 6);
//! ```

pub mod and;
pub mod apply;
pub mod ascii;
pub mod byte;
pub mod choice;
pub mod cursor;
pub mod error;
pub mod lazy;
pub mod many;
pub mod many1;
pub mod maybe;
pub mod not;
pub mod parser;
pub mod seq;

pub use and::{AndExt, and};
pub use apply::{ApplyExt, apply};
pub use ascii::digit;
pub use byte::{between_bytes, byte, literal};
pub use choice::choice;
pub use cursor::ByteCursor;
pub use error::{ParseFailure, ParseResult};
pub use lazy::lazy;
pub use many::many;
pub use many1::many1;
pub use maybe::{MaybeExt, maybe};
pub use not::{NotExt, not};
pub use parser::{BoxedExt, BoxedParser, Parser};
pub use seq::seq;
