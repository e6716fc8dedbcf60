//! # Parsley - Parser Combinator Library
//!
//! A character-level parser combinator library for building parsers of
//! textual grammars out of small, composable pieces.
//!
//! Parsley parsers are plain values: primitives consume a character or a
//! literal, combinators wrap parsers into bigger ones, and nothing runs
//! until [`Parser::run`] is called with an input string. The library
//! emphasizes:
//!
//! - **Failure as data**: a parse attempt yields a [`ParseResult`] with
//!   either the output and the unconsumed remainder, or an
//!   `expected`/`got` diagnostic. Parse failures never panic.
//! - **Free backtracking**: alternatives always retry against the input
//!   where the failed branch started; failure never consumes.
//! - **Labelled diagnostics**: [`label`](label::LabelExt::label) renames
//!   the expectation of any failure, and the outermost label wins.
//! - **Recursive grammars**: [`recursive`](recursive::recursive) forward
//!   declarations with weak back-references, so grammars may refer to
//!   themselves without leaking.
//!
//! ```
//! use parsley::{between, digit_char, is_char, recursive, OrExt, Parser};
//!
//! // a digit wrapped in arbitrarily many parentheses
//! let cell = recursive();
//! let inner = cell.downgrade();
//! let parser = cell.recurse(digit_char().or(between(is_char('('), is_char(')'), inner)));
//!
//! assert_eq!(parser.run("((7))").output(), '7');
//! ```

pub mod append;
pub mod apply;
pub mod ascii;
pub mod assemble;
pub mod at_least_one;
pub mod between;
pub mod bind;
pub mod chars;
pub mod choice;
pub mod cursor;
pub mod eof;
pub mod error;
pub mod fail;
pub mod filter;
pub mod keep_first;
pub mod label;
pub mod literal;
pub mod many;
pub mod map;
pub mod monoid;
pub mod not_followed_by;
pub mod optional;
pub mod or;
pub mod parser;
pub mod predicate;
pub mod pure;
pub mod recursive;
pub mod repeat;
pub mod result;
pub mod satisfy;
pub mod sep_by;
pub mod sequence;
pub mod some;
pub mod unicode;

pub use append::{append, Append, AppendExt};
pub use apply::{apply, Apply, ApplyExt};
pub use ascii::{
    alpha_char, alpha_num_char, bin_digit_char, control_char, digit_char, hex_digit_char,
    lower_char, oct_digit_char, print_char, punctuation_char, space_char, upper_char,
};
pub use assemble::{assemble, collect, Assemble, Collect};
pub use at_least_one::{at_least_one, AtLeastOne};
pub use between::between;
pub use bind::{bind, Bind, BindExt};
pub use chars::{is_char, is_char_ci};
pub use choice::{choice, Choice};
pub use cursor::StrCursor;
pub use eof::{eof, Eof};
pub use error::Misuse;
pub use fail::{failure, Failure};
pub use filter::{filter, Filter, FilterExt};
pub use keep_first::{keep_first, KeepFirst, ThenIgnoreExt};
pub use label::{label, Label, LabelExt};
pub use literal::{is_string, Literal};
pub use many::{many, Many};
pub use map::{map, Map, MapExt};
pub use monoid::Monoid;
pub use not_followed_by::{not_followed_by, NotFollowedBy, NotFollowedByExt};
pub use optional::{optional, Optional, OptionalExt};
pub use or::{either, Or, OrExt};
pub use parser::{BoxedParser, Parser};
pub use pure::{pure, Pure};
pub use recursive::{recursive, Recursive, RecursiveRef};
pub use repeat::{repeat, repeat_list, Repeat, RepeatList};
pub use result::ParseResult;
pub use satisfy::{any_single, satisfy, Satisfy};
pub use sep_by::{sep_by, sep_by1, SepBy, SepBy1};
pub use sequence::{keep_second, sequence, Seq, SequenceExt};
pub use some::{some, Some};
pub use unicode::{
    unicode_alpha_char, unicode_alpha_num_char, unicode_digit_char, unicode_whitespace_char,
};
