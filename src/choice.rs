use crate::cursor::StrCursor;
use crate::fail::FAILURE_EXPECTED;
use crate::parser::{BoxedParser, Parser};
use crate::result::ParseResult;
use std::borrow::Cow;

// Alternatives of arbitrary arity are held as boxed trait objects. Chaining
// `.or()` instead would nest Or<Or<Or<...>>> types, which gets unwieldy fast
// and cannot be built from a runtime collection at all.

/// Parser combinator that tries each alternative in order against the same
/// input and returns the first success.
///
/// Behaves as a left fold of [`or`](crate::or::OrExt::or) seeded with
/// [`failure`](crate::fail::failure): an empty list always fails with the
/// `"<failure>"` expectation, and when every alternative fails the reported
/// expectation joins the branches with `" or "`.
pub struct Choice<'code, O> {
    parsers: Vec<BoxedParser<'code, O>>,
}

impl<'code, O> Choice<'code, O> {
    pub fn new(parsers: Vec<BoxedParser<'code, O>>) -> Self {
        Choice { parsers }
    }
}

impl<'code, O> Parser<'code> for Choice<'code, O> {
    type Output = O;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, O> {
        let mut merged: Option<Cow<'static, str>> = None;
        let mut last_got = cursor.describe_head();

        for parser in &self.parsers {
            match parser.parse(cursor) {
                success @ ParseResult::Succeed { .. } => return success,
                ParseResult::Fail { expected, got } => {
                    if expected != FAILURE_EXPECTED {
                        merged = Some(match merged {
                            None => expected,
                            Some(previous) => {
                                format!("{} or {}", previous, expected).into()
                            }
                        });
                    }
                    last_got = got;
                }
            }
        }

        ParseResult::Fail {
            expected: merged.unwrap_or(Cow::Borrowed(FAILURE_EXPECTED)),
            got: last_got,
        }
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, O>(parsers: Vec<BoxedParser<'code, O>>) -> Choice<'code, O> {
    Choice::new(parsers)
}
