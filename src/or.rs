use crate::cursor::StrCursor;
use crate::fail::FAILURE_EXPECTED;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser against the original input.
///
/// Backtracking is unconditional: whatever the first parser consumed before
/// failing is forgotten, because failures never move the caller's cursor.
/// The first parser always wins a tie; there is no longest-match rule.
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

/// Combine the expectations of two failed alternatives.
///
/// The `"<failure>"` expectation is the identity of this merge, so
/// `failure()` is a unit of `or` on both sides. `got` is taken from the
/// second branch, the most recent attempt.
pub(crate) fn merge_failures<'code, T>(
    first_expected: Cow<'static, str>,
    first_got: Cow<'static, str>,
    second_expected: Cow<'static, str>,
    second_got: Cow<'static, str>,
) -> ParseResult<'code, T> {
    if first_expected == FAILURE_EXPECTED {
        ParseResult::Fail {
            expected: second_expected,
            got: second_got,
        }
    } else if second_expected == FAILURE_EXPECTED {
        ParseResult::Fail {
            expected: first_expected,
            got: first_got,
        }
    } else {
        ParseResult::Fail {
            expected: format!("{} or {}", first_expected, second_expected).into(),
            got: second_got,
        }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.first.parse(cursor) {
            success @ ParseResult::Succeed { .. } => success,
            ParseResult::Fail {
                expected: first_expected,
                got: first_got,
            } => match self.second.parse(cursor) {
                success @ ParseResult::Succeed { .. } => success,
                ParseResult::Fail {
                    expected: second_expected,
                    got: second_got,
                } => merge_failures(first_expected, first_got, second_expected, second_got),
            },
        }
    }
}

/// Convenience function to create an Or parser
pub fn either<'code, P1, P2>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    Or::new(first, second)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
