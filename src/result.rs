use crate::cursor::StrCursor;
use crate::error::Misuse;
use crate::monoid::Monoid;
use crate::parser::Parser;
use std::borrow::Cow;

/// The product of one parse attempt.
///
/// `Succeed` carries the parsed value and a cursor over the unconsumed
/// suffix of the input. `Fail` carries diagnostics only: `expected` names
/// the most specific label in scope and is never empty; `got` describes
/// what was found instead (at minimum the head character or `"EOF"`).
#[derive(Debug, Clone)]
pub enum ParseResult<'code, T> {
    Succeed {
        output: T,
        remainder: StrCursor<'code>,
    },
    Fail {
        expected: Cow<'static, str>,
        got: Cow<'static, str>,
    },
}

impl<'code, T> ParseResult<'code, T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Succeed { .. })
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, ParseResult::Fail { .. })
    }

    /// The parsed value.
    ///
    /// # Panics
    /// Panics with [`Misuse::WrongVariant`] on a `Fail`.
    pub fn output(self) -> T {
        match self {
            ParseResult::Succeed { output, .. } => output,
            ParseResult::Fail { .. } => {
                panic!("{}", Misuse::WrongVariant("output() called on a Fail"))
            }
        }
    }

    /// The unconsumed suffix of the input, always a suffix of what the
    /// parser was run on.
    ///
    /// # Panics
    /// Panics with [`Misuse::WrongVariant`] on a `Fail`.
    pub fn remainder(&self) -> &'code str {
        match self {
            ParseResult::Succeed { remainder, .. } => remainder.rest(),
            ParseResult::Fail { .. } => {
                panic!("{}", Misuse::WrongVariant("remainder() called on a Fail"))
            }
        }
    }

    /// The failure expectation; empty on a `Succeed`.
    pub fn expected(&self) -> &str {
        match self {
            ParseResult::Succeed { .. } => "",
            ParseResult::Fail { expected, .. } => expected,
        }
    }

    /// What the failing parser found; empty on a `Succeed`.
    pub fn got(&self) -> &str {
        match self {
            ParseResult::Succeed { .. } => "",
            ParseResult::Fail { got, .. } => got,
        }
    }

    /// Transform the output of a success; a failure passes through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<'code, U> {
        match self {
            ParseResult::Succeed { output, remainder } => ParseResult::Succeed {
                output: f(output),
                remainder,
            },
            ParseResult::Fail { expected, got } => ParseResult::Fail { expected, got },
        }
    }

    /// Keep this result if it is a success, otherwise take `other`.
    pub fn alternative(self, other: ParseResult<'code, T>) -> ParseResult<'code, T> {
        if self.is_success() {
            self
        } else {
            other
        }
    }

    /// Run `parser` on the remainder of a success; a failure passes through
    /// unchanged.
    pub fn continue_with<P>(self, parser: &P) -> ParseResult<'code, P::Output>
    where
        P: Parser<'code> + ?Sized,
    {
        match self {
            ParseResult::Succeed { remainder, .. } => parser.parse(remainder),
            ParseResult::Fail { expected, got } => ParseResult::Fail { expected, got },
        }
    }

    /// Concatenate two successful outputs through the output monoid.
    ///
    /// The combined remainder is `other`'s, since `other` is expected to
    /// have parsed the suffix this result left over. The first failure
    /// encountered wins.
    pub fn append(self, other: ParseResult<'code, T>) -> ParseResult<'code, T>
    where
        T: Monoid,
    {
        match (self, other) {
            (
                ParseResult::Succeed { output: first, .. },
                ParseResult::Succeed {
                    output: second,
                    remainder,
                },
            ) => ParseResult::Succeed {
                output: first.append(second),
                remainder,
            },
            (fail @ ParseResult::Fail { .. }, _) => fail,
            (_, fail @ ParseResult::Fail { .. }) => fail,
        }
    }
}
