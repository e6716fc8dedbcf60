use crate::cursor::StrCursor;
use crate::error::Misuse;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that matches an exact string literal.
///
/// Matching is byte-wise over UTF-8, which coincides with code-point
/// comparison on valid input; on success the cursor advances by the byte
/// length of the literal, which always lands on a character boundary.
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    /// # Panics
    /// Panics with [`Misuse::InvalidArgument`] if `expected` is empty.
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        if expected.is_empty() {
            panic!("{}", Misuse::InvalidArgument("string literal must be non-empty"));
        }
        Literal { expected }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = String;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, String> {
        if cursor.rest().starts_with(self.expected.as_ref()) {
            ParseResult::Succeed {
                output: self.expected.to_string(),
                remainder: cursor.advance(self.expected.len()),
            }
        } else {
            ParseResult::Fail {
                expected: format!("string({})", self.expected).into(),
                got: cursor.excerpt(self.expected.chars().count()),
            }
        }
    }
}

/// Convenience function to create a Literal parser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
