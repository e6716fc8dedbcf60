use crate::cursor::StrCursor;
use crate::label::LabelExt;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Primitive parser that consumes one character matching a predicate.
///
/// Every character-level parser in the crate bottoms out here: at end of
/// text it fails with got `"EOF"`; on a non-matching head it fails without
/// consuming; otherwise it succeeds with the head character.
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, char> {
        match cursor.value() {
            Some(c) if (self.predicate)(c) => ParseResult::Succeed {
                output: c,
                remainder: cursor.next(),
            },
            _ => ParseResult::Fail {
                expected: "satisfy".into(),
                got: cursor.describe_head(),
            },
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser that consumes any single character; fails only at end of text.
pub fn any_single() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|_| true).label("any_single")
}
