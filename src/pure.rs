use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that always succeeds with a copy of the given value, consuming
/// nothing.
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, T> {
        ParseResult::Succeed {
            output: self.value.clone(),
            remainder: cursor,
        }
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}
