use crate::cursor::StrCursor;
use crate::result::ParseResult;

/// Core trait for parser combinators.
///
/// A parser is an immutable value wrapping a pure function from a cursor to
/// a [`ParseResult`]. Combinators build new parsers out of existing ones;
/// nothing is evaluated until [`parse`](Parser::parse) or
/// [`run`](Parser::run) is called.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position.
    ///
    /// A failing parser never consumes input: the caller still holds its
    /// cursor and may retry an alternative at the same position.
    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Run the parser against a complete input string.
    ///
    /// Parse failures are reported through the result, never by panicking.
    fn run(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parse(StrCursor::new(input))
    }

    /// Erase the concrete parser type behind a [`BoxedParser`].
    ///
    /// Used to put differently-typed parsers into one collection, e.g. for
    /// [`choice`](crate::choice::choice) or
    /// [`assemble`](crate::assemble::assemble).
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Sized + 'code,
    {
        Box::new(self)
    }
}

/// A type-erased parser.
///
/// Boxing flattens deeply nested combinator types and lets heterogeneous
/// parsers share a `Vec`, at the cost of one allocation and virtual
/// dispatch per combinator.
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + 'code>;

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'r, 'code, P> Parser<'code> for &'r P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;

    #[test]
    fn test_run_builds_the_cursor() {
        let parser = is_char('a');

        let result = parser.run("abc");
        assert!(result.is_success());
        assert_eq!(result.remainder(), "bc");
    }

    #[test]
    fn test_boxed_parser_delegates() {
        let parser: BoxedParser<char> = is_char('a').boxed();

        let result = parser.run("a");
        assert_eq!(result.output(), 'a');
    }

    #[test]
    fn test_reference_parser_delegates() {
        let parser = is_char('z');
        let by_ref = &parser;

        assert!(by_ref.run("z").is_success());
        assert!(by_ref.run("y").is_fail());
    }
}
