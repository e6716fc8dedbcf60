use crate::cursor::StrCursor;
use crate::monoid::Monoid;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that runs two parsers in order and concatenates their
/// outputs through the output monoid.
pub struct Append<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Append<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Append { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Append<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
    P1::Output: Monoid,
{
    type Output = P1::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let first = self.first.parse(cursor);
        let remainder = match &first {
            ParseResult::Succeed { remainder, .. } => *remainder,
            ParseResult::Fail { .. } => return first,
        };
        first.append(self.second.parse(remainder))
    }
}

/// Convenience function to create an Append parser
pub fn append<'code, P1, P2>(first: P1, second: P2) -> Append<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
    P1::Output: Monoid,
{
    Append::new(first, second)
}

/// Extension trait to add .append() method support for parsers
pub trait AppendExt<'code>: Parser<'code> + Sized {
    fn append<P>(self, other: P) -> Append<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
        Self::Output: Monoid,
    {
        Append::new(self, other)
    }
}

/// Implement AppendExt for all parsers
impl<'code, P> AppendExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::is_string;

    #[test]
    fn test_append_strings() {
        let parser = append(is_string("foo"), is_string("bar"));

        let result = parser.run("foobar!");
        assert_eq!(result.remainder(), "!");
        assert_eq!(result.output(), "foobar");
    }

    #[test]
    fn test_append_first_failure_wins() {
        let parser = is_string("foo").append(is_string("bar"));

        let result = parser.run("fXobar");
        assert!(result.is_fail());
        assert_eq!(result.expected(), "string(foo)");
    }

    #[test]
    fn test_append_second_failure() {
        let parser = is_string("foo").append(is_string("bar"));

        let result = parser.run("fooquux");
        assert!(result.is_fail());
        assert_eq!(result.expected(), "string(bar)");
    }
}
