use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that runs two parsers in order and keeps the first
/// output, discarding the second.
pub struct KeepFirst<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> KeepFirst<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        KeepFirst { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for KeepFirst<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, P1::Output> {
        match self.first.parse(cursor) {
            ParseResult::Succeed { output, remainder } => match self.second.parse(remainder) {
                ParseResult::Succeed { remainder, .. } => ParseResult::Succeed {
                    output,
                    remainder,
                },
                ParseResult::Fail { expected, got } => ParseResult::Fail { expected, got },
            },
            fail => fail,
        }
    }
}

/// Convenience function to create a KeepFirst parser
pub fn keep_first<'code, P1, P2>(first: P1, second: P2) -> KeepFirst<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    KeepFirst::new(first, second)
}

/// Extension trait to add .then_ignore() method support for parsers
pub trait ThenIgnoreExt<'code>: Parser<'code> + Sized {
    fn then_ignore<P>(self, other: P) -> KeepFirst<Self, P>
    where
        P: Parser<'code>,
    {
        KeepFirst::new(self, other)
    }
}

/// Implement ThenIgnoreExt for all parsers
impl<'code, P> ThenIgnoreExt<'code> for P where P: Parser<'code> {}
