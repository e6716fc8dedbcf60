use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that parses a unary function, then its argument, and
/// applies one to the other.
///
/// Failure semantics match [`sequence`](crate::sequence::sequence): the
/// first failure wins and the argument parser starts on the function
/// parser's remainder.
pub struct Apply<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply { function, argument }
    }
}

impl<'code, PF, PA, B> Parser<'code> for Apply<PF, PA>
where
    PF: Parser<'code>,
    PA: Parser<'code>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    type Output = B;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, B> {
        match self.function.parse(cursor) {
            ParseResult::Succeed {
                output: function,
                remainder,
            } => self.argument.parse(remainder).map(function),
            ParseResult::Fail { expected, got } => ParseResult::Fail { expected, got },
        }
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PA>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser<'code>,
    PA: Parser<'code>,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() method support for parsers
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PA>(self, argument: PA) -> Apply<Self, PA>
    where
        PA: Parser<'code>,
    {
        Apply::new(self, argument)
    }
}

/// Implement ApplyExt for all parsers
impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}
