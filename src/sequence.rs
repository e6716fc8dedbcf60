use crate::cursor::StrCursor;
use crate::label::{Label, LabelExt};
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that runs two parsers in order and keeps the second
/// output.
///
/// The first failure wins; the second parser starts on the first's
/// remainder.
pub struct Seq<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Seq<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Seq { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Seq<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, P2::Output> {
        self.first.parse(cursor).continue_with(&self.second)
    }
}

/// Convenience function to create a Seq parser
pub fn sequence<'code, P1, P2>(first: P1, second: P2) -> Seq<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Seq::new(first, second)
}

/// Like [`sequence`], labelled so failures read as one unit.
pub fn keep_second<'code, P1, P2>(first: P1, second: P2) -> Label<Seq<P1, P2>>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    sequence(first, second).label("keep_second")
}

/// Extension trait to add .sequence() method support for parsers
pub trait SequenceExt<'code>: Parser<'code> + Sized {
    fn sequence<P>(self, other: P) -> Seq<Self, P>
    where
        P: Parser<'code>,
    {
        Seq::new(self, other)
    }
}

/// Implement SequenceExt for all parsers
impl<'code, P> SequenceExt<'code> for P where P: Parser<'code> {}
