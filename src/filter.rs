use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that applies a predicate to the output of another parser.
///
/// The wrapped parser runs first; an output rejected by the predicate turns
/// into a failure at the original position, reported with the caller's
/// message.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, message: impl Into<Cow<'static, str>>) -> Self {
        Filter {
            parser,
            predicate,
            message: message.into(),
        }
    }
}

impl<'code, P, F> Parser<'code> for Filter<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Succeed { output, remainder } => {
                if (self.predicate)(&output) {
                    ParseResult::Succeed { output, remainder }
                } else {
                    ParseResult::Fail {
                        expected: self.message.clone(),
                        got: cursor.excerpt(8),
                    }
                }
            }
            fail => fail,
        }
    }
}

/// Convenience function to create a Filter parser
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    message: impl Into<Cow<'static, str>>,
) -> Filter<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate, message)
}

/// Extension trait to add .filter() method support for parsers
pub trait FilterExt<'code>: Parser<'code> + Sized {
    fn filter<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate, message)
    }
}

/// Implement FilterExt for all parsers
impl<'code, P> FilterExt<'code> for P where P: Parser<'code> {}
