use crate::cursor::StrCursor;
use crate::monoid::Monoid;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches one or more occurrences and folds the
/// outputs through the output monoid instead of collecting a list.
///
/// Shares the repetition rules of [`some`](crate::some::some): the first
/// parse must succeed, and a non-consuming success ends the loop.
pub struct AtLeastOne<P> {
    parser: P,
}

impl<P> AtLeastOne<P> {
    pub fn new(parser: P) -> Self {
        AtLeastOne { parser }
    }
}

impl<'code, P> Parser<'code> for AtLeastOne<P>
where
    P: Parser<'code>,
    P::Output: Monoid,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (mut output, mut cursor, progressed) = match self.parser.parse(cursor) {
            ParseResult::Succeed { output, remainder } => {
                let progressed = remainder.position() > cursor.position();
                (output, remainder, progressed)
            }
            fail => return fail,
        };

        if progressed {
            loop {
                match self.parser.parse(cursor) {
                    ParseResult::Succeed {
                        output: piece,
                        remainder,
                    } => {
                        let progressed = remainder.position() > cursor.position();
                        output = output.append(piece);
                        cursor = remainder;
                        if !progressed {
                            break;
                        }
                    }
                    ParseResult::Fail { .. } => break,
                }
            }
        }

        ParseResult::Succeed {
            output,
            remainder: cursor,
        }
    }
}

/// Convenience function to create an AtLeastOne parser
pub fn at_least_one<'code, P>(parser: P) -> AtLeastOne<P>
where
    P: Parser<'code>,
    P::Output: Monoid,
{
    AtLeastOne::new(parser)
}
