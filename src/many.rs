use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// The loop is iterative, so long inputs cannot overflow the stack. An
/// iteration that succeeds without consuming input keeps that output and
/// ends the repetition; without this guard a non-consuming parser would
/// match forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut cursor = cursor;

        loop {
            match self.parser.parse(cursor) {
                ParseResult::Succeed { output, remainder } => {
                    let progressed = remainder.position() > cursor.position();
                    results.push(output);
                    cursor = remainder;
                    if !progressed {
                        break;
                    }
                }
                ParseResult::Fail { .. } => {
                    // zero or more: the first failure ends the repetition
                    break;
                }
            }
        }

        ParseResult::Succeed {
            output: results,
            remainder: cursor,
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::pure::pure;

    #[test]
    fn test_many_zero_matches() {
        let parser = many(is_char('a'));

        let result = parser.run("xyz");
        assert_eq!(result.remainder(), "xyz");
        assert_eq!(result.output(), Vec::<char>::new());
    }

    #[test]
    fn test_many_multiple_matches() {
        let parser = many(is_char('a'));

        let result = parser.run("aaabcd");
        assert_eq!(result.remainder(), "bcd");
        assert_eq!(result.output(), vec!['a', 'a', 'a']);
    }

    #[test]
    fn test_many_consumes_whole_input() {
        let parser = many(is_char('a'));

        let result = parser.run("aaaa");
        assert_eq!(result.remainder(), "");
        assert_eq!(result.output().len(), 4);
    }

    #[test]
    fn test_many_empty_input() {
        let parser = many(is_char('a'));

        let result = parser.run("");
        assert_eq!(result.output(), Vec::<char>::new());
    }

    #[test]
    fn test_many_halts_on_non_consuming_parser() {
        let parser = many(pure('x'));

        let result = parser.run("abc");
        assert!(result.is_success());
        assert_eq!(result.remainder(), "abc");
        assert_eq!(result.output(), vec!['x']);
    }

    #[test]
    fn test_many_long_input_terminates() {
        let input = "a".repeat(100_000);
        let parser = many(is_char('a'));

        let result = parser.run(&input);
        assert_eq!(result.output().len(), 100_000);
    }
}
