use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Same repetition loop as [`many`](crate::many::many), but the first parse
/// must succeed.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, mut cursor, progressed) = match self.parser.parse(cursor) {
            ParseResult::Succeed { output, remainder } => {
                let progressed = remainder.position() > cursor.position();
                (output, remainder, progressed)
            }
            ParseResult::Fail { expected, got } => {
                return ParseResult::Fail { expected, got }
            }
        };

        let mut results = vec![first];
        if progressed {
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
                    ParseResult::Fail { .. } => break,
                }
            }
        }

        ParseResult::Succeed {
            output: results,
            remainder: cursor,
        }
    }
}

/// Convenience function to create a Some parser
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit_char;
    use crate::chars::is_char;
    use crate::pure::pure;

    #[test]
    fn test_some_zero_matches_fails() {
        let parser = some(is_char('a'));

        let result = parser.run("xyz");
        assert!(result.is_fail());
        assert_eq!(result.expected(), "char(a)");
    }

    #[test]
    fn test_some_one_match() {
        let parser = some(is_char('a'));

        let result = parser.run("abc");
        assert_eq!(result.remainder(), "bc");
        assert_eq!(result.output(), vec!['a']);
    }

    #[test]
    fn test_some_multiple_matches() {
        let parser = some(digit_char());

        let result = parser.run("123x");
        assert_eq!(result.remainder(), "x");
        assert_eq!(result.output(), vec!['1', '2', '3']);
    }

    #[test]
    fn test_some_empty_input_fails() {
        let parser = some(is_char('a'));

        let result = parser.run("");
        assert!(result.is_fail());
        assert_eq!(result.got(), "EOF");
    }

    #[test]
    fn test_some_halts_on_non_consuming_parser() {
        let parser = some(pure('x'));

        let result = parser.run("abc");
        assert!(result.is_success());
        assert_eq!(result.remainder(), "abc");
        assert_eq!(result.output(), vec!['x']);
    }
}
