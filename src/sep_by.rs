use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches one or more items separated by a
/// separator parser.
///
/// Parses one item, then zero or more `(separator, item)` pairs. A
/// separator without a following item is backtracked and left unconsumed,
/// so a trailing separator is not an error. Items are returned as a list;
/// separator outputs are discarded.
pub struct SepBy1<S, P> {
    separator: S,
    parser: P,
}

impl<S, P> SepBy1<S, P> {
    pub fn new(separator: S, parser: P) -> Self {
        SepBy1 { separator, parser }
    }
}

impl<'code, S, P> Parser<'code> for SepBy1<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, mut cursor) = match self.parser.parse(cursor) {
            ParseResult::Succeed { output, remainder } => (output, remainder),
            ParseResult::Fail { expected, got } => {
                return ParseResult::Fail { expected, got }
            }
        };

        let mut results = vec![first];
        loop {
            let checkpoint = cursor;

            let after_separator = match self.separator.parse(cursor) {
                ParseResult::Succeed { remainder, .. } => remainder,
                ParseResult::Fail { .. } => break,
            };
            match self.parser.parse(after_separator) {
                ParseResult::Succeed { output, remainder } => {
                    results.push(output);
                    cursor = remainder;
                    if cursor.position() <= checkpoint.position() {
                        break;
                    }
                }
                ParseResult::Fail { .. } => {
                    // backtrack over the separator as well
                    cursor = checkpoint;
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

/// Convenience function to create a SepBy1 parser
pub fn sep_by1<'code, S, P>(separator: S, parser: P) -> SepBy1<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    SepBy1::new(separator, parser)
}

/// Parser combinator that matches zero or more items separated by a
/// separator parser. Always succeeds; no items yields the empty list.
pub struct SepBy<S, P> {
    inner: SepBy1<S, P>,
}

impl<S, P> SepBy<S, P> {
    pub fn new(separator: S, parser: P) -> Self {
        SepBy {
            inner: SepBy1::new(separator, parser),
        }
    }
}

impl<'code, S, P> Parser<'code> for SepBy<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.inner.parse(cursor).alternative(ParseResult::Succeed {
            output: Vec::new(),
            remainder: cursor,
        })
    }
}

/// Convenience function to create a SepBy parser
pub fn sep_by<'code, S, P>(separator: S, parser: P) -> SepBy<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    SepBy::new(separator, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit_char;
    use crate::chars::is_char;

    #[test]
    fn test_sep_by_comma_digits() {
        let parser = sep_by(is_char(','), digit_char());

        let result = parser.run("1,2,3");
        assert_eq!(result.remainder(), "");
        assert_eq!(result.output(), vec!['1', '2', '3']);
    }

    #[test]
    fn test_sep_by_single_item() {
        let parser = sep_by(is_char(','), digit_char());

        let result = parser.run("7");
        assert_eq!(result.output(), vec!['7']);
    }

    #[test]
    fn test_sep_by_no_items_succeeds_empty() {
        let parser = sep_by(is_char(','), digit_char());

        let result = parser.run("abc");
        assert!(result.is_success());
        assert_eq!(result.remainder(), "abc");
        assert_eq!(result.output(), Vec::<char>::new());
    }

    #[test]
    fn test_sep_by_trailing_separator_left_unconsumed() {
        let parser = sep_by(is_char(','), digit_char());

        let result = parser.run("1,2,");
        assert_eq!(result.remainder(), ",");
        assert_eq!(result.output(), vec!['1', '2']);
    }

    #[test]
    fn test_sep_by1_requires_one_item() {
        let parser = sep_by1(is_char(','), digit_char());

        let result = parser.run("x");
        assert!(result.is_fail());
        assert_eq!(result.expected(), "digit");
    }

    #[test]
    fn test_sep_by1_many_items() {
        let parser = sep_by1(is_char(';'), digit_char());

        let result = parser.run("9;8;7 tail");
        assert_eq!(result.remainder(), " tail");
        assert_eq!(result.output(), vec!['9', '8', '7']);
    }
}
