use crate::cursor::StrCursor;
use crate::keep_first::KeepFirst;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator for negative lookahead.
///
/// Succeeds with an empty string if the given parser fails at the current
/// position; fails if it succeeds. Never consumes input on either branch.
pub struct NotFollowedBy<P> {
    parser: P,
}

impl<P> NotFollowedBy<P> {
    pub fn new(parser: P) -> Self {
        NotFollowedBy { parser }
    }
}

impl<'code, P> Parser<'code> for NotFollowedBy<P>
where
    P: Parser<'code>,
{
    type Output = String;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, String> {
        match self.parser.parse(cursor) {
            ParseResult::Succeed { .. } => ParseResult::Fail {
                expected: "not_followed_by".into(),
                got: cursor.excerpt(8),
            },
            ParseResult::Fail { .. } => ParseResult::Succeed {
                output: String::new(),
                remainder: cursor,
            },
        }
    }
}

/// Convenience function to create a NotFollowedBy parser
pub fn not_followed_by<'code, P>(parser: P) -> NotFollowedBy<P>
where
    P: Parser<'code>,
{
    NotFollowedBy::new(parser)
}

/// Extension trait to add .not_followed_by() method support for parsers
pub trait NotFollowedByExt<'code>: Parser<'code> + Sized {
    /// Keep this parser's output, but only if `other` would fail at the
    /// remainder. `other`'s input is never consumed.
    fn not_followed_by<P>(self, other: P) -> KeepFirst<Self, NotFollowedBy<P>>
    where
        P: Parser<'code>,
    {
        KeepFirst::new(self, NotFollowedBy::new(other))
    }
}

/// Implement NotFollowedByExt for all parsers
impl<'code, P> NotFollowedByExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit_char;
    use crate::literal::is_string;

    #[test]
    fn test_succeeds_when_parser_fails() {
        let parser = not_followed_by(is_string("end"));

        let result = parser.run("start");
        assert!(result.is_success());
        assert_eq!(result.remainder(), "start");
        assert_eq!(result.output(), "");
    }

    #[test]
    fn test_fails_when_parser_matches() {
        let parser = not_followed_by(is_string("end"));

        let result = parser.run("endgame");
        assert!(result.is_fail());
        assert_eq!(result.expected(), "not_followed_by");
        assert_eq!(result.got(), "endgame");
    }

    #[test]
    fn test_zero_consumption_on_both_branches() {
        let guard = not_followed_by(is_string("no"));
        assert_eq!(guard.run("yes").remainder(), "yes");

        let result = guard.run("no");
        assert!(result.is_fail());
        // a failure never consumes either; the caller still holds its cursor
    }

    #[test]
    fn test_method_guards_a_match() {
        // a keyword must not run into a digit
        let parser = is_string("let").not_followed_by(digit_char());

        let result = parser.run("let x");
        assert_eq!(result.remainder(), " x");
        assert_eq!(result.output(), "let");

        assert!(parser.run("let1").is_fail());
    }

    #[test]
    fn test_succeeds_at_end_of_text() {
        let parser = not_followed_by(is_string("x"));

        assert!(parser.run("").is_success());
    }
}
