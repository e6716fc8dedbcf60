use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that succeeds only at end of text, consuming nothing.
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, ()> {
        if cursor.is_end() {
            ParseResult::Succeed {
                output: (),
                remainder: cursor,
            }
        } else {
            ParseResult::Fail {
                expected: "EOF".into(),
                got: cursor.describe_head(),
            }
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::keep_first::ThenIgnoreExt;

    #[test]
    fn test_eof_on_empty_input() {
        let result = eof().run("");
        assert!(result.is_success());
        assert_eq!(result.remainder(), "");
    }

    #[test]
    fn test_eof_with_input_left() {
        let result = eof().run("x");
        assert!(result.is_fail());
        assert_eq!(result.expected(), "EOF");
        assert_eq!(result.got(), "x");
    }

    #[test]
    fn test_eof_terminates_a_grammar() {
        let parser = is_char('a').then_ignore(eof());

        assert_eq!(parser.run("a").output(), 'a');
        assert!(parser.run("ab").is_fail());
    }
}
