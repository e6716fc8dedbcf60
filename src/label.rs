use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that renames the expectation of any failure produced
/// by the wrapped parser.
///
/// Success passes through untouched, and the `got` field of a failure is
/// preserved. Labels nest: the outermost label is the one the caller sees.
pub struct Label<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            name: name.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Fail { got, .. } => ParseResult::Fail {
                expected: self.name.clone(),
                got,
            },
            success => success,
        }
    }
}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, name: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, name)
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, name: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, name)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::is_digit;
    use crate::satisfy::satisfy;

    #[test]
    fn test_label_preserves_success() {
        let plain = satisfy(is_digit);
        let named = satisfy(is_digit).label("digit");

        let expected = plain.run("7x");
        let labelled = named.run("7x");
        assert_eq!(labelled.output(), expected.output());
        assert_eq!(named.run("7x").remainder(), "x");
    }

    #[test]
    fn test_label_replaces_expected() {
        let parser = satisfy(is_digit).label("digit");

        let result = parser.run("x");
        assert_eq!(result.expected(), "digit");
        // got is untouched
        assert_eq!(result.got(), "x");
    }

    #[test]
    fn test_outermost_label_wins() {
        let parser = satisfy(is_digit).label("inner").label("outer");

        let result = parser.run("x");
        assert_eq!(result.expected(), "outer");
    }

    #[test]
    fn test_function_syntax() {
        let parser = label(satisfy(is_digit), "digit");

        assert_eq!(parser.run("x").expected(), "digit");
    }
}
