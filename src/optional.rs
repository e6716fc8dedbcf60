use crate::cursor::StrCursor;
use crate::monoid::Monoid;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that recovers from failure with the empty output.
///
/// On failure the original input is kept and the output is the identity of
/// the output monoid, so the combined parser always succeeds. Outputs that
/// have no monoid (no identity element) are rejected at compile time; map
/// into `String` or `Vec` first.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
    P::Output: Monoid,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor).alternative(ParseResult::Succeed {
            output: Monoid::empty(),
            remainder: cursor,
        })
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
    P::Output: Monoid,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self>
    where
        Self::Output: Monoid,
    {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::is_string;
    use crate::many::many;
    use crate::satisfy::satisfy;

    #[test]
    fn test_optional_success_passes_through() {
        let parser = optional(is_string("yes"));

        let result = parser.run("yes!");
        assert_eq!(result.remainder(), "!");
        assert_eq!(result.output(), "yes");
    }

    #[test]
    fn test_optional_failure_yields_identity() {
        let parser = optional(is_string("yes"));

        let result = parser.run("no");
        assert_eq!(result.remainder(), "no");
        assert_eq!(result.output(), "");
    }

    #[test]
    fn test_optional_list_identity() {
        let parser = optional(many(satisfy(|c| c == 'a')));

        let result = parser.run("bbb");
        assert_eq!(result.output(), Vec::<char>::new());
    }

    #[test]
    fn test_optional_is_total() {
        let parser = is_string("tag").optional();

        for input in ["tag", "gat", "", "t"] {
            assert!(parser.run(input).is_success());
        }
    }
}
