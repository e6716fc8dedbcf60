use crate::cursor::StrCursor;
use crate::error::Misuse;
use crate::monoid::Monoid;
use crate::parser::{BoxedParser, Parser};
use crate::result::ParseResult;

/// Parser combinator that runs a list of parsers in order and folds their
/// outputs through the output monoid.
pub struct Assemble<'code, O> {
    parsers: Vec<BoxedParser<'code, O>>,
}

impl<'code, O> Assemble<'code, O> {
    /// # Panics
    /// Panics with [`Misuse::InvalidArgument`] if `parsers` is empty.
    pub fn new(parsers: Vec<BoxedParser<'code, O>>) -> Self {
        if parsers.is_empty() {
            panic!("{}", Misuse::InvalidArgument("assemble requires at least one parser"));
        }
        Assemble { parsers }
    }
}

impl<'code, O> Parser<'code> for Assemble<'code, O>
where
    O: Monoid,
{
    type Output = O;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, O> {
        let mut output = O::empty();
        let mut cursor = cursor;

        for parser in &self.parsers {
            match parser.parse(cursor) {
                ParseResult::Succeed {
                    output: piece,
                    remainder,
                } => {
                    output = output.append(piece);
                    cursor = remainder;
                }
                fail @ ParseResult::Fail { .. } => return fail,
            }
        }

        ParseResult::Succeed {
            output,
            remainder: cursor,
        }
    }
}

/// Convenience function to create an Assemble parser
pub fn assemble<'code, O>(parsers: Vec<BoxedParser<'code, O>>) -> Assemble<'code, O>
where
    O: Monoid,
{
    Assemble::new(parsers)
}

/// Parser combinator like [`Assemble`], but each output is wrapped in a
/// singleton list first, so the combined output is a `Vec` of the pieces.
pub struct Collect<'code, O> {
    parsers: Vec<BoxedParser<'code, O>>,
}

impl<'code, O> Collect<'code, O> {
    /// # Panics
    /// Panics with [`Misuse::InvalidArgument`] if `parsers` is empty.
    pub fn new(parsers: Vec<BoxedParser<'code, O>>) -> Self {
        if parsers.is_empty() {
            panic!("{}", Misuse::InvalidArgument("collect requires at least one parser"));
        }
        Collect { parsers }
    }
}

impl<'code, O> Parser<'code> for Collect<'code, O> {
    type Output = Vec<O>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Vec<O>> {
        let mut outputs = Vec::with_capacity(self.parsers.len());
        let mut cursor = cursor;

        for parser in &self.parsers {
            match parser.parse(cursor) {
                ParseResult::Succeed { output, remainder } => {
                    outputs.push(output);
                    cursor = remainder;
                }
                ParseResult::Fail { expected, got } => {
                    return ParseResult::Fail { expected, got }
                }
            }
        }

        ParseResult::Succeed {
            output: outputs,
            remainder: cursor,
        }
    }
}

/// Convenience function to create a Collect parser
pub fn collect<'code, O>(parsers: Vec<BoxedParser<'code, O>>) -> Collect<'code, O> {
    Collect::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::literal::is_string;
    use crate::map::MapExt;

    #[test]
    fn test_assemble_strings() {
        let parser = assemble(vec![
            is_string("foo").boxed(),
            is_string("-").boxed(),
            is_string("bar").boxed(),
        ]);

        let result = parser.run("foo-bar");
        assert_eq!(result.remainder(), "");
        assert_eq!(result.output(), "foo-bar");
    }

    #[test]
    fn test_assemble_failure_propagates() {
        let parser = assemble(vec![is_string("a").boxed(), is_string("b").boxed()]);

        let result = parser.run("ax");
        assert!(result.is_fail());
        assert_eq!(result.expected(), "string(b)");
    }

    #[test]
    #[should_panic(expected = "invalid argument: assemble requires at least one parser")]
    fn test_assemble_empty_panics() {
        assemble(Vec::<crate::parser::BoxedParser<String>>::new());
    }

    #[test]
    fn test_collect_wraps_each_output() {
        let parser = collect(vec![
            is_char('a').boxed(),
            is_char('b').boxed(),
            is_char('c').boxed(),
        ]);

        let result = parser.run("abc");
        assert_eq!(result.output(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_collect_mixed_sources() {
        let parser = collect(vec![
            is_string("key").boxed(),
            is_char('=').map(|c| c.to_string()).boxed(),
            is_string("value").boxed(),
        ]);

        let result = parser.run("key=value");
        assert_eq!(
            result.output(),
            vec!["key".to_string(), "=".to_string(), "value".to_string()]
        );
    }

    #[test]
    #[should_panic(expected = "invalid argument: collect requires at least one parser")]
    fn test_collect_empty_panics() {
        collect(Vec::<crate::parser::BoxedParser<char>>::new());
    }
}
