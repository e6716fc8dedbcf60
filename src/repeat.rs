use crate::cursor::StrCursor;
use crate::monoid::Monoid;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches exactly `count` occurrences and folds the
/// outputs through the output monoid.
///
/// `count` of zero is legal and succeeds with the monoidal identity without
/// consuming input.
pub struct Repeat<P> {
    count: usize,
    parser: P,
}

impl<P> Repeat<P> {
    pub fn new(count: usize, parser: P) -> Self {
        Repeat { count, parser }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
    P::Output: Monoid,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut output = <P::Output as Monoid>::empty();
        let mut cursor = cursor;

        for _ in 0..self.count {
            match self.parser.parse(cursor) {
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

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(count: usize, parser: P) -> Repeat<P>
where
    P: Parser<'code>,
    P::Output: Monoid,
{
    Repeat::new(count, parser)
}

/// Parser combinator that matches exactly `count` occurrences and collects
/// the outputs in a list.
pub struct RepeatList<P> {
    count: usize,
    parser: P,
}

impl<P> RepeatList<P> {
    pub fn new(count: usize, parser: P) -> Self {
        RepeatList { count, parser }
    }
}

impl<'code, P> Parser<'code> for RepeatList<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut outputs = Vec::with_capacity(self.count);
        let mut cursor = cursor;

        for _ in 0..self.count {
            match self.parser.parse(cursor) {
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

/// Convenience function to create a RepeatList parser
pub fn repeat_list<'code, P>(count: usize, parser: P) -> RepeatList<P>
where
    P: Parser<'code>,
{
    RepeatList::new(count, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit_char;
    use crate::map::MapExt;

    #[test]
    fn test_repeat_exact_count() {
        let parser = repeat(3, digit_char().map(String::from));

        let result = parser.run("12345");
        assert_eq!(result.remainder(), "45");
        assert_eq!(result.output(), "123");
    }

    #[test]
    fn test_repeat_too_few() {
        let parser = repeat(3, digit_char().map(String::from));

        let result = parser.run("12x");
        assert!(result.is_fail());
        assert_eq!(result.expected(), "digit");
        assert_eq!(result.got(), "x");
    }

    #[test]
    fn test_repeat_zero_is_identity() {
        let parser = repeat(0, digit_char().map(String::from));

        let result = parser.run("abc");
        assert_eq!(result.remainder(), "abc");
        assert_eq!(result.output(), "");
    }

    #[test]
    fn test_repeat_consumption_is_sum_of_runs() {
        let parser = repeat(4, digit_char().map(String::from));

        let result = parser.run("98765");
        assert_eq!(result.remainder(), "5");
    }

    #[test]
    fn test_repeat_list_collects() {
        let parser = repeat_list(2, digit_char());

        let result = parser.run("42x");
        assert_eq!(result.remainder(), "x");
        assert_eq!(result.output(), vec!['4', '2']);
    }

    #[test]
    fn test_repeat_list_zero_is_empty() {
        let parser = repeat_list(0, digit_char());

        let result = parser.run("1");
        assert_eq!(result.remainder(), "1");
        assert_eq!(result.output(), Vec::<char>::new());
    }
}
