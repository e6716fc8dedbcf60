use crate::keep_first::{keep_first, KeepFirst};
use crate::label::Label;
use crate::parser::Parser;
use crate::sequence::{keep_second, Seq};

/// Parser that matches content between opening and closing delimiters,
/// returning just the content.
///
/// Composed as `keep_second(open, keep_first(inner, close))`, so a failure
/// anywhere in the bracketed shape reports as one unit.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub fn between<'code, P1, P2, P3>(
    open: P1,
    close: P2,
    inner: P3,
) -> Label<Seq<P1, KeepFirst<P3, P2>>>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    keep_second(open, keep_first(inner, close))
}
