use crate::label::LabelExt;
use crate::parser::Parser;
use crate::predicate::{is_equal, or_pred};
use crate::satisfy::satisfy;

/// Parser that matches one specific character.
pub fn is_char(expected: char) -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_equal(expected)).label(format!("char({})", expected))
}

/// Parser that matches one specific character, ignoring ASCII case.
///
/// The output preserves the case actually present in the input.
pub fn is_char_ci(expected: char) -> impl for<'code> Parser<'code, Output = char> {
    let lower = expected.to_ascii_lowercase();
    let upper = expected.to_ascii_uppercase();
    satisfy(or_pred(is_equal(lower), is_equal(upper)))
        .label(format!("char_ci({})", expected))
}
