//! Unicode-aware character-class parsers.
//!
//! The [`ascii`](crate::ascii) classes are the defaults; these variants use
//! the full Unicode tables behind `char`'s own classification methods.

use crate::label::LabelExt;
use crate::parser::Parser;
use crate::satisfy::satisfy;

pub fn unicode_digit_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|c| c.is_numeric()).label("Unicode digit")
}

pub fn unicode_alpha_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|c| c.is_alphabetic()).label("Unicode letter")
}

pub fn unicode_alpha_num_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|c| c.is_alphanumeric()).label("Unicode alphanumeric")
}

pub fn unicode_whitespace_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(|c| c.is_whitespace()).label("Unicode whitespace")
}
