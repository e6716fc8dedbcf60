//! Character-class parsers with ASCII semantics.
//!
//! Each is [`satisfy`](crate::satisfy::satisfy) over the matching predicate
//! from [`predicate`](crate::predicate), labelled with the class name.
//! Unicode-aware variants live in [`unicode`](crate::unicode).

use crate::label::LabelExt;
use crate::parser::Parser;
use crate::predicate::{
    is_alpha, is_alpha_num, is_bin_digit, is_control, is_digit, is_hex_digit, is_lower,
    is_oct_digit, is_printable, is_punctuation, is_space, is_upper,
};
use crate::satisfy::satisfy;

pub fn digit_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_digit).label("digit")
}

pub fn alpha_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_alpha).label("letter")
}

pub fn alpha_num_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_alpha_num).label("alphanumeric")
}

pub fn upper_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_upper).label("uppercase letter")
}

pub fn lower_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_lower).label("lowercase letter")
}

pub fn hex_digit_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_hex_digit).label("hex digit")
}

pub fn oct_digit_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_oct_digit).label("octal digit")
}

pub fn bin_digit_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_bin_digit).label("binary digit")
}

pub fn control_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_control).label("control character")
}

pub fn print_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_printable).label("printable character")
}

pub fn punctuation_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_punctuation).label("punctuation")
}

pub fn space_char() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_space).label("whitespace")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_char() {
        assert_eq!(digit_char().run("7x").output(), '7');

        let result = digit_char().run("x");
        assert!(result.is_fail());
        assert_eq!(result.expected(), "digit");
        assert_eq!(result.got(), "x");
    }

    #[test]
    fn test_digit_char_is_ascii_only() {
        // Arabic-Indic digit is numeric but not an ASCII digit
        assert!(digit_char().run("٥").is_fail());
    }

    #[test]
    fn test_letter_cases() {
        assert_eq!(alpha_char().run("q").output(), 'q');
        assert_eq!(upper_char().run("Q").output(), 'Q');
        assert!(upper_char().run("q").is_fail());
        assert_eq!(lower_char().run("q").output(), 'q');
        assert!(lower_char().run("Q").is_fail());
    }

    #[test]
    fn test_alpha_num_char() {
        assert!(alpha_num_char().run("a").is_success());
        assert!(alpha_num_char().run("8").is_success());
        assert!(alpha_num_char().run("_").is_fail());
    }

    #[test]
    fn test_number_base_classes() {
        assert_eq!(hex_digit_char().run("F").output(), 'F');
        assert!(hex_digit_char().run("g").is_fail());

        assert_eq!(oct_digit_char().run("7").output(), '7');
        assert!(oct_digit_char().run("8").is_fail());

        assert_eq!(bin_digit_char().run("1").output(), '1');
        assert!(bin_digit_char().run("2").is_fail());
    }

    #[test]
    fn test_misc_classes() {
        assert_eq!(control_char().run("\n").output(), '\n');
        assert!(control_char().run("a").is_fail());

        assert_eq!(print_char().run(" ").output(), ' ');
        assert!(print_char().run("\t").is_fail());

        assert_eq!(punctuation_char().run("!").output(), '!');
        assert_eq!(punctuation_char().run(".").expected(), "");

        assert_eq!(space_char().run(" x").remainder(), "x");
        assert_eq!(space_char().run("y").expected(), "whitespace");
    }

    #[test]
    fn test_class_failures_report_eof() {
        assert_eq!(digit_char().run("").got(), "EOF");
        assert_eq!(alpha_char().run("").got(), "EOF");
    }
}
