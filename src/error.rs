use thiserror::Error;

/// Misuse of the library API.
///
/// These are programmer errors, not parse failures: they indicate a call
/// that can never be correct, and they are raised by panicking with the
/// rendered message at the misuse site. Parse failures never panic; they
/// flow through [`crate::ParseResult::Fail`].
#[derive(Debug, Error)]
pub enum Misuse {
    /// A constructor received an argument outside its contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An accessor was called on the wrong `ParseResult` variant.
    #[error("wrong variant: {0}")]
    WrongVariant(&'static str),

    /// `recurse` was called on an already-bound recursion cell.
    #[error("recursive parser bound twice")]
    DoubleBind,
}
