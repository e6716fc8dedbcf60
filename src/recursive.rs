use crate::cursor::StrCursor;
use crate::error::Misuse;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::sync::{Arc, OnceLock, Weak};

type Body<'code, O> = Arc<dyn Parser<'code, Output = O> + 'code>;
type Cell<'code, O> = OnceLock<Body<'code, O>>;

/// A forward-declared parser: a one-shot cell whose body is installed after
/// the parsers that refer to it have been built.
///
/// The owner holds the cell strongly; the handles obtained with
/// [`downgrade`](Recursive::downgrade) hold it weakly. A body that closes
/// over handles therefore never forms a strong reference cycle, and
/// tear-down stays deterministic when the owner is dropped.
///
/// Running the parser before [`recurse`](Recursive::recurse) fails with
/// expected `"unbound recursion"`; binding twice panics with
/// [`Misuse::DoubleBind`].
pub struct Recursive<'code, O> {
    cell: Arc<Cell<'code, O>>,
}

impl<'code, O> Recursive<'code, O> {
    pub fn new() -> Self {
        Recursive {
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// A weak handle for use inside the body.
    pub fn downgrade(&self) -> RecursiveRef<'code, O> {
        RecursiveRef {
            cell: Arc::downgrade(&self.cell),
        }
    }

    /// Install the body and return the now-bound parser.
    ///
    /// # Panics
    /// Panics with [`Misuse::DoubleBind`] if a body was already installed.
    pub fn recurse<P>(self, body: P) -> Self
    where
        P: Parser<'code, Output = O> + 'code,
    {
        if self.cell.set(Arc::new(body)).is_err() {
            panic!("{}", Misuse::DoubleBind);
        }
        self
    }
}

impl<'code, O> Default for Recursive<'code, O> {
    fn default() -> Self {
        Self::new()
    }
}

fn unbound<'code, O>(cursor: StrCursor<'code>) -> ParseResult<'code, O> {
    ParseResult::Fail {
        expected: "unbound recursion".into(),
        got: cursor.describe_head(),
    }
}

impl<'code, O> Parser<'code> for Recursive<'code, O> {
    type Output = O;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, O> {
        match self.cell.get() {
            Some(body) => body.parse(cursor),
            None => unbound(cursor),
        }
    }
}

/// Weak handle to a [`Recursive`] parser, the back-edge of a recursive
/// grammar. Parses through the owning cell; if the owner is gone or the
/// cell is still unbound, fails like an unbound recursion.
pub struct RecursiveRef<'code, O> {
    cell: Weak<Cell<'code, O>>,
}

impl<'code, O> Clone for RecursiveRef<'code, O> {
    fn clone(&self) -> Self {
        RecursiveRef {
            cell: Weak::clone(&self.cell),
        }
    }
}

impl<'code, O> Parser<'code> for RecursiveRef<'code, O> {
    type Output = O;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, O> {
        match self.cell.upgrade() {
            Some(cell) => match cell.get() {
                Some(body) => body.parse(cursor),
                None => unbound(cursor),
            },
            None => unbound(cursor),
        }
    }
}

/// Convenience function to create an unbound Recursive parser
pub fn recursive<'code, O>() -> Recursive<'code, O> {
    Recursive::new()
}
