/// Binary associative combination with an identity element.
///
/// This is the capability behind every output-merging combinator
/// ([`append`](crate::append::append), [`assemble`](crate::assemble::assemble),
/// [`at_least_one`](crate::at_least_one::at_least_one),
/// [`repeat`](crate::repeat::repeat), [`optional`](crate::optional::optional)):
/// two successful outputs merge with `append`, and a recovered failure
/// yields `empty`. Bounding those combinators by `Monoid` means outputs of
/// incompatible shapes are rejected by the compiler instead of at run time.
pub trait Monoid {
    fn empty() -> Self;
    fn append(self, other: Self) -> Self;
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }

    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn append(mut self, mut other: Self) -> Self {
        Vec::append(&mut self, &mut other);
        self
    }
}

impl Monoid for () {
    fn empty() -> Self {}

    fn append(self, _other: Self) -> Self {}
}
