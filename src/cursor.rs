use std::borrow::Cow;

/// A lightweight view into source text: the full string plus the current
/// read position.
///
/// Cursors are `Copy` and never mutated in place. Advancing returns a new
/// cursor; keeping an old copy is how backtracking works. A "character" is
/// one Unicode code point, so `next()` may advance by more than one byte.
#[derive(Debug, Copy, Clone)]
pub enum StrCursor<'code> {
    Valid { source: &'code str, offset: usize },
    EndOfText { source: &'code str },
}

impl<'code> StrCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        if source.is_empty() {
            return StrCursor::EndOfText { source };
        }
        StrCursor::Valid { source, offset: 0 }
    }

    /// The character at the current position, or `None` at end of text.
    pub fn value(&self) -> Option<char> {
        match self {
            StrCursor::Valid { source, offset } => source[*offset..].chars().next(),
            StrCursor::EndOfText { .. } => None,
        }
    }

    /// Advance past the current character.
    ///
    /// At end of text this is a no-op; the cursor stays at the end.
    pub fn next(self) -> Self {
        match self {
            StrCursor::Valid { source, offset } => match source[offset..].chars().next() {
                Some(ch) => {
                    let offset = offset + ch.len_utf8();
                    if offset >= source.len() {
                        StrCursor::EndOfText { source }
                    } else {
                        StrCursor::Valid { source, offset }
                    }
                }
                None => StrCursor::EndOfText { source },
            },
            end => end,
        }
    }

    /// Byte offset of the current position; the source length at end of text.
    pub fn position(&self) -> usize {
        match self {
            StrCursor::Valid { offset, .. } => *offset,
            StrCursor::EndOfText { source } => source.len(),
        }
    }

    /// The unconsumed suffix of the source.
    pub fn rest(&self) -> &'code str {
        match self {
            StrCursor::Valid { source, offset } => &source[*offset..],
            StrCursor::EndOfText { .. } => "",
        }
    }

    pub fn source(&self) -> &'code str {
        match self {
            StrCursor::Valid { source, .. } => source,
            StrCursor::EndOfText { source } => source,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, StrCursor::EndOfText { .. })
    }

    /// Advance by a byte count known to end on a character boundary.
    pub(crate) fn advance(self, bytes: usize) -> Self {
        match self {
            StrCursor::Valid { source, offset } => {
                let offset = offset + bytes;
                if offset >= source.len() {
                    StrCursor::EndOfText { source }
                } else {
                    StrCursor::Valid { source, offset }
                }
            }
            end => end,
        }
    }

    /// The head character for diagnostics, or `"EOF"` at end of text.
    pub(crate) fn describe_head(&self) -> Cow<'static, str> {
        match self.value() {
            Some(ch) => Cow::Owned(ch.to_string()),
            None => Cow::Borrowed("EOF"),
        }
    }

    /// Up to `max_chars` characters of the unconsumed input, `"EOF"` if none.
    pub(crate) fn excerpt(&self, max_chars: usize) -> Cow<'static, str> {
        let text: String = self.rest().chars().take(max_chars).collect();
        if text.is_empty() {
            Cow::Borrowed("EOF")
        } else {
            Cow::Owned(text)
        }
    }
}
