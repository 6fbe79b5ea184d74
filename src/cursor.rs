use crate::error::ParseFailure;

/// A position in an immutable byte slice
///
/// A cursor is either positioned on a readable byte (`Valid`) or past the last
/// byte (`EndOfFile`). Cursors are `Copy`, so saving one before an attempt and
/// handing it back afterwards is how every combinator backtracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ByteCursor<'code> {
    Valid { data: &'code [u8], position: usize },
    EndOfFile { data: &'code [u8] },
}

impl<'code> ByteCursor<'code> {
    pub fn new(data: &'code [u8]) -> Self {
        Self::at(data, 0)
    }

    /// Create a cursor at `position`
    ///
    /// Offsets at or past the end of `data` produce an `EndOfFile` cursor.
    pub fn at(data: &'code [u8], position: usize) -> Self {
        if position >= data.len() {
            return ByteCursor::EndOfFile { data };
        }
        ByteCursor::Valid { data, position }
    }

    /// Get the byte at the current position
    ///
    /// Returns a failure at this cursor when positioned at the end of input
    pub fn value(&self) -> Result<u8, ParseFailure<'code>> {
        match self {
            ByteCursor::Valid { data, position } => {
                data.get(*position).copied().ok_or(ParseFailure::at(*self))
            }
            ByteCursor::EndOfFile { .. } => Err(ParseFailure::at(*self)),
        }
    }

    /// Advance to the next byte, staying at the end once it is reached
    pub fn next(self) -> Self {
        match self {
            ByteCursor::Valid { data, position } => Self::at(data, position + 1),
            ByteCursor::EndOfFile { data } => ByteCursor::EndOfFile { data },
        }
    }

    /// Offset into the input; `len(input)` for end-of-file cursors
    pub fn position(&self) -> usize {
        match self {
            ByteCursor::Valid { position, .. } => *position,
            ByteCursor::EndOfFile { data } => data.len(),
        }
    }

    pub fn eos(&self) -> bool {
        matches!(self, ByteCursor::EndOfFile { .. })
    }

    pub fn source(&self) -> &'code [u8] {
        match self {
            ByteCursor::Valid { data, .. } => data,
            ByteCursor::EndOfFile { data } => data,
        }
    }

    /// Consume the cursor and return the input and current position
    pub fn inner(self) -> (&'code [u8], usize) {
        (self.source(), self.position())
    }
}
