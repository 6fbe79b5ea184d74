use crate::cursor::ByteCursor;
use thiserror::Error;

/// Outcome of a parse attempt: the value and the cursor to resume from, or a failure
pub type ParseResult<'code, T> = Result<(T, ByteCursor<'code>), ParseFailure<'code>>;

/// A match failure
///
/// This is the only error a parser produces. It carries no diagnostic beyond
/// the cursor the failing parser was entered at, which is also the cursor
/// parsing resumes from after backtracking.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("no match at position {position}")]
pub struct ParseFailure<'code> {
    data: &'code [u8],
    position: usize,
}

impl<'code> ParseFailure<'code> {
    /// Failure reported at `cursor`
    pub fn at(cursor: ByteCursor<'code>) -> Self {
        let (data, position) = cursor.inner();
        ParseFailure { data, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The cursor to resume from after this failure
    pub fn cursor(&self) -> ByteCursor<'code> {
        ByteCursor::at(self.data, self.position)
    }
}
