use crate::cursor::ByteCursor;
use crate::error::{ParseFailure, ParseResult};

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success. A failure
    /// is always reported at the cursor the parser was entered at, so callers
    /// can backtrack by simply reusing their saved cursor.
    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Run the parser over `input` starting at `position`
    ///
    /// Returns the outcome together with the position parsing resumes from:
    /// after the match on success, `position` (clamped to the input) on failure.
    fn parse_at(
        &self,
        input: &'code [u8],
        position: usize,
    ) -> (Result<Self::Output, ParseFailure<'code>>, usize) {
        match self.parse(ByteCursor::at(input, position)) {
            Ok((value, cursor)) => (Ok(value), cursor.position()),
            Err(failure) => {
                let position = failure.position();
                (Err(failure), position)
            }
        }
    }
}

/// Any function from a cursor to a parse result is a parser
impl<'code, F, T> Parser<'code> for F
where
    F: Fn(ByteCursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, T> {
        self(cursor)
    }
}

/// A type-erased parser, used to put differently-typed parsers with the same
/// output into one `seq` or `choice`
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + Send + Sync + 'code>;

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, T> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + Send + Sync + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

/// Implement BoxedExt for all thread-safe parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + Send + Sync + 'code {}
