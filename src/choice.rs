use crate::cursor::ByteCursor;
use crate::error::{ParseFailure, ParseResult};
use crate::parser::Parser;
use tracing::trace;

/// Parser combinator that tries each parser in order at the same position
///
/// The first success is returned as is. Earlier alternatives win over later
/// ones that would also match. If every alternative fails, the choice fails
/// at its entry cursor.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'code, P, O> Parser<'code> for Choice<P>
where
    P: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        for parser in &self.parsers {
            if let Ok(result) = parser.parse(cursor) {
                return Ok(result);
            }
        }

        trace!(
            position = cursor.position(),
            alternatives = self.parsers.len(),
            "choice exhausted"
        );
        Err(ParseFailure::at(cursor))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(parsers: Vec<P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(parsers)
}
