use crate::cursor::ByteCursor;
use crate::error::{ParseFailure, ParseResult};
use crate::many::repeat;
use crate::parser::Parser;
use tracing::warn;

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let (first_value, next_cursor) = self
            .parser
            .parse(cursor)
            .map_err(|_| ParseFailure::at(cursor))?;
        let mut results = vec![first_value];

        if next_cursor.position() == cursor.position() {
            warn!(
                position = cursor.position(),
                "repetition matched without consuming input, stopping"
            );
            return Ok((results, next_cursor));
        }

        let next_cursor = repeat(&self.parser, next_cursor, &mut results);
        Ok((results, next_cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}
