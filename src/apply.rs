use crate::cursor::ByteCursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The function only runs on success; failures pass through untouched.
pub struct Apply<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Apply<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Apply { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Apply<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, F, P, U>(mapper: F, parser: P) -> Apply<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Apply::new(parser, mapper)
}

/// Extension trait to add .apply() method support for parsers
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<F, U>(self, mapper: F) -> Apply<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Apply::new(self, mapper)
    }
}

/// Implement ApplyExt for all parsers
impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}
