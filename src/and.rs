use crate::cursor::ByteCursor;
use crate::error::{ParseFailure, ParseResult};
use crate::parser::Parser;

/// Parser combinator for positive lookahead
///
/// Runs `parser`, then checks that `lookahead` matches right after it. The
/// result is the first parser's value and cursor; whatever the lookahead
/// consumed is given back. Fails at the entry cursor if either parser fails.
pub struct And<P1, P2> {
    parser: P1,
    lookahead: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser: P1, lookahead: P2) -> Self {
        And { parser, lookahead }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, next_cursor) = self
            .parser
            .parse(cursor)
            .map_err(|_| ParseFailure::at(cursor))?;

        match self.lookahead.parse(next_cursor) {
            Ok(_) => Ok((value, next_cursor)),
            Err(_) => Err(ParseFailure::at(cursor)),
        }
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser: P1, lookahead: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser, lookahead)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, lookahead: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, lookahead)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit;
    use crate::byte::literal;

    #[test]
    fn test_and_both_succeed() {
        let (byte, cursor) = and(literal(b'a'), literal(b'b'))
            .parse(ByteCursor::new(b"abc"))
            .unwrap();
        assert_eq!(byte, b'a');
        // Only the first parser's input is consumed
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_and_lookahead_fails() {
        let failure = and(literal(b'a'), literal(b'b'))
            .parse(ByteCursor::new(b"acb"))
            .unwrap_err();
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_and_first_fails() {
        let failure = and(literal(b'a'), literal(b'b'))
            .parse(ByteCursor::at(b"xxbb", 2))
            .unwrap_err();
        assert_eq!(failure.position(), 2);
    }

    #[test]
    fn test_and_lookahead_at_eof() {
        let parser = literal(b'a').and(literal(b'b'));
        assert!(parser.parse(ByteCursor::new(b"a")).is_err());
    }

    #[test]
    fn test_and_method_chain() {
        // Chained lookaheads all look at the input right after the first parser
        let parser = digit().and(digit()).and(literal(b'2'));

        let (value, cursor) = parser.parse(ByteCursor::new(b"12k")).unwrap();
        assert_eq!(value, 1);
        assert_eq!(cursor.position(), 1);

        assert!(parser.parse(ByteCursor::new(b"13k")).is_err());
    }
}
