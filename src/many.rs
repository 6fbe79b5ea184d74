use crate::cursor::ByteCursor;
use crate::error::ParseResult;
use crate::parser::Parser;
use tracing::{trace, warn};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Repetition stops at the first failing attempt, which consumes
/// nothing. An attempt that succeeds without advancing the cursor also stops
/// the loop and its value is dropped, since repeating it would never end.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let cursor = repeat(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }
}

/// Apply `parser` until it fails or stops making progress, pushing each value
/// onto `results`. Returns the cursor after the last consuming match.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut cursor: ByteCursor<'code>,
    results: &mut Vec<P::Output>,
) -> ByteCursor<'code>
where
    P: Parser<'code>,
{
    loop {
        match parser.parse(cursor) {
            Ok((_, next_cursor)) if next_cursor.position() == cursor.position() => {
                warn!(
                    position = cursor.position(),
                    "repetition matched without consuming input, stopping"
                );
                break;
            }
            Ok((value, next_cursor)) => {
                results.push(value);
                cursor = next_cursor;
            }
            Err(_) => {
                // The failed attempt is discarded; `cursor` is still where it started
                break;
            }
        }
    }

    trace!(
        position = cursor.position(),
        matches = results.len(),
        "repetition ended"
    );
    cursor
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit;
    use crate::byte::{ByteParser, literal};
    use crate::maybe::maybe;
    use crate::not::not;

    #[test]
    fn test_many_zero_matches() {
        let cursor = ByteCursor::new(b"xyz");

        let (results, cursor) = many(literal(b'a')).parse(cursor).unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_many_multiple_matches() {
        let cursor = ByteCursor::new(b"aaabcd");

        let (results, cursor) = many(literal(b'a')).parse(cursor).unwrap();
        assert_eq!(results, vec![b'a', b'a', b'a']);
        assert_eq!(cursor.value().unwrap(), b'b');
    }

    #[test]
    fn test_many_digits() {
        let (digits, cursor) = many(digit()).parse(ByteCursor::new(b"123abc")).unwrap();
        assert_eq!(digits, vec![1, 2, 3]);
        assert_eq!(cursor.position(), 3);

        let (digits, cursor) = many(digit()).parse(ByteCursor::new(b"abc")).unwrap();
        assert!(digits.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_many_with_byte_parser() {
        let cursor = ByteCursor::new(b"hello");

        let (results, cursor) = many(ByteParser::new()).parse(cursor).unwrap();
        assert_eq!(results, b"hello".to_vec());
        assert!(cursor.eos());
    }

    #[test]
    fn test_many_empty_input() {
        let (results, cursor) = many(literal(b'a')).parse(ByteCursor::new(b"")).unwrap();
        assert_eq!(results, vec![]);
        assert!(cursor.eos());
    }

    #[test]
    fn test_many_stops_on_zero_width_maybe() {
        let cursor = ByteCursor::new(b"aab");

        let (results, cursor) = many(maybe(literal(b'a'))).parse(cursor).unwrap();
        assert_eq!(results, vec![Some(b'a'), Some(b'a')]);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_many_stops_on_zero_width_not() {
        let cursor = ByteCursor::new(b"bbb");

        let (results, cursor) = many(not(literal(b'a'))).parse(cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.position(), 0);
    }
}
