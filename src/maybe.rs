use crate::cursor::ByteCursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that makes a parser optional
///
/// Always succeeds: `Some` with the inner parser's cursor when it matches,
/// `None` with the cursor unchanged when it does not.
///
/// Example:
/// ```
/// use pegcomb::ascii::digit;
/// use pegcomb::byte::literal;
/// use pegcomb::maybe::MaybeExt;
/// use pegcomb::{ByteCursor, Parser};
///
/// let (sign, cursor) = literal(b'-').maybe().parse(ByteCursor::new(b"-7")).unwrap();
/// assert_eq!(sign, Some(b'-'));
/// let (value, _) = digit().parse(cursor).unwrap();
/// assert_eq!(value, 7);
///
/// let (sign, cursor) = literal(b'-').maybe().parse(ByteCursor::new(b"7")).unwrap();
/// assert_eq!(sign, None);
/// assert_eq!(cursor.position(), 0);
/// ```
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, P> Parser<'code> for Maybe<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, P>(parser: P) -> Maybe<P>
where
    P: Parser<'code>,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() method support for parsers
pub trait MaybeExt<'code>: Parser<'code> + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

/// Implement MaybeExt for all parsers
impl<'code, P> MaybeExt<'code> for P where P: Parser<'code> {}
