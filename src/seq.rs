use crate::cursor::ByteCursor;
use crate::error::{ParseFailure, ParseResult};
use crate::parser::Parser;
use tracing::trace;

/// Parser combinator that runs a list of parsers one after another
///
/// Succeeds with every output in order only if all parsers succeed. The first
/// failure backtracks to the cursor `Seq` was entered at, discarding whatever
/// the earlier parsers consumed. A cursor already at the end of input fails
/// before any parser runs.
///
/// All parsers in the list share one type; use [`BoxedExt::boxed`] to mix
/// different parsers with the same output.
///
/// [`BoxedExt::boxed`]: crate::parser::BoxedExt::boxed
pub struct Seq<P> {
    parsers: Vec<P>,
}

impl<P> Seq<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Seq { parsers }
    }
}

impl<'code, P> Parser<'code> for Seq<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.eos() {
            return Err(ParseFailure::at(cursor));
        }

        let mut results = Vec::with_capacity(self.parsers.len());
        let mut current = cursor;

        for (index, parser) in self.parsers.iter().enumerate() {
            match parser.parse(current) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    current = next_cursor;
                }
                Err(failure) => {
                    trace!(
                        position = cursor.position(),
                        failed_at = failure.position(),
                        index,
                        "seq backtracking"
                    );
                    return Err(ParseFailure::at(cursor));
                }
            }
        }

        Ok((results, current))
    }
}

/// Convenience function to create a Seq parser
pub fn seq<'code, P>(parsers: Vec<P>) -> Seq<P>
where
    P: Parser<'code>,
{
    Seq::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::ApplyExt;
    use crate::ascii::digit;
    use crate::byte::{Literal, literal};
    use crate::parser::BoxedExt;

    fn abc() -> Seq<Literal> {
        seq(vec![literal(b'a'), literal(b'b'), literal(b'c')])
    }

    #[test]
    fn test_seq_all_succeed() {
        let cursor = ByteCursor::new(b"abcdef");

        let (bytes, cursor) = abc().parse(cursor).unwrap();
        assert_eq!(bytes, vec![b'a', b'b', b'c']);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_seq_full_backtrack() {
        let cursor = ByteCursor::new(b"abx");

        // 'a' and 'b' match, but nothing of them is kept
        let failure = abc().parse(cursor).unwrap_err();
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_seq_backtracks_to_entry_mid_input() {
        let cursor = ByteCursor::at(b"zzabz", 2);

        let failure = abc().parse(cursor).unwrap_err();
        assert_eq!(failure.position(), 2);
    }

    #[test]
    fn test_seq_runs_out_of_input() {
        let failure = abc().parse(ByteCursor::new(b"ab")).unwrap_err();
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_seq_empty_input_fails() {
        let failure = abc().parse(ByteCursor::new(b"")).unwrap_err();
        assert_eq!(failure.position(), 0);
    }

    #[test]
    fn test_seq_empty_list() {
        let parser = seq(Vec::<Literal>::new());

        let (values, cursor) = parser.parse(ByteCursor::new(b"abc")).unwrap();
        assert!(values.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_seq_empty_list_at_eof_fails() {
        let parser = seq(Vec::<Literal>::new());
        assert!(parser.parse(ByteCursor::new(b"")).is_err());
    }

    #[test]
    fn test_seq_mixed_parsers() {
        let parser = seq(vec![
            literal(b'v').apply(|_| 0u8).boxed(),
            digit().boxed(),
            digit().boxed(),
        ]);

        let (values, cursor) = parser.parse(ByteCursor::new(b"v42")).unwrap();
        assert_eq!(values, vec![0, 4, 2]);
        assert!(cursor.eos());
    }
}
