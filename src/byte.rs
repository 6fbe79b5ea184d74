use crate::cursor::ByteCursor;
use crate::error::{ParseFailure, ParseResult};
use crate::parser::Parser;

/// Parser that consumes and returns a single byte
pub struct ByteParser;

impl ByteParser {
    pub fn new() -> Self {
        ByteParser
    }
}

impl Default for ByteParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to create a ByteParser
pub fn byte() -> ByteParser {
    ByteParser::new()
}

impl<'code> Parser<'code> for ByteParser {
    type Output = u8;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let byte = cursor.value()?;
        Ok((byte, cursor.next()))
    }
}

/// Parser that matches one specific byte
pub struct Literal {
    expected: u8,
}

impl Literal {
    pub fn new(expected: u8) -> Self {
        Literal { expected }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = u8;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.value()? {
            byte if byte == self.expected => Ok((byte, cursor.next())),
            _ => Err(ParseFailure::at(cursor)),
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: u8) -> Literal {
    Literal::new(expected)
}

/// Parser that matches a byte within a range (inclusive)
pub struct BetweenBytesParser {
    start: u8,
    end: u8,
}

impl BetweenBytesParser {
    pub fn new(start: u8, end: u8) -> Self {
        BetweenBytesParser { start, end }
    }
}

impl<'code> Parser<'code> for BetweenBytesParser {
    type Output = u8;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.value()? {
            byte if (self.start..=self.end).contains(&byte) => Ok((byte, cursor.next())),
            _ => Err(ParseFailure::at(cursor)),
        }
    }
}

/// Convenience function to create a BetweenBytesParser
pub fn between_bytes(start: u8, end: u8) -> BetweenBytesParser {
    BetweenBytesParser::new(start, end)
}
