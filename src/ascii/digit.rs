use crate::apply::Apply;
use crate::byte::between_bytes;
use crate::parser::Parser;

/// Parser that matches a single ASCII digit (0-9) and returns its numeric value
pub fn digit<'code>() -> impl Parser<'code, Output = u8> + Send + Sync {
    Apply::new(between_bytes(b'0', b'9'), |byte: u8| byte - b'0')
}
