pub mod digit;

pub use digit::digit;
