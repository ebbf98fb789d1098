use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GoodError {
    #[error("expected a number of {expected} symbols, found {found}")]
    #[diagnostic(
        code(good13::invalid_length),
        help("inputs are never truncated or padded")
    )]
    InvalidLength { expected: usize, found: usize },

    #[error("{symbol:?} is not a base-{base} digit")]
    #[diagnostic(code(good13::invalid_symbol))]
    InvalidSymbol {
        symbol: char,
        base: u32,
        #[source_code]
        src: String,
        #[label("not in the alphabet")]
        span: SourceSpan,
    },

    #[error("digit value {value} has no symbol in base {base}")]
    #[diagnostic(code(good13::invalid_digit))]
    InvalidDigit { value: u32, base: u32 },

    #[error("base {0} is not supported")]
    #[diagnostic(code(good13::invalid_base), help("the alphabet spells bases 1 through 36"))]
    InvalidBase(u32),

    #[error("half length {0} is too long to count")]
    #[diagnostic(code(good13::invalid_half_length))]
    InvalidHalfLength(usize),

    #[error("{value} cannot be written in base {base}")]
    #[diagnostic(code(good13::unrepresentable))]
    Unrepresentable { value: u128, base: u32 },

    #[error("failed to parse number: {0}")]
    #[diagnostic(code(good13::parse_error))]
    Parse(String),

    #[error("arithmetic overflow while {0}")]
    #[diagnostic(code(good13::overflow))]
    Overflow(&'static str),
}

impl<E> From<nom::Err<E>> for GoodError
where
    E: std::fmt::Debug,
{
    fn from(err: nom::Err<E>) -> Self {
        GoodError::Parse(format!("{:?}", err))
    }
}

impl GoodError {
    /// Points at the offending symbol inside `src`, `offset` bytes in.
    pub(crate) fn invalid_symbol(symbol: char, base: u32, src: &str, offset: usize) -> Self {
        GoodError::InvalidSymbol {
            symbol,
            base,
            src: src.to_string(),
            span: (offset, symbol.len_utf8()).into(),
        }
    }
}
