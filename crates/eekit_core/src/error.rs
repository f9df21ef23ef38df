use serde::Serialize;
use thiserror::Error;

use crate::color_code::ColorBand;
use crate::network::EntryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ColorCodeError {
    #[error("band {position} ({band}) has no digit value")]
    NotADigit { position: u8, band: ColorBand },

    #[error("band 3 ({band}) has no multiplier")]
    NotAMultiplier { band: ColorBand },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("no resistor entry with id {0}")]
    UnknownEntry(EntryId),

    #[error("cannot remove the last resistor entry")]
    LastEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("empty quantity")]
    Empty,

    #[error("invalid start of numeric value at offset {offset}")]
    InvalidStartNumeric { offset: usize },

    #[error("expected digits after '.' at offset {offset}")]
    ExpectedDigitsAfterDot { offset: usize },

    #[error("invalid exponent digits at offset {offset}")]
    InvalidExponentDigits { offset: usize },

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },

    #[error("invalid numeric literal '{lexeme}'")]
    InvalidNumericLiteral { lexeme: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown band color '{0}'")]
pub struct ParseBandError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown circuit mode '{0}' (expected series or parallel)")]
pub struct ParseModeError(pub String);

/// Why an RC estimate could not be produced. None of these are failures of
/// the estimator; they describe input states the caller renders as "N/A".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unavailable {
    #[error("input incomplete")]
    IncompleteInput,

    #[error("input out of range")]
    OutOfRange,

    #[error("result undefined")]
    Undefined,
}
