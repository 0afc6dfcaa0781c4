use super::value::ValueKind;
use thiserror::Error;

/// Errors produced while decoding bencode.
///
/// Every variant records the byte offset into the input at which the
/// violation was detected. Encoding cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    /// A byte that cannot start a value appeared where a value was expected.
    #[error("invalid token {byte:#04x} at offset {position}")]
    InvalidToken { byte: u8, position: usize },

    /// An integer or length prefix violates the bencode grammar.
    #[error("format error at offset {position}: {reason}")]
    FormatError {
        reason: &'static str,
        position: usize,
    },

    /// A byte string declares more bytes than the input holds.
    #[error("byte string at offset {position} declares {declared} bytes, only {available} available")]
    TruncatedInput {
        declared: usize,
        available: usize,
        position: usize,
    },

    /// Input ended before a value or terminator was complete.
    #[error("unexpected end of input at offset {position}")]
    UnexpectedEnd { position: usize },

    /// A dictionary key is not a byte string, or repeats an earlier key.
    #[error("malformed dictionary key ({found}) at offset {position}")]
    MalformedKey { found: ValueKind, position: usize },

    /// Dictionary keys are not in strictly ascending byte order.
    #[error("dictionary key at offset {position} is not in ascending order")]
    NonCanonicalOrder { position: usize },

    /// Containers nest deeper than the configured limit.
    #[error("nesting deeper than {max_depth} at offset {position}")]
    NestingTooDeep { max_depth: usize, position: usize },

    /// Bytes remain after a complete value in strict mode.
    #[error("{remaining} trailing bytes after value ending at offset {consumed}")]
    TrailingData { consumed: usize, remaining: usize },
}

impl BencodeError {
    /// Byte offset into the input where decoding stopped.
    pub fn position(&self) -> usize {
        match self {
            BencodeError::InvalidToken { position, .. }
            | BencodeError::FormatError { position, .. }
            | BencodeError::TruncatedInput { position, .. }
            | BencodeError::UnexpectedEnd { position }
            | BencodeError::MalformedKey { position, .. }
            | BencodeError::NonCanonicalOrder { position }
            | BencodeError::NestingTooDeep { position, .. } => *position,
            BencodeError::TrailingData { consumed, .. } => *consumed,
        }
    }
}
