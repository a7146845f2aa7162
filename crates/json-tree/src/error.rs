use thiserror::Error;

/// The single failure signal surfaced by every fallible operation in this crate.
///
/// Carries a byte offset where one is known, so a caller can locate the problem
/// without this crate owning any source-span rendering machinery — that belongs
/// to whatever host reports the error, not to the value model.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected character at byte {offset}")]
    UnexpectedCharacter { offset: usize },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString { offset: usize },

    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape { offset: usize },

    #[error("invalid \\u escape at byte {offset}")]
    InvalidUnicodeEscape { offset: usize },

    #[error("lone surrogate in \\u escape at byte {offset}")]
    LoneSurrogate { offset: usize },

    #[error("control character in string at byte {offset}")]
    ControlCharacterInString { offset: usize },

    #[error("invalid number literal at byte {offset}")]
    InvalidNumber { offset: usize },

    #[error("duplicate object key {key:?} at byte {offset}")]
    DuplicateKey { key: String, offset: usize },

    #[error("duplicate object key {key:?}")]
    DuplicateKeyInsert { key: String },

    #[error("nesting depth exceeds the maximum of {max}")]
    NestingTooDeep { max: u32 },

    #[error("array capacity exceeds the maximum of {max}")]
    ArrayCapacityExceeded { max: usize },

    #[error("object capacity exceeds the maximum of {max}")]
    ObjectCapacityExceeded { max: usize },

    #[error("value is not finite and cannot be serialized as JSON")]
    NonFiniteNumber,

    #[error("buffer of {given} bytes is too small; {needed} bytes are required")]
    BufferTooSmall { given: usize, needed: usize },

    #[error("value is not an object")]
    NotAnObject,

    #[error("value is not an array")]
    NotAnArray,

    #[error("value is neither an object nor an array")]
    NotAContainer,

    #[error("key {key:?} does not exist")]
    KeyNotFound { key: String },

    #[error("index {index} out of bounds for a container of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("path segment {segment:?} does not exist")]
    PathNotFound { segment: String },

    #[error("path segment {segment:?} is not an object")]
    PathNotAnObject { segment: String },

    /// Kept for taxonomy parity with the original source's error categories.
    /// Rust's global allocator aborts on allocation failure rather than
    /// returning a recoverable error, so no code path constructs this variant.
    #[error("allocation failure")]
    AllocationFailure,

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
