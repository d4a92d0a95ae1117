//! Error types for melody parsing and playback.

use thiserror::Error;

/// Fatal problems with the melody text.
///
/// Defaults-block variants abort the whole melody before any sound is made.
/// Per-note variants carry the 1-based note index; whether they abort or
/// merely skip the note is the player's policy, not the parser's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("melody has no defaults block")]
    MissingDefaultsBlock,

    #[error("malformed default pair '{pair}': {reason}")]
    MalformedDefaultPair { pair: String, reason: String },

    #[error("required default '{0}' is missing")]
    MissingRequiredDefault(char),

    #[error("default '{field}={value}' is out of range")]
    DefaultOutOfRange { field: char, value: u32 },

    #[error("note {index} is too long")]
    NoteTooLong { index: usize },

    #[error("note {index}: {reason}")]
    MalformedNote { index: usize, reason: String },

    #[error("note {index}: octave {value} is out of range (4-7)")]
    OctaveOutOfRange { index: usize, value: u8 },
}

/// Playback failures.
#[derive(Debug, Error)]
pub enum PlayError {
    /// The tone sink's device write failed; playback stops here.
    #[error("tone write failed at note {index}")]
    Sink {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    /// A note failed to parse under the strict policy.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
