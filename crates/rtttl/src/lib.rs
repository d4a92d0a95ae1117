//! RTTTL ring-tone parser and playback sequencer.
//!
//! Parses the compact melody notation `[name:]o=..,d=..,b=..:notes`,
//! resolves each note against the defaults, and plays the result through
//! an injected [`ToneSink`] with correct relative timing.
//!
//! # Example
//!
//! ```
//! let melody = rtttl::parse("twinkle:d=4,o=5,b=80:c,c,g,g,a,a,2g").unwrap();
//! assert_eq!(melody.defaults.tempo, 80);
//!
//! let notes: Vec<_> = melody
//!     .notes()
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(notes[0].frequency_hz, 523); // C5
//! assert_eq!(notes[6].duration_micros, 1_500_000); // half note at b=80
//! ```
//!
//! Parsing is strict about the defaults block (playback is meaningless
//! without it) and lazy about the note list: notes are resolved one at a
//! time as the [`Melody::notes`] sequence is consumed, and the [`Player`]
//! decides whether a malformed note skips or aborts.

pub mod error;
pub mod feedback;
mod freq;
pub mod melody;
pub mod parser;
pub mod player;

pub use error::{ParseError, PlayError};
pub use feedback::{Diagnostics, Feedback, FeedbackCollector, FeedbackLevel};
pub use melody::{Defaults, Melody, Notes, Pitch, ResolvedNote};
pub use player::{ErrorPolicy, Player, ToneSink};

/// Parse a melody descriptor. See [`parser::parse`].
pub fn parse(input: &str) -> Result<Melody<'_>, ParseError> {
    parser::parse(input)
}
