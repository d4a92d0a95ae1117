//! Note-token parsing and resolution using winnow combinators.
//!
//! Token grammar, all parts optional except the letter, in this order:
//! duration digits (`1 2 4 8 16 32`), letter `A-G` or `P`, `#`, `.`,
//! octave digit `4-7`. Example: `16f#6.` is wrong, `16f#.6` is right.

use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::one_of;

use crate::error::ParseError;
use crate::freq;
use crate::melody::{Defaults, Pitch, ResolvedNote};

type PResult<T> = winnow::ModalResult<T>;

/// Longest token the reference format allows.
pub const MAX_TOKEN_LEN: usize = 31;

#[derive(Debug, PartialEq)]
struct NoteParts {
    duration: Option<u8>,
    pitch: Pitch,
    sharp: bool,
    dotted: bool,
    octave: Option<u8>,
}

/// Parse the optional duration prefix. Longest match first so `16` is not
/// read as `1` + garbage; a lone `3` is left in place and fails as a letter.
fn parse_duration(input: &mut &str) -> PResult<Option<u8>> {
    opt(alt((
        "32".map(|_| 32u8),
        "16".map(|_| 16u8),
        one_of(['1', '2', '4', '8']).map(|c: char| c as u8 - b'0'),
    )))
    .parse_next(input)
}

/// Parse the note letter or rest marker, case-insensitive.
fn parse_pitch(input: &mut &str) -> PResult<Pitch> {
    let c = one_of(|c: char| Pitch::from_char(c).is_some()).parse_next(input)?;
    match Pitch::from_char(c) {
        Some(pitch) => Ok(pitch),
        None => unreachable!(), // one_of already validated the character
    }
}

fn parse_note_parts(input: &mut &str) -> PResult<NoteParts> {
    let duration = parse_duration(input)?;
    let pitch = parse_pitch(input)?;
    let sharp = opt('#').parse_next(input)?.is_some();
    let dotted = opt('.').parse_next(input)?.is_some();
    let octave = opt(one_of(|c: char| c.is_ascii_digit()))
        .parse_next(input)?
        .map(|c: char| c as u8 - b'0');

    Ok(NoteParts {
        duration,
        pitch,
        sharp,
        dotted,
        octave,
    })
}

/// Resolve one trimmed note token to a playable (frequency, duration) pair.
///
/// Pure function of the token and defaults; `index` is 1-based and only
/// used for diagnostics.
pub fn resolve_note(
    token: &str,
    index: usize,
    defaults: &Defaults,
) -> Result<ResolvedNote, ParseError> {
    if token.len() > MAX_TOKEN_LEN {
        return Err(ParseError::NoteTooLong { index });
    }

    let mut input = token;
    let parts = parse_note_parts(&mut input).map_err(|_| ParseError::MalformedNote {
        index,
        reason: format!("expected a note letter A-G or P in '{token}'"),
    })?;
    if !input.is_empty() {
        return Err(ParseError::MalformedNote {
            index,
            reason: format!("unexpected trailing '{input}' in '{token}'"),
        });
    }

    let octave = match parts.octave {
        Some(value) if !(freq::MIN_OCTAVE..=freq::MAX_OCTAVE).contains(&value) => {
            return Err(ParseError::OctaveOutOfRange { index, value });
        }
        Some(value) => value,
        None => defaults.octave,
    };

    let units = parts.duration.unwrap_or(defaults.duration);
    let mut duration_micros = defaults.whole_note_millis() as u64 * 1000 / units as u64;
    if parts.dotted {
        duration_micros += duration_micros / 2;
    }

    // A sharp on a rest has nothing to sharpen and is ignored.
    let frequency_hz = match parts.pitch.chromatic_step(parts.sharp) {
        Some(step) => freq::frequency(octave, step),
        None => 0,
    };

    Ok(ResolvedNote {
        frequency_hz,
        duration_micros,
    })
}
