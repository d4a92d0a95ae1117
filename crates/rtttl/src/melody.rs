//! Value types for parsed melodies.
//!
//! A melody is a set of resolved defaults plus a lazy sequence of notes.
//! Notes are resolved one at a time as the sequence is consumed, so memory
//! use is constant in the length of the melody.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::feedback::Feedback;
use crate::parser::note::resolve_note;

/// Resolved defaults block of a melody: `o=` octave, `d=` duration, `b=` tempo.
///
/// Immutable once parsed; every note that omits a field falls back to the
/// corresponding default here, never to a hardcoded literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Default octave, 4-7.
    pub octave: u8,
    /// Default note duration in whole-note divisions: 1, 2, 4, 8, 16 or 32.
    pub duration: u8,
    /// Tempo in beats per minute, 40-200.
    pub tempo: u16,
}

impl Defaults {
    /// Length of a whole note in milliseconds: four beats at the tempo.
    pub fn whole_note_millis(&self) -> u32 {
        240_000 / self.tempo as u32
    }
}

/// A note letter, or a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pitch {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
    /// `P` in the note list: silence occupying a timing slot.
    Rest,
}

impl Pitch {
    /// Parse from a note-list letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Pitch> {
        match c.to_ascii_lowercase() {
            'c' => Some(Pitch::C),
            'd' => Some(Pitch::D),
            'e' => Some(Pitch::E),
            'f' => Some(Pitch::F),
            'g' => Some(Pitch::G),
            'a' => Some(Pitch::A),
            'b' => Some(Pitch::B),
            'p' => Some(Pitch::Rest),
            _ => None,
        }
    }

    /// Chromatic step from C (0-11), or `None` for a rest.
    ///
    /// B and E have no sharp of their own in this format; their sharp
    /// spellings resolve to the same step as the natural.
    pub fn chromatic_step(self, sharp: bool) -> Option<usize> {
        let natural = match self {
            Pitch::C => 0,
            Pitch::D => 2,
            Pitch::E => 4,
            Pitch::F => 5,
            Pitch::G => 7,
            Pitch::A => 9,
            Pitch::B => 11,
            Pitch::Rest => return None,
        };
        match self {
            Pitch::E | Pitch::B => Some(natural),
            _ => Some(natural + sharp as usize),
        }
    }
}

/// A note resolved against the melody defaults, ready to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedNote {
    /// Tone frequency in Hz; 0 means rest.
    pub frequency_hz: u32,
    /// Time the tone is held, in microseconds.
    pub duration_micros: u64,
}

impl ResolvedNote {
    /// True if this note is a rest (no pitch).
    pub fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// A parsed melody: name, defaults, and the raw note list.
///
/// The note list is kept as a borrowed slice of the input and resolved
/// lazily by [`Melody::notes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Melody<'a> {
    /// Optional name segment before the first `:`, if the input had one.
    pub name: Option<&'a str>,
    pub defaults: Defaults,
    /// Non-fatal issues found while parsing the defaults block.
    pub warnings: Vec<Feedback>,
    pub(crate) notes: &'a str,
}

impl<'a> Melody<'a> {
    /// Lazily resolve the note list, in source order.
    ///
    /// Each returned iterator is single-pass; calling `notes()` again
    /// restarts from the first note.
    pub fn notes(&self) -> Notes<'a> {
        Notes {
            remaining: Some(self.notes),
            defaults: self.defaults,
            index: 0,
        }
    }
}

/// Lazy iterator over a melody's note list.
///
/// Yields one `Result` per comma-separated token. Malformed tokens come out
/// as `Err` with their 1-based note index; the consumer decides whether to
/// skip or abort.
#[derive(Debug, Clone)]
pub struct Notes<'a> {
    remaining: Option<&'a str>,
    defaults: Defaults,
    index: usize,
}

impl<'a> Iterator for Notes<'a> {
    type Item = Result<ResolvedNote, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remaining?;
        let token = match rest.find(',') {
            Some(pos) => {
                self.remaining = Some(&rest[pos + 1..]);
                &rest[..pos]
            }
            None => {
                self.remaining = None;
                rest
            }
        };
        let token = token.trim();
        self.index += 1;

        if token.is_empty() {
            if self.remaining.is_none() {
                // Nothing after the last separator: end of sequence.
                return None;
            }
            return Some(Err(ParseError::MalformedNote {
                index: self.index,
                reason: "empty note token".to_string(),
            }));
        }

        Some(resolve_note(token, self.index, &self.defaults))
    }
}
