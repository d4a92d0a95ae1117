//! Melody descriptor parsing.
//!
//! A melody string is `[name:]defaults:notes`. The name is optional and
//! kept only for display; the defaults block is mandatory and fatal to get
//! wrong; the note list is left unparsed and resolved lazily.

mod defaults;
pub(crate) mod note;

pub use note::MAX_TOKEN_LEN;

use crate::error::ParseError;
use crate::feedback::FeedbackCollector;
use crate::melody::Melody;

/// Parse a melody descriptor.
///
/// Fails on a missing or invalid defaults block. Problems in individual
/// notes are not detected here — they surface from [`Melody::notes`] as the
/// sequence is consumed.
pub fn parse(input: &str) -> Result<Melody<'_>, ParseError> {
    let mut collector = FeedbackCollector::new();
    let input = input.trim();

    let sections: Vec<&str> = input.splitn(3, ':').collect();
    let (name, block, notes) = match sections.as_slice() {
        [_] => return Err(ParseError::MissingDefaultsBlock),
        [block, notes] => (None, *block, *notes),
        [name, block, notes] => (Some(name.trim()), *block, *notes),
        _ => unreachable!(),
    };

    let defaults = defaults::parse_defaults(block, &mut collector)?;

    Ok(Melody {
        name: name.filter(|n| !n.is_empty()),
        defaults,
        warnings: collector.into_feedback(),
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melody::Defaults;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_with_name() {
        let melody = parse("korobeiniki:d=4,o=5,b=160:e6,8b,8c6").unwrap();
        assert_eq!(melody.name, Some("korobeiniki"));
        assert_eq!(
            melody.defaults,
            Defaults {
                octave: 5,
                duration: 4,
                tempo: 160
            }
        );
        assert!(melody.warnings.is_empty());
        assert_eq!(melody.notes().count(), 3);
    }

    #[test]
    fn test_parse_without_name() {
        let melody = parse("d=8,o=4,b=90:c,d,e").unwrap();
        assert_eq!(melody.name, None);
        assert_eq!(melody.defaults.duration, 8);
    }

    #[test]
    fn test_missing_defaults_block() {
        assert_eq!(parse("c,d,e"), Err(ParseError::MissingDefaultsBlock));
        assert_eq!(parse(""), Err(ParseError::MissingDefaultsBlock));
    }

    #[test]
    fn test_defaults_errors_are_fatal() {
        assert!(matches!(
            parse("name:o=5,d=4:c"),
            Err(ParseError::MissingRequiredDefault('b'))
        ));
        assert!(matches!(
            parse("name:o=8,d=4,b=100:c"),
            Err(ParseError::DefaultOutOfRange { field: 'o', .. })
        ));
    }

    #[test]
    fn test_duplicate_default_warns_but_parses() {
        let melody = parse("x:o=5,o=6,d=4,b=120:c").unwrap();
        assert_eq!(melody.defaults.octave, 5);
        assert_eq!(melody.warnings.len(), 1);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let melody = parse("  tune:d=4,o=5,b=100:a,b \n").unwrap();
        assert_eq!(melody.name, Some("tune"));
        assert_eq!(melody.notes().count(), 2);
    }

    #[test]
    fn test_empty_name_segment_discarded() {
        let melody = parse(":d=4,o=5,b=100:a").unwrap();
        assert_eq!(melody.name, None);
    }
}
