//! Defaults-block parsing: the `o=5,d=4,b=125` section of a melody.

use crate::error::ParseError;
use crate::feedback::FeedbackCollector;
use crate::melody::Defaults;

/// Parse the defaults block into fully resolved [`Defaults`].
///
/// All three letters must be present and in range. Duplicate letters keep
/// the first value and record a warning.
pub fn parse_defaults(
    block: &str,
    collector: &mut FeedbackCollector,
) -> Result<Defaults, ParseError> {
    let mut octave: Option<u32> = None;
    let mut duration: Option<u32> = None;
    let mut tempo: Option<u32> = None;

    for pair in block.split(',') {
        let (letter, value) = parse_pair(pair)?;
        let slot = match letter {
            'o' => &mut octave,
            'd' => &mut duration,
            'b' => &mut tempo,
            other => {
                return Err(ParseError::MalformedDefaultPair {
                    pair: pair.trim().to_string(),
                    reason: format!("unknown default letter '{other}'"),
                })
            }
        };
        if slot.is_some() {
            // First occurrence wins.
            collector.warning(format!("duplicate default '{letter}', keeping first value"));
        } else {
            *slot = Some(value);
        }
    }

    let octave = octave.ok_or(ParseError::MissingRequiredDefault('o'))?;
    let duration = duration.ok_or(ParseError::MissingRequiredDefault('d'))?;
    let tempo = tempo.ok_or(ParseError::MissingRequiredDefault('b'))?;

    if !(4..=7).contains(&octave) {
        return Err(ParseError::DefaultOutOfRange {
            field: 'o',
            value: octave,
        });
    }
    if !matches!(duration, 1 | 2 | 4 | 8 | 16 | 32) {
        return Err(ParseError::DefaultOutOfRange {
            field: 'd',
            value: duration,
        });
    }
    if !(40..=200).contains(&tempo) {
        return Err(ParseError::DefaultOutOfRange {
            field: 'b',
            value: tempo,
        });
    }

    Ok(Defaults {
        octave: octave as u8,
        duration: duration as u8,
        tempo: tempo as u16,
    })
}

/// Parse one `letter=number` pair, whitespace tolerated around each part.
fn parse_pair(pair: &str) -> Result<(char, u32), ParseError> {
    let malformed = |reason: String| ParseError::MalformedDefaultPair {
        pair: pair.trim().to_string(),
        reason,
    };

    let rest = pair.trim_start();
    let letter = rest
        .chars()
        .next()
        .ok_or_else(|| malformed("empty pair".to_string()))?;
    if !letter.is_ascii_alphabetic() {
        return Err(malformed(format!("expected a letter, found '{letter}'")));
    }

    let rest = rest[letter.len_utf8()..].trim_start();
    let rest = rest
        .strip_prefix('=')
        .ok_or_else(|| malformed(format!("expected '=' after '{letter}'")))?;
    let rest = rest.trim_start();

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return Err(malformed(format!("expected digits after '{letter}='")));
    }
    if !rest[digits_end..].trim().is_empty() {
        return Err(malformed(format!(
            "unexpected trailing '{}'",
            rest[digits_end..].trim()
        )));
    }

    // Values stop accumulating once they would pass 999; any further
    // digits are consumed but ignored.
    let mut value: u32 = 0;
    for digit in rest[..digits_end].bytes() {
        let next = value * 10 + (digit - b'0') as u32;
        if next > 999 {
            break;
        }
        value = next;
    }

    Ok((letter.to_ascii_lowercase(), value))
}
