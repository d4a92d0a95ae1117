//! Whole-melody tests against real ring-tone strings.

use pretty_assertions::assert_eq;
use rtttl::{parse, ParseError, ResolvedNote};

const KOROBEINIKI: &str = "korobeiniki:d=4,o=5,b=160:\
    e6,8b,8c6,8d6,16e6,16d6,8c6,8b,a,8a,8c6,e6,8d6,8c6,b,8b,8c6,d6,e6,c6,a,2a";

fn resolve_all(input: &str) -> Vec<ResolvedNote> {
    parse(input)
        .unwrap()
        .notes()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_korobeiniki_resolves_cleanly() {
    let melody = parse(KOROBEINIKI).unwrap();
    assert_eq!(melody.name, Some("korobeiniki"));
    assert_eq!(melody.defaults.whole_note_millis(), 1500);

    let notes = resolve_all(KOROBEINIKI);
    assert_eq!(notes.len(), 22);

    // Opening: quarter E6, then eighth B5.
    assert_eq!(notes[0].frequency_hz, 1319);
    assert_eq!(notes[0].duration_micros, 375_000);
    assert_eq!(notes[1].frequency_hz, 988);
    assert_eq!(notes[1].duration_micros, 187_500);

    // Closing half note A5.
    assert_eq!(notes[21].frequency_hz, 880);
    assert_eq!(notes[21].duration_micros, 750_000);

    assert!(notes.iter().all(|n| !n.is_rest()));
}

#[test]
fn test_haunted_house_exercises_sharps_dots_and_rests() {
    // From the classic Nokia ring-tone collection.
    let input = "HauntHouse:d=4,o=5,b=108:2a4,2e,2d#,2b4,2a4,2c,2d,2a#4,2e.,e,1f4,1a4,1d#,\
        2e.,d,2c.,b4,1a4,1p,2a4,2e,2d#,2b4,2a4,2c,2d,2a#4,2e.,e,1f4,1a4,1d#,2e.,d,2c.,b4,1a4";
    let melody = parse(input).unwrap();
    assert_eq!(melody.defaults.whole_note_millis(), 2222);

    let notes: Vec<_> = melody.notes().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(notes.len(), 37);

    // 2d# at the default octave 5.
    assert_eq!(notes[2].frequency_hz, 622);
    assert_eq!(notes[2].duration_micros, 1_111_000);
    // 2e. is dotted: half plus a quarter of the whole note.
    assert_eq!(notes[8].duration_micros, 1_111_000 + 555_500);
    // 1p holds a whole-note slot of silence.
    assert!(notes[18].is_rest());
    assert_eq!(notes[18].duration_micros, 2_222_000);
}

#[test]
fn test_malformed_note_amid_valid_ones() {
    let melody = parse("x:o=5,d=4,b=125:4d.6,X9,c6").unwrap();
    let items: Vec<_> = melody.notes().collect();
    assert_eq!(items.len(), 3);

    assert_eq!(
        items[0],
        Ok(ResolvedNote {
            frequency_hz: 1175,
            duration_micros: 720_000,
        })
    );
    assert!(matches!(
        items[1],
        Err(ParseError::MalformedNote { index: 2, .. })
    ));
    assert_eq!(
        items[2],
        Ok(ResolvedNote {
            frequency_hz: 1047,
            duration_micros: 480_000,
        })
    );
}

#[test]
fn test_all_valid_defaults_combinations_parse() {
    for octave in 4..=7 {
        for duration in [1u8, 2, 4, 8, 16, 32] {
            for tempo in [40u16, 63, 125, 200] {
                let input = format!("t:o={octave},d={duration},b={tempo}:c,p,8g6");
                let melody = parse(&input)
                    .unwrap_or_else(|e| panic!("{input} failed: {e}"));
                assert_eq!(melody.defaults.whole_note_millis(), 240_000 / tempo as u32);
                assert_eq!(melody.notes().filter(|n| n.is_ok()).count(), 3);
            }
        }
    }
}
