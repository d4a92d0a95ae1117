//! Tone frequency table for the four RTTTL octaves.

/// Frequencies in Hz, rows are octaves 4-7, columns are chromatic steps
/// from C (C, C#, D, D#, E, F, F#, G, G#, A, A#, B).
const FREQUENCIES: [[u16; 12]; 4] = [
    [262, 277, 294, 311, 330, 349, 370, 392, 415, 440, 466, 494],
    [523, 554, 587, 622, 659, 698, 740, 784, 831, 880, 932, 988],
    [1047, 1109, 1175, 1245, 1319, 1397, 1480, 1568, 1661, 1760, 1865, 1976],
    [2093, 2217, 2349, 2489, 2637, 2794, 2960, 3136, 3322, 3520, 3729, 3951],
];

/// First octave covered by the table.
pub const MIN_OCTAVE: u8 = 4;
/// Last octave covered by the table.
pub const MAX_OCTAVE: u8 = 7;

/// Look up the frequency for an in-range octave and chromatic step.
///
/// Callers validate the octave against [`MIN_OCTAVE`]..=[`MAX_OCTAVE`]
/// before lookup; the step comes from `Pitch::chromatic_step` and is
/// always 0-11.
pub(crate) fn frequency(octave: u8, step: usize) -> u32 {
    FREQUENCIES[(octave - MIN_OCTAVE) as usize][step] as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concert_pitch_anchor() {
        // A4 = 440 Hz anchors the whole table.
        assert_eq!(frequency(4, 9), 440);
        assert_eq!(frequency(5, 9), 880);
    }

    #[test]
    fn test_known_pitches() {
        assert_eq!(frequency(5, 0), 523); // C5
        assert_eq!(frequency(6, 2), 1175); // D6
        assert_eq!(frequency(7, 11), 3951); // B7
        assert_eq!(frequency(4, 0), 262); // C4
    }

    #[test]
    fn test_octaves_roughly_double() {
        for octave in MIN_OCTAVE..MAX_OCTAVE {
            for step in 0..12 {
                let low = frequency(octave, step);
                let high = frequency(octave + 1, step);
                // Rounded-to-Hz table entries, so allow 1% slack.
                let diff = (high as i64 - 2 * low as i64).unsigned_abs();
                assert!(diff * 100 <= high as u64, "{octave}/{step}: {low} -> {high}");
            }
        }
    }
}
