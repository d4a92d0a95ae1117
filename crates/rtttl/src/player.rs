//! Playback sequencing: turn a melody's note sequence into timed tone events.

use std::io;
use std::thread;
use std::time::Duration;

use crate::error::PlayError;
use crate::feedback::{Diagnostics, FeedbackLevel};
use crate::melody::{Melody, ResolvedNote};

/// The capability that turns a frequency into a buzzer state change.
///
/// Frequency 0 silences the buzzer. Implementations are free to be real
/// devices or recorders for tests.
pub trait ToneSink {
    fn emit_tone(&mut self, frequency_hz: u32) -> io::Result<()>;
}

/// What to do when a note fails to parse mid-melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Skip the note, report a warning, keep playing, so a slightly
    /// malformed melody still gets a best-effort rendition.
    #[default]
    BestEffort,
    /// Abort the melody on the first malformed note.
    Strict,
}

/// Plays melodies against a [`ToneSink`], one note at a time.
///
/// Timing per note: tone on, hold for the note duration, tone off, then a
/// quarter-duration gap before the next note. Rests go through the same
/// slot so silence takes real time. Strictly sequential; the sink is owned
/// exclusively for the duration of playback.
pub struct Player<S: ToneSink> {
    sink: S,
    policy: ErrorPolicy,
}

impl<S: ToneSink> Player<S> {
    pub fn new(sink: S) -> Self {
        Player {
            sink,
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_policy(sink: S, policy: ErrorPolicy) -> Self {
        Player { sink, policy }
    }

    /// Play the melody start to finish, streaming from the lazy note list.
    ///
    /// Returns the number of notes actually played. Sink I/O errors are
    /// fatal; malformed notes follow the configured [`ErrorPolicy`].
    pub fn play(
        &mut self,
        melody: &Melody<'_>,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<usize, PlayError> {
        let mut played = 0;

        for (i, item) in melody.notes().enumerate() {
            let index = i + 1;
            match item {
                Ok(note) => {
                    self.sound(index, &note)?;
                    played += 1;
                }
                Err(err) => match self.policy {
                    ErrorPolicy::BestEffort => {
                        diagnostics.report(
                            FeedbackLevel::Warning,
                            index,
                            &format!("skipping unplayable note: {err}"),
                        );
                    }
                    ErrorPolicy::Strict => return Err(err.into()),
                },
            }
        }

        Ok(played)
    }

    /// Emit one complete on/hold/off/gap slot.
    ///
    /// Once the tone-on write succeeds, the matching tone-off is always
    /// attempted before this returns, so a failure cannot leave the buzzer
    /// screaming.
    fn sound(&mut self, index: usize, note: &ResolvedNote) -> Result<(), PlayError> {
        let sink_err = |source| PlayError::Sink { index, source };

        self.sink.emit_tone(note.frequency_hz).map_err(sink_err)?;
        thread::sleep(Duration::from_micros(note.duration_micros));
        self.sink.emit_tone(0).map_err(sink_err)?;
        thread::sleep(Duration::from_micros(note.duration_micros / 4));
        Ok(())
    }

    /// Hand the sink back, e.g. to inspect a recording sink in tests.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
