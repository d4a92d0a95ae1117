//! Command implementations for the beeper CLI.

use std::io::{self, Read};
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use rtttl::{Diagnostics, ErrorPolicy, FeedbackLevel, Player, ToneSink};
use tracing::{info, warn};

use crate::device::Beeper;

/// Forwards per-note diagnostics to the log as playback runs.
struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, level: FeedbackLevel, index: usize, message: &str) {
        match level {
            FeedbackLevel::Warning => warn!(note = index, "{message}"),
            FeedbackLevel::Info => info!(note = index, "{message}"),
        }
    }
}

/// Prints tone events to stdout instead of touching a device.
struct PrintSink;

impl ToneSink for PrintSink {
    fn emit_tone(&mut self, frequency_hz: u32) -> io::Result<()> {
        if frequency_hz == 0 {
            println!("tone off");
        } else {
            println!("tone {frequency_hz} Hz");
        }
        Ok(())
    }
}

/// Play every melody in `text` (one per non-empty line).
pub fn play(device: &Path, text: &str, strict: bool, dry_run: bool) -> Result<()> {
    let policy = if strict {
        ErrorPolicy::Strict
    } else {
        ErrorPolicy::BestEffort
    };

    // Parse everything up front: a bad defaults block anywhere means no
    // sound at all, and no reason to open the device.
    let mut melodies = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let melody = rtttl::parse(line)
            .with_context(|| format!("invalid melody '{}'", abbreviate(line)))?;
        for warning in &melody.warnings {
            warn!("{}", warning.message);
        }
        melodies.push(melody);
    }
    if melodies.is_empty() {
        anyhow::bail!("no melody to play");
    }

    if dry_run {
        play_melodies(PrintSink, policy, &melodies)
    } else {
        play_melodies(Beeper::open(device)?, policy, &melodies)
    }
}

fn play_melodies<S: ToneSink>(
    sink: S,
    policy: ErrorPolicy,
    melodies: &[rtttl::Melody<'_>],
) -> Result<()> {
    let mut player = Player::with_policy(sink, policy);
    for melody in melodies {
        info!(name = melody.name.unwrap_or("(unnamed)"), "playing melody");
        let played = player
            .play(melody, &mut LogDiagnostics)
            .context("playback failed")?;
        info!(notes = played, "melody done");
    }
    Ok(())
}

/// One-shot tone: on, hold, off.
pub fn beep(device: &Path, frequency: u32, duration_ms: u64) -> Result<()> {
    let mut beeper = Beeper::open(device)?;
    beeper
        .emit_tone(frequency)
        .context("tone write failed")?;
    thread::sleep(Duration::from_millis(duration_ms));
    beeper.emit_tone(0).context("tone write failed")
}

/// Read melody text from a file or stdin.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read melody from stdin")?;
            Ok(text)
        }
    }
}

fn abbreviate(line: &str) -> &str {
    let end = line.char_indices().nth(40).map_or(line.len(), |(i, _)| i);
    &line[..end]
}
