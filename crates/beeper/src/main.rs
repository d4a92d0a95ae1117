//! beeper - play tones and RTTTL melodies on a Linux beeper
//!
//! Subcommands:
//! - `beeper play [MELODY]` - play RTTTL melodies from an argument, file, or stdin
//! - `beeper beep` - emit a single tone
//!
//! The beeper is driven through the input event layer: each tone is one
//! EV_SND/SND_TONE write to `/dev/input/eventN`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod device;

#[derive(Parser)]
#[command(name = "beeper")]
#[command(about = "Play tones and RTTTL melodies on a Linux beeper")]
#[command(version)]
struct Cli {
    /// Input event number (/dev/input/eventN)
    #[arg(short, long, global = true, default_value = "0")]
    event: u32,

    /// Full event device path (overrides --event)
    #[arg(long, global = true)]
    device: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play RTTTL melodies
    Play {
        /// Melody string, e.g. "name:d=4,o=5,b=125:c,e,g"
        melody: Option<String>,

        /// Read melodies from a file instead (one per line); with neither
        /// this nor MELODY, reads stdin
        #[arg(short, long, conflicts_with = "melody")]
        file: Option<PathBuf>,

        /// Print tone events to stdout instead of writing to the device
        #[arg(long)]
        dry_run: bool,

        /// Abort on the first malformed note instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Emit a single tone
    Beep {
        /// Frequency in Hz
        #[arg(short, long, default_value = "800")]
        frequency: u32,

        /// Duration in milliseconds
        #[arg(short, long, default_value = "200")]
        duration: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let device = cli
        .device
        .unwrap_or_else(|| device::event_device(cli.event));

    match cli.command {
        Commands::Play {
            melody,
            file,
            dry_run,
            strict,
        } => {
            let text = match melody {
                Some(text) => text,
                None => commands::read_input(file.as_deref())?,
            };
            commands::play(&device, &text, strict, dry_run)?;
        }
        Commands::Beep {
            frequency,
            duration,
        } => {
            commands::beep(&device, frequency, duration)?;
        }
    }

    Ok(())
}
