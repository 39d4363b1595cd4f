//! Wavesculpt CLI - synthesize, sculpt and chart short waveforms.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wavesculpt")]
#[command(author, version, about = "Wavesculpt waveform envelope editor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a waveform and write it as 16-bit WAV
    Generate(commands::generate::GenerateArgs),

    /// Print the zero-crossing subdivided polarity trace
    Segment(commands::segment::SegmentArgs),

    /// Apply positive/negative envelope curves to a recording
    Envelope(commands::envelope::EnvelopeArgs),

    /// Display WAV file metadata
    Info(commands::info::InfoArgs),

    /// List the named chart colors
    Palette,

    /// Create, run and inspect projects
    Project(commands::project::ProjectArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Segment(args) => commands::segment::run(args),
        Commands::Envelope(args) => commands::envelope::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Palette => commands::palette::run(),
        Commands::Project(args) => commands::project::run(args),
    }
}
