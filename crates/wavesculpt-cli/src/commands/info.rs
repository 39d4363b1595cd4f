//! WAV container metadata.

use std::path::PathBuf;

use clap::Args;
use wavesculpt_io::{WavFormat, WavInfo, read_wav_info};

/// Show a recording's container details and how it will be imported.
#[derive(Args)]
pub struct InfoArgs {
    /// WAV file to inspect
    pub file: PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Encoding:    {}", encoding(&info));
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!("Length:      {} samples ({:.4}s)", info.num_frames, info.duration_secs);
    println!("Import:      {}", import_note(&info));

    Ok(())
}

fn encoding(info: &WavInfo) -> String {
    match info.format {
        WavFormat::Pcm => format!("PCM {}-bit", info.bits_per_sample),
        WavFormat::IeeeFloat => format!("float {}-bit", info.bits_per_sample),
    }
}

fn import_note(info: &WavInfo) -> &'static str {
    match (info.channels, info.format, info.bits_per_sample) {
        (1, WavFormat::Pcm, 16) => "exact (16-bit mono)",
        (1, _, _) => "peak-normalized",
        _ => "channels averaged, then peak-normalized",
    }
}
