//! Apply envelope curves to a recording.

use std::path::PathBuf;

use clap::Args;
use wavesculpt_engine::edit;
use wavesculpt_io::{decode_file, write_wav};

use super::common::load_envelope;

/// Substitute positive and negative samples from a curve document.
#[derive(Args)]
pub struct EnvelopeArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// JSON document with `positive` and `negative` arrays
    #[arg(long, value_name = "FILE")]
    curves: PathBuf,
}

/// Run the envelope command.
pub fn run(args: EnvelopeArgs) -> anyhow::Result<()> {
    let original = decode_file(&args.input)?;
    let curves = load_envelope(&args.curves)?;
    let edited = edit(&original, Some(&curves))?;
    write_wav(&args.output, &edited.modified)?;

    let changed = original
        .samples()
        .iter()
        .zip(edited.modified.samples())
        .filter(|(a, b)| a != b)
        .count();
    println!(
        "Edited {} of {} samples -> {}",
        changed,
        original.len(),
        args.output.display()
    );
    Ok(())
}
