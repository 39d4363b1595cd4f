//! Waveform synthesis command.

use std::path::PathBuf;

use clap::Args;
use wavesculpt_engine::wave_params;
use wavesculpt_io::write_wav;
use wavesculpt_synth::synthesize;

use super::common::WaveArgs;

/// Synthesize a waveform to a WAV file.
#[derive(Args)]
pub struct GenerateArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    wave: WaveArgs,
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let params = wave_params(&args.wave.parameters())?;
    let seq = synthesize(args.wave.kind.into(), &params)?;
    write_wav(&args.output, &seq)?;

    println!(
        "Wrote {} samples at {} Hz to {}",
        seq.len(),
        seq.sample_rate(),
        args.output.display()
    );
    Ok(())
}
