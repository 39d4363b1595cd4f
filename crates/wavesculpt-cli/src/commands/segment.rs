//! Polarity trace export.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;
use wavesculpt_core::{Polarity, TracePoint, subdivide};
use wavesculpt_engine::wave_params;
use wavesculpt_io::decode_file;
use wavesculpt_synth::synthesize;

use super::common::WaveArgs;

/// Output encodings.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum TraceFormat {
    #[default]
    Json,
    Csv,
}

/// Print the subdivided trace of a recording or a synthesized wave.
#[derive(Args)]
pub struct SegmentArgs {
    /// WAV file to segment; synthesizes from the wave options when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    #[command(flatten)]
    wave: WaveArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = TraceFormat::Json)]
    format: TraceFormat,
}

#[derive(Serialize)]
struct Row {
    x: f64,
    y: f32,
    polarity: &'static str,
    crossing: bool,
}

impl From<&TracePoint> for Row {
    fn from(p: &TracePoint) -> Self {
        Self {
            x: p.x,
            y: p.y,
            polarity: polarity_name(p.class),
            crossing: p.crossing,
        }
    }
}

fn polarity_name(class: Polarity) -> &'static str {
    match class {
        Polarity::Negative => "negative",
        Polarity::NonNegative => "non_negative",
    }
}

/// Run the segment command.
pub fn run(args: SegmentArgs) -> anyhow::Result<()> {
    let seq = match &args.input {
        Some(path) => decode_file(path)?,
        None => synthesize(args.wave.kind.into(), &wave_params(&args.wave.parameters())?)?,
    };
    let trace = subdivide(seq.samples());
    let crossings = trace.iter().filter(|p| p.crossing).count();
    tracing::info!(points = trace.len(), crossings, "trace subdivided");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        TraceFormat::Json => {
            let rows: Vec<Row> = trace.iter().map(Row::from).collect();
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
        TraceFormat::Csv => {
            writeln!(out, "x,y,polarity,crossing")?;
            for p in &trace {
                writeln!(out, "{},{},{},{}", p.x, p.y, polarity_name(p.class), p.crossing)?;
            }
        }
    }
    Ok(())
}
