//! 16-bit PCM WAV encoding and decoding.

use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavWriter};
use wavesculpt_core::SampleSequence;

use crate::staging::StagingArea;
use crate::{Error, Result};

/// Full-scale value of a 16-bit sample.
pub const PCM_SCALE: f32 = 32767.0;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV container metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

fn info_from<R: Read>(reader: &WavReader<R>) -> WavInfo {
    let spec = reader.spec();
    let num_frames = u64::from(reader.len()) / u64::from(spec.channels.max(1));
    WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs: num_frames as f64 / f64::from(spec.sample_rate.max(1)),
        format: match spec.sample_format {
            SampleFormat::Float => WavFormat::IeeeFloat,
            SampleFormat::Int => WavFormat::Pcm,
        },
    }
}

/// Read WAV metadata from an in-memory container.
pub fn wav_info(bytes: &[u8]) -> Result<WavInfo> {
    let reader = WavReader::new(Cursor::new(bytes))?;
    Ok(info_from(&reader))
}

/// Read WAV metadata from a file without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    Ok(info_from(&reader))
}

/// Clamp to `[-1, 1]`, scale by [`PCM_SCALE`] and round to the nearest
/// 16-bit integer.
///
/// ```rust
/// use wavesculpt_io::quantize;
///
/// assert_eq!(quantize(1.0), 32767);
/// assert_eq!(quantize(-2.0), -32767);
/// assert_eq!(quantize(0.5), 16384);
/// ```
#[inline]
pub fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * PCM_SCALE).round() as i16
}

fn pcm16_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

fn write_samples<W: Write + Seek>(writer: W, seq: &SampleSequence) -> Result<()> {
    let mut writer = WavWriter::new(writer, pcm16_spec(seq.sample_rate()))?;
    for &sample in seq.samples() {
        writer.write_sample(quantize(sample))?;
    }
    writer.finalize()?;
    Ok(())
}

/// Encode as a mono 16-bit PCM WAV held in memory.
pub fn encode(seq: &SampleSequence) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_samples(&mut cursor, seq)?;
    Ok(cursor.into_inner())
}

/// Encode as a mono 16-bit PCM WAV file at `path`.
pub fn write_wav<P: AsRef<Path>>(path: P, seq: &SampleSequence) -> Result<()> {
    let mut writer = WavWriter::create(path, pcm16_spec(seq.sample_rate()))?;
    for &sample in seq.samples() {
        writer.write_sample(quantize(sample))?;
    }
    writer.finalize()?;
    Ok(())
}

fn read_samples<R: Read>(reader: WavReader<R>) -> Result<SampleSequence> {
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    // Integer samples stay in raw units; normalization removes the scale.
    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => reader
            .into_samples::<i32>()
            .map(|s| s.map(|v| v as f32))
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };

    if interleaved.is_empty() {
        return Err(Error::EmptyAudio);
    }

    // Mix down to mono if multi-channel
    let mono = if channels > 1 {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    } else {
        interleaved
    };

    Ok(SampleSequence::normalized(mono, spec.sample_rate)?)
}

/// Decode any PCM or float WAV container into a normalized mono sequence.
///
/// Channels are averaged, then the result is divided by its peak. Silent
/// input stays silent.
///
/// # Errors
///
/// [`Error::Wav`] for malformed containers and [`Error::EmptyAudio`] for
/// containers without samples.
pub fn decode(bytes: &[u8]) -> Result<SampleSequence> {
    read_samples(WavReader::new(Cursor::new(bytes))?)
}

/// Decode a WAV file. See [`decode`].
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<SampleSequence> {
    read_samples(WavReader::open(path)?)
}

/// Encoder that can route its output through a staging file.
///
/// Without a staging area the container is built in memory. With one, the
/// container is written to a fresh [`StagedFile`](crate::StagedFile), read
/// back, and the file released. Every exit path releases the file; only an
/// exhausted release budget on the success path surfaces as an error.
#[derive(Debug, Clone, Default)]
pub struct PcmCodec {
    staging: Option<StagingArea>,
}

impl PcmCodec {
    /// Encode in memory.
    pub fn in_memory() -> Self {
        Self { staging: None }
    }

    /// Encode through staging files in `area`.
    pub fn staged(area: StagingArea) -> Self {
        Self {
            staging: Some(area),
        }
    }

    /// Staging area, if any.
    pub fn staging(&self) -> Option<&StagingArea> {
        self.staging.as_ref()
    }

    /// Encode `seq` as 16-bit mono PCM WAV bytes.
    pub fn encode(&self, seq: &SampleSequence) -> Result<Vec<u8>> {
        match &self.staging {
            Some(area) => encode_staged(area, seq, |path, seq| write_wav(path, seq)),
            None => encode(seq),
        }
    }

    /// Decode WAV bytes. See [`decode`].
    pub fn decode(&self, bytes: &[u8]) -> Result<SampleSequence> {
        decode(bytes)
    }
}

/// Write through a staging file; the file is dropped, and so released, on
/// every early return.
fn encode_staged<W>(area: &StagingArea, seq: &SampleSequence, write: W) -> Result<Vec<u8>>
where
    W: FnOnce(&Path, &SampleSequence) -> Result<()>,
{
    let staged = area.acquire()?;
    write(staged.path(), seq)?;
    let bytes = staged.read()?;
    staged.release()?;
    Ok(bytes)
}
