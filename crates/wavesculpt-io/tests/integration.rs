//! Integration tests for wavesculpt-io codec and staging.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use tempfile::NamedTempFile;
use wavesculpt_io::{
    PCM_SCALE, PcmCodec, RetryPolicy, SampleSequence, StagingArea, decode, decode_file, encode,
    read_wav_info, write_wav,
};

/// Sequence built from 16-bit levels, pinned to full scale so that
/// normalization on decode is the identity.
fn full_scale(levels: &[i16], rate: u32) -> SampleSequence {
    let mut samples: Vec<f32> = levels.iter().map(|&q| f32::from(q) / PCM_SCALE).collect();
    samples.push(1.0);
    SampleSequence::new(samples, rate).unwrap()
}

// ---------------------------------------------------------------------------
// File round trips
// ---------------------------------------------------------------------------

#[test]
fn file_roundtrip() {
    let seq = full_scale(&[0, 1000, -1000, 32000], 44000);
    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &seq).unwrap();

    let info = read_wav_info(file.path()).unwrap();
    assert_eq!(info.sample_rate, 44000);
    assert_eq!(info.num_frames, seq.len() as u64);
    assert!((info.duration_secs - seq.duration_secs()).abs() < 1e-12);

    let back = decode_file(file.path()).unwrap();
    assert_eq!(back.samples(), seq.samples());
}

#[test]
fn file_and_memory_encodings_agree() {
    let seq = full_scale(&[5, -5, 300], 8000);
    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &seq).unwrap();
    assert_eq!(std::fs::read(file.path()).unwrap(), encode(&seq).unwrap());
}

#[test]
fn decoding_unnormalized_source_peaks_at_one() {
    let seq = SampleSequence::new(vec![0.25, -0.5, 0.125], 8000).unwrap();
    let back = decode(&encode(&seq).unwrap()).unwrap();
    assert!((back.peak() - 1.0).abs() < 1e-6);
    assert!((back.samples()[0] - 0.5).abs() < 1e-3);
}

// ---------------------------------------------------------------------------
// Staging lifetime
// ---------------------------------------------------------------------------

#[test]
fn concurrent_staged_encodes_leave_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let codec = Arc::new(PcmCodec::staged(
        StagingArea::new(dir.path()).with_policy(RetryPolicy::immediate(5)),
    ));
    let expected = encode(&full_scale(&[1, 2, 3], 8000)).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                (0..10)
                    .map(|_| codec.encode(&full_scale(&[1, 2, 3], 8000)).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for bytes in handle.join().unwrap() {
            assert_eq!(bytes, expected);
        }
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn staged_encode_into_unusable_dir_is_resource_error() {
    let blocker = NamedTempFile::new().unwrap();
    let codec = PcmCodec::staged(StagingArea::new(blocker.path().join("nested")));
    let err = codec.encode(&full_scale(&[1], 8000)).unwrap_err();
    assert!(err.is_resource(), "{err}");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn quantized_roundtrip_is_exact(
        levels in prop::collection::vec(-32767i16..=32767, 0..512),
        rate in 1u32..192_000,
    ) {
        let seq = full_scale(&levels, rate);
        let back = decode(&encode(&seq).unwrap()).unwrap();
        prop_assert_eq!(back.sample_rate(), rate);
        prop_assert_eq!(back.samples(), seq.samples());
    }

    #[test]
    fn reencode_is_bit_identical(
        levels in prop::collection::vec(-32767i16..=32767, 1..256),
    ) {
        let first = encode(&full_scale(&levels, 44100)).unwrap();
        let second = encode(&decode(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}
