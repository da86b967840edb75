//! Integration tests for sweeps-io WAVE round trips.
//!
//! Covers the file and memory byte-stream backends, every supported depth,
//! the 24-bit packed-grid precision bound, and acceptance of both integer
//! and float 32-bit containers.

use std::io::Cursor;
use sweeps_core::{BitDepth, SampleBuffer, Signal};
use sweeps_io::{WavFormat, read_wav, read_wav_from, read_wav_info, write_wav, write_wav_to};
use tempfile::NamedTempFile;

/// One second of a 100 Hz sawtooth ramp at 48 kHz, in [-1, 1).
fn ramp_100hz_48k() -> Vec<f32> {
    (0..48000)
        .map(|n| {
            let phase = (n as f64 * 100.0 / 48000.0).fract();
            (2.0 * phase - 1.0) as f32
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 24-bit save/load round trip
// ---------------------------------------------------------------------------

#[test]
fn ramp_survives_a_24_bit_round_trip_within_one_step() {
    let ramp = ramp_100hz_48k();
    let signal =
        Signal::new(SampleBuffer::F32(ramp.clone()), 48000, 1, BitDepth::Bits24).unwrap();

    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &signal).unwrap();

    let loaded = read_wav(file.path()).unwrap();
    assert_eq!(loaded.depth(), BitDepth::Bits24);
    assert_eq!(loaded.frames(), 48000);

    let SampleBuffer::F32(recovered) = loaded.samples() else {
        panic!("expected float samples");
    };
    let bound = 2f64.powi(-23);
    for (n, (&original, &back)) in ramp.iter().zip(recovered.iter()).enumerate() {
        let err = (f64::from(original) - f64::from(back)).abs();
        assert!(err <= bound, "sample {n}: {original} -> {back} (err {err})");
    }
}

// ---------------------------------------------------------------------------
// 32-bit containers: integer and float tags
// ---------------------------------------------------------------------------

#[test]
fn int32_pcm_is_scaled_into_the_float_domain() {
    // Hand-write a tag-1 32-bit file and check the 2⁻³¹ scaling rule.
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 48000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Int,
    };
    let mut block = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut block, spec).unwrap();
        for value in [0i32, 1 << 30, -(1 << 30), i32::MAX, i32::MIN] {
            writer.write_sample(value).unwrap();
        }
        writer.finalize().unwrap();
    }

    let loaded = read_wav_from(Cursor::new(block.into_inner())).unwrap();
    assert_eq!(loaded.depth(), BitDepth::Bits32);
    let SampleBuffer::F32(samples) = loaded.samples() else {
        panic!("expected float samples");
    };
    assert_eq!(samples[0], 0.0);
    assert_eq!(samples[1], 0.5);
    assert_eq!(samples[2], -0.5);
    assert!((samples[3] - 1.0).abs() < 1e-6);
    assert_eq!(samples[4], -1.0);
}

#[test]
fn float32_wav_loads_verbatim() {
    let data: Vec<f32> = (0..256).map(|i| (i as f32 - 128.0) / 128.0).collect();
    let signal =
        Signal::new(SampleBuffer::F32(data.clone()), 44100, 1, BitDepth::Bits32).unwrap();

    let mut block = Cursor::new(Vec::new());
    write_wav_to(&mut block, &signal).unwrap();

    let info_bytes = block.into_inner();
    let loaded = read_wav_from(info_bytes.as_slice()).unwrap();
    assert_eq!(loaded.samples(), &SampleBuffer::F32(data));
}

// ---------------------------------------------------------------------------
// Integer depths through the memory backend
// ---------------------------------------------------------------------------

#[test]
fn stereo_i16_survives_the_memory_backend() {
    let data: Vec<i16> = (0..4000).map(|i| ((i * 131) % 50000 - 25000) as i16).collect();
    let signal =
        Signal::new(SampleBuffer::I16(data.clone()), 48000, 2, BitDepth::Bits16).unwrap();

    let mut block = Cursor::new(Vec::new());
    write_wav_to(&mut block, &signal).unwrap();

    let loaded = read_wav_from(Cursor::new(block.into_inner())).unwrap();
    assert_eq!(loaded.channels(), 2);
    assert_eq!(loaded.frames(), 2000);
    assert_eq!(loaded.samples(), &SampleBuffer::I16(data));
}

#[test]
fn eight_bit_file_round_trips_bit_for_bit() {
    let data: Vec<u8> = (0..512).map(|i| (i * 73 % 256) as u8).collect();
    let signal =
        Signal::new(SampleBuffer::U8(data.clone()), 11025, 1, BitDepth::Bits8).unwrap();

    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &signal).unwrap();

    let loaded = read_wav(file.path()).unwrap();
    assert_eq!(loaded.samples(), &SampleBuffer::U8(data));
}

// ---------------------------------------------------------------------------
// Metadata and rejection
// ---------------------------------------------------------------------------

#[test]
fn info_reports_float_format() {
    let signal = Signal::new(
        SampleBuffer::F32(vec![0.0; 4800]),
        48000,
        2,
        BitDepth::Bits32,
    )
    .unwrap();
    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &signal).unwrap();

    let info = read_wav_info(file.path()).unwrap();
    assert_eq!(info.format, WavFormat::IeeeFloat);
    assert_eq!(info.bits_per_sample, 32);
    assert_eq!(info.num_frames, 2400);
}

#[test]
fn truncated_stream_is_rejected() {
    // A RIFF header with nothing behind it.
    let bytes = b"RIFF\x04\x00\x00\x00WAVE".to_vec();
    assert!(read_wav_from(bytes.as_slice()).is_err());
}

#[test]
fn non_riff_stream_is_rejected() {
    assert!(read_wav_from(&b"not a wave file at all"[..]).is_err());
}
