//! PCM audio model
//!
//! The DVM bridge expects 8 kHz 16-bit mono PCM, sent in 320-byte
//! chunks (160 samples = 20 ms frames) with a 4-byte big-endian
//! length header. Its P25 side consumes 9 IMBE frames per LDU, so
//! buffer content must align to 1440-sample blocks.

pub mod assembler;
pub mod frame;

/// Sample rate expected by the bridge, Hz
pub const SAMPLE_RATE: u32 = 8000;

/// Samples per paced transmission frame (20 ms)
pub const FRAME_SAMPLES: usize = 160;

/// Bytes per frame (16-bit samples)
pub const FRAME_BYTES: usize = FRAME_SAMPLES * 2;

/// IMBE frames per LDU on the P25 side
pub const FRAMES_PER_LDU: usize = 9;

/// Samples per LDU alignment block
pub const LDU_SAMPLES: usize = FRAMES_PER_LDU * FRAME_SAMPLES;

/// Frame duration in microseconds (160 samples at 8 kHz)
pub const FRAME_MICROS: u64 = 20_000;

/// A fully assembled outgoing audio buffer.
///
/// Owns the sample sequence and remembers how many samples came from
/// speech or a clip, so a silent-but-nonempty buffer (engine failure
/// wrapped in padding) is distinguishable from real content.
pub struct AudioBuffer {
    samples: Vec<i16>,
    voiced_samples: usize,
}

impl AudioBuffer {
    pub fn new(samples: Vec<i16>, voiced_samples: usize) -> Self {
        Self {
            samples,
            voiced_samples,
        }
    }

    /// All samples, silence and padding included
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Number of samples contributed by speech or the pre-announce clip
    pub fn voiced_samples(&self) -> usize {
        self.voiced_samples
    }

    /// Total sample count
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True when nothing audible made it into the buffer
    pub fn is_silent(&self) -> bool {
        self.voiced_samples == 0
    }

    /// Playback duration in seconds
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / SAMPLE_RATE as f32
    }

    /// Hand the samples to the transport
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}
