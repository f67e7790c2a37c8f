//! Sample buffer assembly
//!
//! Builds the complete outgoing buffer: lead silence rounded up to an
//! LDU boundary, the optional pre-announce clip, synthesized speech,
//! trail silence, and final LDU padding. The assembler exclusively
//! owns the buffer while it grows; the finished [`AudioBuffer`] moves
//! to the transport untouched.

use crate::audio::{AudioBuffer, LDU_SAMPLES, SAMPLE_RATE};
use crate::config::Config;
use crate::speech::clip::load_clip;
use crate::speech::SpeechSource;
use log::{debug, info, warn};

/// Lead-silence sample count for the given duration: the smallest
/// multiple of `LDU_SAMPLES` that covers it, so speech always starts
/// exactly on an LDU boundary.
pub fn lead_silence_samples(seconds: f32) -> usize {
    let raw = (SAMPLE_RATE as f32 * seconds).ceil() as usize;
    (raw + LDU_SAMPLES - 1) / LDU_SAMPLES * LDU_SAMPLES
}

/// Assemble the full announcement buffer.
///
/// Engine or clip failure degrades to zero samples for that stage;
/// the result is still padded and aligned. Callers decide what to do
/// with a buffer where [`AudioBuffer::is_silent`] holds - nothing
/// here aborts.
pub fn assemble(text: &str, config: &Config, source: &dyn SpeechSource) -> AudioBuffer {
    let lead = lead_silence_samples(config.lead_silence);
    let mut samples = vec![0i16; lead];
    let mut voiced = 0usize;

    if let Some(path) = &config.clip_path {
        let clip = load_clip(path);
        if clip.is_empty() {
            warn!("Pre-announce clip {} produced no samples, skipping", path);
        } else {
            debug!("Spliced {} clip samples from {}", clip.len(), path);
            voiced += clip.len();
            samples.extend_from_slice(&clip);
        }
    }

    match source.synthesize(text) {
        Ok(speech) => {
            if speech.is_empty() {
                warn!("{} produced no speech samples", source.name());
            }
            voiced += speech.len();
            samples.extend_from_slice(&speech);
        }
        Err(e) => {
            warn!("Speech synthesis failed: {}", e);
        }
    }

    let trail = (SAMPLE_RATE as f32 * config.trail_silence).round() as usize;
    samples.resize(samples.len() + trail, 0);

    // Pad the total to the next LDU boundary
    let remainder = samples.len() % LDU_SAMPLES;
    let padding = if remainder != 0 {
        LDU_SAMPLES - remainder
    } else {
        0
    };
    samples.resize(samples.len() + padding, 0);

    info!(
        "Assembled {} samples ({} lead silence + {} voiced + {} trail silence + {} LDU padding)",
        samples.len(),
        lead,
        voiced,
        trail,
        padding
    );

    AudioBuffer::new(samples, voiced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_silence_is_smallest_covering_ldu_multiple() {
        for &(seconds, expected) in &[
            (0.0, 0),
            (0.01, LDU_SAMPLES),          // 80 samples rounds up to one LDU
            (0.18, LDU_SAMPLES),          // 1440 samples exactly
            (5.0, 40_320),                // ceil(40000/1440)*1440
        ] {
            let lead = lead_silence_samples(seconds);
            assert_eq!(lead, expected, "lead for {}s", seconds);
            assert_eq!(lead % LDU_SAMPLES, 0);
        }
    }
}
