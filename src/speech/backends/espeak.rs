//! espeak backend
//!
//! Runs `espeak --stdout` (or `espeak-ng`) and pipes its WAV output
//! through sox to reach the bridge's 8 kHz mono s16 format. espeak's
//! native output is 22.05 kHz, so the resample step is not optional.

use super::{decode_s16le, find_program, find_sox, SOX_RAW_OUT};
use crate::config::Config;
use crate::speech::SpeechSource;
use crate::{AnnounceError, Result};
use log::{debug, warn};
use std::process::{Command, Stdio};

pub struct EspeakSource {
    espeak_path: String,
    sox_path: String,
    voice: String,
    pitch: u32,
    speed: u32,
    amplitude: u32,
}

impl EspeakSource {
    /// Create an espeak source, verifying espeak and sox are installed
    pub fn new(config: &Config) -> Result<Self> {
        let espeak_path = find_program(&["espeak", "espeak-ng"]).ok_or_else(|| {
            AnnounceError::Synthesis(
                "espeak not found. Install with: sudo apt install espeak-ng".to_string(),
            )
        })?;
        let sox_path = find_sox().ok_or_else(|| {
            AnnounceError::Synthesis("sox not found. Install with: sudo apt install sox".to_string())
        })?;
        debug!("Found espeak at {} and sox at {}", espeak_path, sox_path);

        Ok(Self {
            espeak_path,
            sox_path,
            voice: config.espeak_voice.clone(),
            pitch: config.espeak_pitch,
            speed: config.espeak_speed,
            amplitude: config.espeak_amplitude,
        })
    }

    /// Build the espeak argument list for `text`
    fn build_args(&self, text: &str) -> Vec<String> {
        vec![
            "-v".to_string(),
            self.voice.clone(),
            "-p".to_string(),
            self.pitch.to_string(),
            "-s".to_string(),
            self.speed.to_string(),
            "-a".to_string(),
            self.amplitude.to_string(),
            "--stdout".to_string(),
            text.to_string(),
        ]
    }
}

impl SpeechSource for EspeakSource {
    fn name(&self) -> &str {
        "espeak"
    }

    fn synthesize(&self, text: &str) -> Result<Vec<i16>> {
        debug!("espeak synthesis: {:?}", text);

        let mut espeak = Command::new(&self.espeak_path)
            .args(self.build_args(text))
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AnnounceError::Synthesis(format!("Failed to start espeak: {}", e)))?;

        let wav_stream = espeak.stdout.take().ok_or_else(|| {
            AnnounceError::Synthesis("espeak stdout was not captured".to_string())
        })?;

        let sox = Command::new(&self.sox_path)
            .args(["-t", "wav", "-"])
            .args(SOX_RAW_OUT)
            .stdin(Stdio::from(wav_stream))
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AnnounceError::Synthesis(format!("Failed to start sox: {}", e)))?;

        let converted = sox.wait_with_output()?;
        let espeak_status = espeak.wait()?;

        if !espeak_status.success() || !converted.status.success() {
            warn!(
                "espeak pipeline failed (espeak exit {:?}, sox exit {:?})",
                espeak_status.code(),
                converted.status.code()
            );
            return Ok(Vec::new());
        }

        let samples = decode_s16le(&converted.stdout);
        debug!("espeak produced {} samples", samples.len());
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_source() -> EspeakSource {
        EspeakSource {
            espeak_path: "espeak".to_string(),
            sox_path: "sox".to_string(),
            voice: "en-us+m3".to_string(),
            pitch: 40,
            speed: 140,
            amplitude: 100,
        }
    }

    #[test]
    fn test_build_args() {
        let args = test_source().build_args("Time is 7 o'clock");
        assert_eq!(
            args,
            vec![
                "-v",
                "en-us+m3",
                "-p",
                "40",
                "-s",
                "140",
                "-a",
                "100",
                "--stdout",
                "Time is 7 o'clock"
            ]
        );
    }

    #[test]
    fn test_create_espeak_source() {
        match EspeakSource::new(&Config::default()) {
            Ok(_) => println!("espeak backend available"),
            Err(e) => println!("espeak backend not available: {}", e),
        }
    }
}
