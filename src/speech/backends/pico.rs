//! pico backend
//!
//! pico2wave can only write to a file, so this backend bridges
//! through a scoped temp WAV: synthesize into it, convert it with
//! sox, and let the tempfile guard remove it on every exit path.

use super::{decode_s16le, find_program, find_sox, SOX_RAW_OUT};
use crate::config::Config;
use crate::speech::SpeechSource;
use crate::{AnnounceError, Result};
use log::{debug, warn};
use std::process::{Command, Stdio};
use tempfile::Builder;

pub struct PicoSource {
    pico_path: String,
    sox_path: String,
    language: String,
}

impl PicoSource {
    /// Create a pico source, verifying pico2wave and sox are installed
    pub fn new(config: &Config) -> Result<Self> {
        let pico_path = find_program(&["pico2wave", "/usr/bin/pico2wave"]).ok_or_else(|| {
            AnnounceError::Synthesis(
                "pico2wave not found. Install with: sudo apt install libttspico-utils".to_string(),
            )
        })?;
        let sox_path = find_sox().ok_or_else(|| {
            AnnounceError::Synthesis("sox not found. Install with: sudo apt install sox".to_string())
        })?;
        debug!("Found pico2wave at {} and sox at {}", pico_path, sox_path);

        Ok(Self {
            pico_path,
            sox_path,
            language: config.pico_language.clone(),
        })
    }
}

impl SpeechSource for PicoSource {
    fn name(&self) -> &str {
        "pico"
    }

    fn synthesize(&self, text: &str) -> Result<Vec<i16>> {
        debug!("pico synthesis: {:?}", text);

        // Unique per invocation; removed on drop even if conversion fails
        let wav = Builder::new()
            .prefix("time-announce-")
            .suffix(".wav")
            .tempfile()?;

        let pico_status = Command::new(&self.pico_path)
            .arg("-l")
            .arg(&self.language)
            .arg("-w")
            .arg(wav.path())
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| AnnounceError::Synthesis(format!("Failed to start pico2wave: {}", e)))?;

        if !pico_status.success() {
            warn!("pico2wave failed (exit {:?})", pico_status.code());
            return Ok(Vec::new());
        }

        let converted = Command::new(&self.sox_path)
            .arg(wav.path())
            .args(SOX_RAW_OUT)
            .stderr(Stdio::null())
            .output()
            .map_err(|e| AnnounceError::Synthesis(format!("Failed to start sox: {}", e)))?;

        if !converted.status.success() {
            warn!("sox conversion failed (exit {:?})", converted.status.code());
            return Ok(Vec::new());
        }

        let samples = decode_s16le(&converted.stdout);
        debug!("pico produced {} samples", samples.len());
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_pico_source() {
        match PicoSource::new(&Config::default()) {
            Ok(source) => println!("pico backend available ({})", source.language),
            Err(e) => println!("pico backend not available: {}", e),
        }
    }
}
