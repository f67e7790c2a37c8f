//! piper backend
//!
//! piper reads text on stdin and emits raw s16 at its model's native
//! rate on stdout with `--output-raw`. The stream is piped through
//! sox to resample down to the bridge's 8 kHz.

use super::{decode_s16le, find_program, find_sox, SOX_RAW_OUT};
use crate::config::Config;
use crate::speech::SpeechSource;
use crate::{AnnounceError, Result};
use log::{debug, warn};
use std::io::Write;
use std::process::{Command, Stdio};

/// Sample rate of common piper voices; what `--output-raw` emits
const PIPER_NATIVE_RATE: u32 = 22_050;

pub struct PiperSource {
    piper_path: String,
    sox_path: String,
    model: String,
}

impl PiperSource {
    /// Create a piper source, verifying piper and sox are installed
    /// and a model path is configured
    pub fn new(config: &Config) -> Result<Self> {
        if config.piper_model.is_empty() {
            return Err(AnnounceError::Synthesis(
                "piper engine selected but no model configured ([piper] model = /path/to/voice.onnx)"
                    .to_string(),
            ));
        }

        let piper_path = find_program(&["piper", "/usr/bin/piper"]).ok_or_else(|| {
            AnnounceError::Synthesis(
                "piper not found. Install from https://github.com/rhasspy/piper".to_string(),
            )
        })?;
        let sox_path = find_sox().ok_or_else(|| {
            AnnounceError::Synthesis("sox not found. Install with: sudo apt install sox".to_string())
        })?;
        debug!("Found piper at {} and sox at {}", piper_path, sox_path);

        Ok(Self {
            piper_path,
            sox_path,
            model: config.piper_model.clone(),
        })
    }
}

impl SpeechSource for PiperSource {
    fn name(&self) -> &str {
        "piper"
    }

    fn synthesize(&self, text: &str) -> Result<Vec<i16>> {
        debug!("piper synthesis with model {}: {:?}", self.model, text);

        let mut piper = Command::new(&self.piper_path)
            .arg("--model")
            .arg(&self.model)
            .arg("--output-raw")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AnnounceError::Synthesis(format!("Failed to start piper: {}", e)))?;

        let raw_stream = piper.stdout.take().ok_or_else(|| {
            AnnounceError::Synthesis("piper stdout was not captured".to_string())
        })?;

        let rate = PIPER_NATIVE_RATE.to_string();
        let sox = Command::new(&self.sox_path)
            .args(["-t", "raw", "-r", rate.as_str(), "-e", "signed", "-b", "16", "-c", "1", "-"])
            .args(SOX_RAW_OUT)
            .stdin(Stdio::from(raw_stream))
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AnnounceError::Synthesis(format!("Failed to start sox: {}", e)))?;

        // Feed the text and close stdin so piper can finish
        if let Some(mut stdin) = piper.stdin.take() {
            stdin.write_all(text.as_bytes())?;
            stdin.write_all(b"\n")?;
        }

        let converted = sox.wait_with_output()?;
        let piper_status = piper.wait()?;

        if !piper_status.success() || !converted.status.success() {
            warn!(
                "piper pipeline failed (piper exit {:?}, sox exit {:?})",
                piper_status.code(),
                converted.status.code()
            );
            return Ok(Vec::new());
        }

        let samples = decode_s16le(&converted.stdout);
        debug!("piper produced {} samples", samples.len());
        Ok(samples)
    }
}
