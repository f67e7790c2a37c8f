//! Speech source abstraction
//!
//! Provides a unified interface over the external TTS engines. The
//! assembler only ever sees a `&dyn SpeechSource`; which process gets
//! spawned, and how its output reaches 8 kHz mono s16, is a backend
//! detail.

use crate::config::Config;
use crate::{AnnounceError, Result};
use log::info;

/// A text-to-speech engine producing 8 kHz mono 16-bit samples.
///
/// Engines are external processes; `synthesize` blocks until the
/// child has exited and its whole output stream is captured. A failed
/// or empty synthesis returns `Ok` with an empty vec - only being
/// unable to attempt synthesis at all is an `Err`.
pub trait SpeechSource {
    /// Engine name for diagnostics
    fn name(&self) -> &str;

    /// Synthesize `text`, returning the full sample stream
    fn synthesize(&self, text: &str) -> Result<Vec<i16>>;
}

/// Create the speech source selected by the configuration.
///
/// Each backend probes for its binaries up front and fails here, with
/// an install hint, rather than mid-assembly.
pub fn create_source(config: &Config) -> Result<Box<dyn SpeechSource>> {
    match config.engine.as_str() {
        "espeak" => {
            info!("Using espeak TTS engine (voice {})", config.espeak_voice);
            use super::backends::espeak::EspeakSource;
            Ok(Box::new(EspeakSource::new(config)?))
        }
        "pico" => {
            info!("Using pico TTS engine (language {})", config.pico_language);
            use super::backends::pico::PicoSource;
            Ok(Box::new(PicoSource::new(config)?))
        }
        "piper" => {
            info!("Using piper TTS engine (model {})", config.piper_model);
            use super::backends::piper::PiperSource;
            Ok(Box::new(PiperSource::new(config)?))
        }
        other => Err(AnnounceError::Synthesis(format!(
            "Unknown TTS engine '{}' (expected espeak, pico or piper)",
            other
        ))),
    }
}
