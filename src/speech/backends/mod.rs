//! Engine backends
//!
//! Each backend shells out to one external TTS tool and normalizes
//! its output to 8 kHz mono s16 through sox. Shared process plumbing
//! lives here.

pub mod espeak;
pub mod pico;
pub mod piper;

use std::process::{Command, Stdio};

/// sox arguments that convert "whatever stdin holds" declared by the
/// preceding args into raw 8 kHz mono s16 on stdout
pub(crate) const SOX_RAW_OUT: [&str; 9] = ["-r", "8000", "-b", "16", "-c", "1", "-t", "raw", "-"];

/// Find the first runnable program among `candidates`.
///
/// A candidate counts as present when spawning `prog --version`
/// succeeds at all; some of these tools exit non-zero on --version
/// but a spawn error means the binary is missing.
pub(crate) fn find_program(candidates: &[&str]) -> Option<String> {
    for path in candidates {
        if Command::new(path)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
        {
            return Some(path.to_string());
        }
    }
    None
}

/// Locate sox, the format converter every backend depends on
pub(crate) fn find_sox() -> Option<String> {
    find_program(&["sox", "/usr/bin/sox"])
}

/// Decode a raw little-endian s16 byte stream into samples.
/// A trailing odd byte is dropped.
pub(crate) fn decode_s16le(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
