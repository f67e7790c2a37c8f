//! Pre-announce clip conversion
//!
//! Converts an arbitrary audio file to the bridge's 8 kHz mono s16
//! format by shelling out to sox. The clip is a nicety, so every
//! failure mode degrades to "no clip" with a warning rather than
//! aborting the announcement.

use super::backends::{decode_s16le, find_sox, SOX_RAW_OUT};
use log::{debug, warn};
use std::process::{Command, Stdio};

/// Load and resample a clip file, returning its samples.
/// Empty on any failure.
pub fn load_clip(path: &str) -> Vec<i16> {
    let sox = match find_sox() {
        Some(sox) => sox,
        None => {
            warn!("sox not found, skipping pre-announce clip {}", path);
            return Vec::new();
        }
    };

    let converted = match Command::new(&sox)
        .arg(path)
        .args(SOX_RAW_OUT)
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            warn!("Failed to run sox on clip {}: {}", path, e);
            return Vec::new();
        }
    };

    if !converted.status.success() {
        warn!(
            "sox could not convert clip {} (exit {:?})",
            path,
            converted.status.code()
        );
        return Vec::new();
    }

    let samples = decode_s16le(&converted.stdout);
    debug!("Clip {} converted to {} samples", path, samples.len());
    samples
}
