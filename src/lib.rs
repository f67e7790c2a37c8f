//! time-announce - spoken time announcements for a DVM bridge
//!
//! Builds an 8 kHz mono PCM announcement (lead silence, optional
//! pre-announce clip, synthesized speech, trail silence) aligned to
//! LDU boundaries, then streams it to a downstream audio bridge as
//! real-time paced, length-prefixed UDP datagrams.

pub mod audio;
pub mod config;
pub mod error;
pub mod phrase;
pub mod speech;
pub mod transport;

pub use error::{AnnounceError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "time-announce";
