//! External speech synthesis and clip conversion

pub mod backends;
pub mod clip;
pub mod synth;

pub use synth::{create_source, SpeechSource};
