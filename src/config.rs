//! Run configuration
//!
//! All settings for one announcement run. Loaded once from an INI
//! file, overlaid by command-line switches in `main`, then treated as
//! an immutable value for the rest of the run - the assembler and
//! transport only ever see `&Config`.

use ini::Ini;
use log::{debug, info, warn};
use std::path::Path;

/// Immutable configuration for one announcement run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// DVM bridge host
    pub host: String,
    /// DVM bridge UDP port
    pub port: u16,

    /// Silence before the announcement, seconds (rounded up to an LDU)
    pub lead_silence: f32,
    /// Silence after the announcement, seconds
    pub trail_silence: f32,
    /// Pause between assembly and transmission, seconds
    pub settle_delay: f32,
    /// Optional audio file spliced in after lead silence (e.g. a tone)
    pub clip_path: Option<String>,

    /// TTS engine selector: "espeak", "pico" or "piper"
    pub engine: String,

    // espeak parameters
    pub espeak_voice: String,
    pub espeak_pitch: u32,
    pub espeak_speed: u32,
    pub espeak_amplitude: u32,

    // pico parameters
    pub pico_language: String,

    // piper parameters
    pub piper_model: String,

    /// Spoken before the time, e.g. "West Comm, time is"
    pub prefix: String,
    /// 12-hour phrasing ("7 o'clock") vs 24-hour ("19 hundred hours")
    pub use_12_hour: bool,
    /// Append "A M"/"P M" in 12-hour mode (spaced letters speak better)
    pub include_am_pm: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 32001,
            lead_silence: 5.0,
            trail_silence: 1.0,
            settle_delay: 0.5,
            clip_path: None,
            engine: "espeak".to_string(),
            espeak_voice: "en-us+m3".to_string(),
            espeak_pitch: 40,
            espeak_speed: 140,
            espeak_amplitude: 100,
            pico_language: "en-US".to_string(),
            piper_model: String::new(),
            prefix: "West Comm, time is".to_string(),
            use_12_hour: true,
            include_am_pm: true,
        }
    }
}

impl Config {
    /// Load configuration from an INI file.
    ///
    /// A missing or malformed file degrades to built-in defaults with
    /// a warning; individual missing keys fall back per key. This
    /// never aborts the run.
    pub fn load(path: &Path) -> Self {
        let mut config = Self::default();

        if !path.exists() {
            warn!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return config;
        }

        let ini = match Ini::load_from_file(path) {
            Ok(ini) => ini,
            Err(e) => {
                warn!("Could not load config file {}: {}", path.display(), e);
                warn!("Using defaults");
                return config;
            }
        };

        config.apply(&ini);
        info!("Config loaded from {}", path.display());
        config
    }

    /// Overlay values from a parsed INI file onto `self`
    fn apply(&mut self, ini: &Ini) {
        self.host = get_string(ini, "network", "host", &self.host);
        self.port = get_u16(ini, "network", "port", self.port);

        self.lead_silence = get_f32(ini, "audio", "lead_silence", self.lead_silence);
        self.trail_silence = get_f32(ini, "audio", "trail_silence", self.trail_silence);
        self.settle_delay = get_f32(ini, "audio", "settle_delay", self.settle_delay);
        let clip = get_string(ini, "audio", "clip", "");
        if !clip.is_empty() {
            self.clip_path = Some(clip);
        }

        self.engine = get_string(ini, "tts", "engine", &self.engine);

        self.espeak_voice = get_string(ini, "espeak", "voice", &self.espeak_voice);
        self.espeak_pitch = get_u32(ini, "espeak", "pitch", self.espeak_pitch);
        self.espeak_speed = get_u32(ini, "espeak", "speed", self.espeak_speed);
        self.espeak_amplitude = get_u32(ini, "espeak", "amplitude", self.espeak_amplitude);

        self.pico_language = get_string(ini, "pico", "language", &self.pico_language);

        self.piper_model = get_string(ini, "piper", "model", &self.piper_model);

        self.prefix = get_string(ini, "announcement", "prefix", &self.prefix);
        self.use_12_hour = get_bool(ini, "announcement", "use_12_hour", self.use_12_hour);
        self.include_am_pm = get_bool(ini, "announcement", "include_am_pm", self.include_am_pm);

        debug!(
            "Config: engine={}, target={}:{}, lead={}s, trail={}s",
            self.engine, self.host, self.port, self.lead_silence, self.trail_silence
        );
    }
}

/// Get a string value from config
fn get_string(ini: &Ini, section: &str, key: &str, default: &str) -> String {
    ini.get_from(Some(section), key)
        .unwrap_or(default)
        .to_string()
}

/// Get a boolean value from config
fn get_bool(ini: &Ini, section: &str, key: &str, default: bool) -> bool {
    ini.get_from(Some(section), key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get a float value from config
fn get_f32(ini: &Ini, section: &str, key: &str, default: f32) -> f32 {
    ini.get_from(Some(section), key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get an unsigned integer value from config
fn get_u32(ini: &Ini, section: &str, key: &str, default: u32) -> u32 {
    ini.get_from(Some(section), key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get a port number from config
fn get_u16(ini: &Ini, section: &str, key: &str, default: u16) -> u16 {
    ini.get_from(Some(section), key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
