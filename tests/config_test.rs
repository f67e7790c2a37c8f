//! Configuration loading tests
//!
//! Verifies that announcement configuration loads from INI files,
//! degrades to defaults instead of aborting, and loads
//! deterministically.

use std::fs;
use time_announce::config::Config;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.ini");

    let config = Config::load(&path);

    assert_eq!(config, Config::default());
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 32001);
    assert_eq!(config.lead_silence, 5.0);
    assert_eq!(config.trail_silence, 1.0);
    assert_eq!(config.engine, "espeak");
}

#[test]
fn test_load_reads_all_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.ini");
    fs::write(
        &path,
        "[network]\n\
         host = 192.168.1.20\n\
         port = 34001\n\
         \n\
         [audio]\n\
         lead_silence = 2.0\n\
         trail_silence = 0.5\n\
         settle_delay = 1.0\n\
         clip = /opt/tones/attention.wav\n\
         \n\
         [tts]\n\
         engine = piper\n\
         \n\
         [piper]\n\
         model = /opt/voices/en_US-lessac-medium.onnx\n\
         \n\
         [announcement]\n\
         prefix = North Comm, time is\n\
         use_12_hour = false\n",
    )
    .expect("write config");

    let config = Config::load(&path);

    assert_eq!(config.host, "192.168.1.20");
    assert_eq!(config.port, 34001);
    assert_eq!(config.lead_silence, 2.0);
    assert_eq!(config.trail_silence, 0.5);
    assert_eq!(config.settle_delay, 1.0);
    assert_eq!(config.clip_path.as_deref(), Some("/opt/tones/attention.wav"));
    assert_eq!(config.engine, "piper");
    assert_eq!(config.piper_model, "/opt/voices/en_US-lessac-medium.onnx");
    assert_eq!(config.prefix, "North Comm, time is");
    assert!(!config.use_12_hour);
    // Missing keys keep their defaults
    assert!(config.include_am_pm);
    assert_eq!(config.espeak_voice, "en-us+m3");
}

#[test]
fn test_loading_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.ini");
    fs::write(
        &path,
        "[network]\nhost = 10.1.2.3\nport = 40000\n[tts]\nengine = pico\n",
    )
    .expect("write config");

    let first = Config::load(&path);
    let second = Config::load(&path);

    assert_eq!(first, second);
}

#[test]
fn test_malformed_file_degrades_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.ini");
    fs::write(&path, "[network\nhost 10.0.0.1 ===\n").expect("write config");

    let config = Config::load(&path);

    assert_eq!(config, Config::default());
}
