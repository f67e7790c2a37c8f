//! Announcement phrasing tests
//!
//! End-to-end over config + phrase: the loaded configuration drives
//! the exact text handed to the TTS engine.

use std::fs;
use time_announce::config::Config;
use time_announce::phrase::time_phrase;

#[test]
fn test_default_config_midnight() {
    let config = Config::default();
    assert_eq!(
        time_phrase(&config, 0),
        "West Comm, time is 12 o'clock A M"
    );
}

#[test]
fn test_default_config_evening() {
    let config = Config::default();
    assert_eq!(
        time_phrase(&config, 21),
        "West Comm, time is 9 o'clock P M"
    );
}

#[test]
fn test_configured_prefix_and_24_hour_mode() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.ini");
    fs::write(
        &path,
        "[announcement]\n\
         prefix = Dispatch, the time is\n\
         use_12_hour = false\n",
    )
    .expect("write config");

    let config = Config::load(&path);

    assert_eq!(
        time_phrase(&config, 6),
        "Dispatch, the time is 06 hundred hours"
    );
    assert_eq!(
        time_phrase(&config, 23),
        "Dispatch, the time is 23 hundred hours"
    );
}

#[test]
fn test_am_pm_disabled_via_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.ini");
    fs::write(&path, "[announcement]\ninclude_am_pm = false\n").expect("write config");

    let config = Config::load(&path);

    assert_eq!(time_phrase(&config, 15), "West Comm, time is 3 o'clock");
}
