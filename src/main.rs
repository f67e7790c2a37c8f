//! time-announce entry point
//!
//! Builds the announcement phrase, synthesizes it through an external
//! TTS engine, and streams the assembled PCM to a DVM bridge as
//! real-time paced frames. One run, one announcement.

use chrono::{Local, Timelike};
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;
use time_announce::audio::assembler;
use time_announce::config::Config;
use time_announce::phrase::time_phrase;
use time_announce::speech::create_source;
use time_announce::transport;
use time_announce::{AnnounceError, Result};

/// Parsed command line
struct CliArgs {
    config_path: PathBuf,
    host: Option<String>,
    port: Option<u16>,
    text: Option<String>,
    test_mode: bool,
    debug_mode: bool,
}

fn print_usage(prog: &str) {
    println!("Usage: {} [options]", prog);
    println!();
    println!("Options:");
    println!("  -c <file>   Config file (default: config.ini)");
    println!("  -h <host>   DVM bridge host (overrides config)");
    println!("  -p <port>   DVM bridge port (overrides config)");
    println!("  -t <text>   Custom announcement text");
    println!("  --test      Assemble audio but skip transmission, print duration");
    println!("  -d, --debug Verbose logging");
    println!("  --help      Show this help");
    println!();
    println!("espeak voices: run 'espeak --voices' to see all");
    println!("pico languages: en-US, en-GB, de-DE, es-ES, fr-FR, it-IT");
    println!("piper models: configure [piper] model = /path/to/voice.onnx");
}

fn parse_args() -> CliArgs {
    let argv: Vec<String> = std::env::args().collect();
    let prog = argv.first().map(String::as_str).unwrap_or("time-announce");

    let mut args = CliArgs {
        config_path: PathBuf::from("config.ini"),
        host: None,
        port: None,
        text: None,
        test_mode: false,
        debug_mode: false,
    };

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "-c" if i + 1 < argv.len() => {
                i += 1;
                args.config_path = PathBuf::from(&argv[i]);
            }
            "-h" if i + 1 < argv.len() => {
                i += 1;
                args.host = Some(argv[i].clone());
            }
            "-p" if i + 1 < argv.len() => {
                i += 1;
                match argv[i].parse() {
                    Ok(port) => args.port = Some(port),
                    Err(_) => {
                        eprintln!("Invalid port: {}", argv[i]);
                        process::exit(1);
                    }
                }
            }
            "-t" if i + 1 < argv.len() => {
                i += 1;
                args.text = Some(argv[i].clone());
            }
            "--test" => args.test_mode = true,
            "-d" | "--debug" => args.debug_mode = true,
            "--help" => {
                print_usage(prog);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage(prog);
                process::exit(1);
            }
        }
        i += 1;
    }

    args
}

fn main() {
    let args = parse_args();

    let level = if args.debug_mode {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    info!("{} version {} starting", time_announce::APP_NAME, time_announce::VERSION);

    if let Err(e) = run(&args) {
        error!("Fatal error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let mut config = Config::load(&args.config_path);

    // CLI overrides; config is immutable from here on
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    let config = config;

    let text = match &args.text {
        Some(text) => text.clone(),
        None => time_phrase(&config, Local::now().hour()),
    };
    info!("Announcement: {}", text);

    let source = create_source(&config)?;
    let buffer = assembler::assemble(&text, &config, source.as_ref());

    // A buffer of pure silence means synthesis (and any clip) failed;
    // keying up the bridge for it would broadcast dead air.
    if buffer.is_silent() {
        return Err(AnnounceError::NoAudio);
    }

    if args.test_mode {
        info!("Test mode - not sending to {}:{}", config.host, config.port);
        println!("Audio duration: {} seconds", buffer.duration_secs());
        return Ok(());
    }

    if config.settle_delay > 0.0 {
        debug!("Settling for {}s before transmission", config.settle_delay);
        thread::sleep(Duration::from_secs_f32(config.settle_delay));
    }

    let report = transport::transmit(buffer, &config.host, config.port)?;
    if report.complete() {
        info!("Announcement sent ({} frames)", report.frames_sent);
    } else {
        warn!(
            "Partial transmission: {} of {} frames sent",
            report.frames_sent, report.frames_total
        );
    }

    Ok(())
}
