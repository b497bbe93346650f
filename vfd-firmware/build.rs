//! Build script for vfd-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and turns it into constants

use std::collections::HashMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Bus lines, in the order the firmware builds them
const BUS_LINES: [&str; 5] = ["clock", "data_out", "data_in", "chip_select", "shift_load"];

const DISPLAY_WIDTH: usize = 16;
const GPIO_COUNT: u8 = 30;

fn main() {
    setup_linker();
    let board = validate_config();
    write_constants(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated board.toml contents
struct Board {
    pins: Vec<(&'static str, String)>,
    inter_byte_delay_us: u32,
    banner: String,
    dimmer: u8,
}

/// Validate board.toml at compile time
fn validate_config() -> Board {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware needs the panel wiring in board.toml, next to      ║\n\
            ║  Cargo.toml in the vfd-firmware directory.                       ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();
    let pins = validate_bus(&config, &mut errors);
    let inter_byte_delay_us = validate_delay(&config, &mut errors);
    let (banner, dimmer) = validate_panel(&config, &mut errors);

    if !errors.is_empty() {
        report_errors(&errors);
    }

    println!("cargo:warning=board.toml validated successfully");

    Board {
        pins,
        inter_byte_delay_us,
        banner,
        dimmer,
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn report_errors(errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: board.toml validation failed                             ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        format_error_lines(&errors.join("\n"))
    );
}

/// Pin number of an RP2040 pin string, modifiers stripped
fn pin_number(s: &str) -> Option<u8> {
    let s = s.trim().trim_start_matches(['!', '^']);
    let pin: u8 = s.strip_prefix("gpio")?.parse().ok()?;
    (pin < GPIO_COUNT).then_some(pin)
}

fn validate_bus(config: &toml::Value, errors: &mut Vec<String>) -> Vec<(&'static str, String)> {
    let Some(bus) = config.get("bus") else {
        errors.push("Missing [bus] section".to_string());
        return Vec::new();
    };

    let mut pins = Vec::new();
    let mut used: HashMap<u8, &str> = HashMap::new();

    for line in BUS_LINES {
        let Some(value) = bus.get(line).and_then(|v| v.as_str()) else {
            errors.push(format!("[bus] {line}: missing pin string"));
            continue;
        };
        let Some(pin) = pin_number(value) else {
            errors.push(format!("[bus] {line}: '{value}' is not gpio0..gpio29"));
            continue;
        };
        if let Some(other) = used.insert(pin, line) {
            errors.push(format!("[bus] {line}: gpio{pin} already used by {other}"));
        }
        pins.push((line, value.trim().to_string()));
    }

    pins
}

fn validate_delay(config: &toml::Value, errors: &mut Vec<String>) -> u32 {
    let Some(value) = config.get("bus").and_then(|b| b.get("inter_byte_delay_us")) else {
        return 0;
    };
    match value.as_integer() {
        Some(us) if (0..=1000).contains(&us) => us as u32,
        _ => {
            errors.push("[bus] inter_byte_delay_us: must be 0 to 1000".to_string());
            0
        }
    }
}

fn validate_panel(config: &toml::Value, errors: &mut Vec<String>) -> (String, u8) {
    let panel = config.get("panel");

    let banner = match panel.and_then(|p| p.get("banner")) {
        None => String::new(),
        Some(value) => match value.as_str() {
            Some(s) if s.is_ascii() && s.len() <= DISPLAY_WIDTH => s.to_string(),
            _ => {
                errors.push("[panel] banner: at most 16 ASCII characters".to_string());
                String::new()
            }
        },
    };

    let dimmer = match panel.and_then(|p| p.get("dimmer")) {
        None => 8,
        Some(value) => match value.as_integer() {
            Some(level) if (1..=8).contains(&level) => level as u8,
            _ => {
                errors.push("[panel] dimmer: must be 1 to 8".to_string());
                8
            }
        },
    };

    (banner, dimmer)
}

/// Write the validated values to OUT_DIR/board_config.rs
fn write_constants(board: &Board) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("board_config.rs")).unwrap();

    writeln!(f, "// Generated from board.toml by build.rs").unwrap();
    for (line, value) in &board.pins {
        writeln!(
            f,
            "pub const {}_PIN: &str = {:?};",
            line.to_uppercase(),
            value
        )
        .unwrap();
    }
    writeln!(
        f,
        "pub const INTER_BYTE_DELAY_US: u32 = {};",
        board.inter_byte_delay_us
    )
    .unwrap();
    writeln!(f, "pub const BANNER: &str = {:?};", board.banner).unwrap();
    writeln!(f, "pub const DIMMER: u8 = {};", board.dimmer).unwrap();
}
