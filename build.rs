//! Build script for the radio debug log
//!
//! Handles:
//! - Debug log buffer capacity (`RADIO_DEBUG_LOG_BUFFER_LEN`, must be a power of 2)
//! - Generated constants consumed by `src/config.rs`

use std::env;
use std::fs;
use std::path::PathBuf;

/// Capacity used when `RADIO_DEBUG_LOG_BUFFER_LEN` is not set
const DEFAULT_BUFFER_LEN: u64 = 1024;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RADIO_DEBUG_LOG_BUFFER_LEN");

    let buffer_len = match env::var("RADIO_DEBUG_LOG_BUFFER_LEN") {
        Ok(raw) => parse_buffer_len(&raw),
        Err(_) => DEFAULT_BUFFER_LEN,
    };

    let out = PathBuf::from(env::var("OUT_DIR").unwrap()).join("debug_log_config.rs");
    fs::write(
        out,
        format!(
            "/// Capacity of the debug log buffer in words (power of 2)\n\
             pub const DEBUG_LOG_BUFFER_LEN: usize = {buffer_len};\n"
        ),
    )
    .unwrap();
}

fn parse_buffer_len(raw: &str) -> u64 {
    let len: u64 = raw.trim().parse().unwrap_or_else(|_| {
        panic!("RADIO_DEBUG_LOG_BUFFER_LEN must be an integer, got {raw:?}")
    });

    // The write cursor wraps with a mask and is exported as a 32-bit word
    assert!(
        len.is_power_of_two() && len <= u64::from(u32::MAX),
        "RADIO_DEBUG_LOG_BUFFER_LEN must be a power of 2 that fits in 32 bits, got {len}"
    );

    len
}
