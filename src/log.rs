// src/log.rs
//
// tracing setup. Events go to `.store/debug.log` with an uptime stamp
// (HH:MM:SS.mmm since start), and optionally to stderr as well. Level comes
// from RUST_LOG, default `info`. A log that cannot be opened is skipped;
// logging never stops the app.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Uptime timer for the fmt layers.
#[derive(Clone, Copy, Debug, Default)]
struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "[{}]", fmt_elapsed(start().elapsed().as_millis()))
    }
}

fn open_log_file() -> Option<File> {
    fs::create_dir_all(STORE_DIR).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(STORE_DIR).join(LOG_FILE))
        .ok()
}

/// Install the global subscriber. Safe to call more than once; only the
/// first call takes effect.
pub fn init(to_stderr: bool) {
    start();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = open_log_file().map(|f| {
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(f))
            .with_ansi(false)
            .with_timer(Uptime)
    });
    let stderr_layer = to_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(Uptime)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
}
