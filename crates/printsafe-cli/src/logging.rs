//! Log setup: stderr for the user, an append-only probe file for diagnosis.

use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostic log location.
pub fn probe_log_path() -> Option<PathBuf> {
    if cfg!(windows) {
        dirs::home_dir().map(|home| home.join("printsafe_windows_probe.log"))
    } else {
        Some(PathBuf::from("/tmp/printsafe_probe.log"))
    }
}

/// Stderr level for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the stderr level. The probe file layer is added only
/// if the file opens; keep the returned guard alive until exit so buffered
/// lines are flushed.
pub fn init(verbose: u8) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    let file = probe_log_path().and_then(|path| {
        OpenOptions::new().create(true).append(true).open(path).ok()
    });
    let (probe, guard) = match file {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(LevelFilter::DEBUG);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(stderr).with(probe).init();
    guard
}
