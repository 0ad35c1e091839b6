//! Logging setup.
//!
//! The terminal UI owns stdout and stderr, so log output goes to the
//! configured file or is discarded. Headless runs log to stderr.
//! `RUST_LOG` takes precedence over the config:
//!
//! ```bash
//! RUST_LOG=calctty=debug calctty --eval "7 + 3 ="
//! ```

use crate::config::LoggingConfig;
use std::fs::OpenOptions;
use std::io;
use std::sync::{Mutex, Once};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Where log lines go when no file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    Discard,
}

/// Initialize the global subscriber. Only the first call takes effect.
pub fn init(config: &LoggingConfig, fallback: Fallback) -> io::Result<()> {
    let writer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => match fallback {
            Fallback::Stderr => BoxMakeWriter::new(io::stderr),
            Fallback::Discard => BoxMakeWriter::new(io::sink),
        },
    };
    let ansi = config.file.is_none() && fallback == Fallback::Stderr;

    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.directives())
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_ansi(ansi)
            .with_writer(writer)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });

    Ok(())
}
