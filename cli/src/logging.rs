//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/turngate/turngate.log` (or platform equivalent)
//! with 10 MB size-based rotation. The console only shows warnings so it does
//! not interleave with REPL output; set `DEBUG_LOGGING=1` to send debug output
//! for turngate crates to stderr as well.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,turngate_core=debug,turngate_cli=debug";
const CONSOLE_DIRECTIVE: &str = "warn";
const FILE_DIRECTIVE: &str = "info";

/// Initialize logging with dual-output (file + stderr).
///
/// Returns a `WorkerGuard` that must be held for the application lifetime
/// so buffered log lines are flushed on shutdown.
///
/// If the log directory cannot be created, returns `None` and falls back to
/// console-only logging.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let log_dir = match dirs::config_dir() {
        Some(config) => config.join("turngate"),
        None => {
            init_console_only(debug_logging);
            return None;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Subscriber not initialized yet
        eprintln!(
            "Failed to create log directory {:?}: {}, using console only",
            log_dir, e
        );
        init_console_only(debug_logging);
        return None;
    }

    // 10 MB, keep turngate.log and turngate.log.1
    let log_path = log_dir.join("turngate.log");
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(10 * 1024 * 1024),
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {:?}: {}", log_path, e);
            init_console_only(debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_filter(file_filter(debug_logging));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer(debug_logging))
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "turngate logging initialized");

    Some(guard)
}

/// Fallback when file logging is unavailable.
fn init_console_only(debug_logging: bool) {
    tracing_subscriber::registry()
        .with(console_layer(debug_logging))
        .init();

    tracing::info!(debug_logging, "turngate logging initialized (console only)");
}

fn console_layer<S>(debug_logging: bool) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_filter(EnvFilter::new(console_directive(debug_logging)))
}

fn file_filter(debug_logging: bool) -> EnvFilter {
    EnvFilter::new(file_directive(debug_logging))
}

/// Stderr stays at warnings unless debugging, so REPL output on stdout is
/// not interleaved with action log lines.
fn console_directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        DEBUG_DIRECTIVE
    } else {
        CONSOLE_DIRECTIVE
    }
}

fn file_directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        DEBUG_DIRECTIVE
    } else {
        FILE_DIRECTIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives() {
        assert_eq!(console_directive(false), "warn");
        assert_eq!(file_directive(false), "info");
        assert_eq!(console_directive(true), DEBUG_DIRECTIVE);
        assert_eq!(file_directive(true), DEBUG_DIRECTIVE);
        for directive in [CONSOLE_DIRECTIVE, FILE_DIRECTIVE, DEBUG_DIRECTIVE] {
            assert!(directive.parse::<EnvFilter>().is_ok(), "{directive}");
        }
    }
}
