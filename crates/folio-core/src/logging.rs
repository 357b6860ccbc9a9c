//! Tracing setup.
//!
//! The interactive UI owns the terminal, so it logs to
//! `$FOLIO_HOME/logs/folio.log`; plain CLI commands log to stderr.
//!
//! Filter resolution: `FOLIO_LOG` > `log_level` from config > `info`.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FOLIO_LOG";
const LOG_FILE: &str = "folio.log";
const DEFAULT_DIRECTIVE: &str = "info";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Directory receiving `folio.log`.
    File(PathBuf),
}

/// Keeps the background writer alive; dropping it flushes pending lines.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a subscriber is
/// already installed.
pub fn init(target: &LogTarget, config_level: Option<&str>) -> Result<LogGuard> {
    let filter = EnvFilter::try_new(directive(
        std::env::var(LOG_ENV).ok(),
        config_level,
    ))
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .compact()
                .try_init()
                .map_err(|err| anyhow!(err))?;
            Ok(LogGuard { _worker: None })
        }
        LogTarget::File(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!(err))?;
            Ok(LogGuard {
                _worker: Some(guard),
            })
        }
    }
}

fn directive(env: Option<String>, config_level: Option<&str>) -> String {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| {
            config_level
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_prefers_env_then_config() {
        assert_eq!(
            directive(Some("folio_core=trace".into()), Some("warn")),
            "folio_core=trace"
        );
        assert_eq!(directive(None, Some("warn")), "warn");
        assert_eq!(directive(Some("  ".into()), Some(" debug ")), "debug");
        assert_eq!(directive(None, None), "info");
        assert_eq!(directive(None, Some("")), "info");
    }
}
