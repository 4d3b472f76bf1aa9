//! Diagnostic logging via `tracing-subscriber`.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! `RUST_LOG` overrides the level chosen from `--verbose`.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for this workspace's crates.
    pub level: Level,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// `warn` normally, `debug` with `--verbose`.
    pub fn from_verbose(verbose: bool) -> Self {
        let level = if verbose { Level::DEBUG } else { Level::WARN };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Enable or disable ANSI colors.
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// External crates stay at `warn`.
fn default_directives(level: Level) -> String {
    format!(
        "warn,healthatlas={level},healthatlas_cli={level}",
        level = level.as_str().to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(LogConfig::from_verbose(false).level, Level::WARN);
        assert_eq!(LogConfig::from_verbose(true).level, Level::DEBUG);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives(Level::DEBUG),
            "warn,healthatlas=debug,healthatlas_cli=debug"
        );
    }
}
