//! Log setup for the harness binary

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::{HarnessError, Result};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Install a stderr subscriber. A non-empty `RUST_LOG` takes over the
/// filter entirely; otherwise `level` applies.
pub fn setup_logs(level: LogLevel) -> Result<()> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_env_filter(level, env_directives.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| HarnessError::Logging(e.to_string()))
}

fn build_env_filter(level: LogLevel, env_directives: Option<&str>) -> Result<EnvFilter> {
    match env_directives.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| HarnessError::Logging(e.to_string()))
        }
        None => Ok(EnvFilter::default().add_directive(LevelFilter::from(level).into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(LevelFilter::from(LogLevel::default()), LevelFilter::OFF);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::DEBUG);
        assert_eq!(LogLevel::from_str("trace", true), Ok(LogLevel::Trace));
    }

    #[test]
    fn test_env_directives_override_cli_level() {
        let filter = build_env_filter(LogLevel::Off, Some("info")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_cli_level_without_env_directives() {
        let filter = build_env_filter(LogLevel::Debug, None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_env_filter(LogLevel::Warn, Some("  ")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
