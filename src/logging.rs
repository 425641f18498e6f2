use std::env;
use std::fs::{self, OpenOptions};
use std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Threshold for the in-memory activity log.
pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// A logger builder honouring every `RUST_LOG` directive, `off` and
/// per-module targets included.
fn env_builder() -> env_logger::Builder {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp_secs();
    builder
}

/// Log to stderr. Used by the headless commands.
pub fn init_stderr_logger() {
    let _ = env_builder().try_init();
}

/// Log to a file, keeping the terminal free for the dashboard.
///
/// The file is opened in append mode and its parent directory created if
/// needed.
pub fn init_file_logger(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = env_builder()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(parse_rust_log_level("wheel_admin=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("wheel_admin=debug,reqwest=info"),
            LogLevel::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }

    use log::Log;

    fn filter(directives: &str) -> env_logger::Logger {
        env_logger::Builder::new().parse_filters(directives).build()
    }

    fn enabled(logger: &env_logger::Logger, target: &str, level: log::Level) -> bool {
        logger.enabled(&log::Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_off_disables_logging() {
        let off = filter("off");
        assert_eq!(off.filter(), log::LevelFilter::Off);
        assert!(!enabled(&off, "wheel_admin", log::Level::Error));
    }

    #[test]
    fn test_module_directives_keep_their_targets() {
        let mixed = filter("reqwest=trace,wheel_admin=warn");
        assert!(enabled(&mixed, "reqwest::connect", log::Level::Trace));
        assert!(enabled(&mixed, "wheel_admin::dashboard", log::Level::Warn));
        assert!(!enabled(&mixed, "wheel_admin::dashboard", log::Level::Info));
        assert!(!enabled(&mixed, "hyper_util", log::Level::Trace));
    }

    #[test]
    fn test_default_filter_is_info() {
        let default = filter(DEFAULT_LOG_FILTER);
        assert!(enabled(&default, "wheel_admin", log::Level::Info));
        assert!(!enabled(&default, "wheel_admin", log::Level::Debug));
    }

    #[test]
    fn test_file_logger_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("wheel-admin.log");
        init_file_logger(&path).unwrap();
        assert!(path.exists());
    }
}
