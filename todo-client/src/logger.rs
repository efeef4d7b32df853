//! Logging Infrastructure
//!
//! Structured logging for the `todos` binary. `RUST_LOG` wins over the
//! level passed in.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a level is given
pub const DEFAULT_FILTER: &str = "todos=info,todo_client=info,shared=warn";

/// Prefix of the daily log files
pub const LOG_FILE_PREFIX: &str = "todos";

fn env_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::new(DEFAULT_FILTER),
    })
}

/// Daily rolling appender in `log_dir`, or `None` when the directory does
/// not exist
pub fn file_appender(log_dir: &Path) -> Option<RollingFileAppender> {
    if !log_dir.is_dir() {
        return None;
    }
    Some(tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX))
}

/// Initialize the logger with optional file output
///
/// When `log_dir` exists, logs go to a daily rolling file `todos.<date>`
/// there instead of stderr.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        match file_appender(dir) {
            Some(appender) => {
                let _ = subscriber.with_ansi(false).with_writer(appender).try_init();
                return;
            }
            None => eprintln!(
                "log directory {} does not exist, logging to stderr",
                dir.display()
            ),
        }
    }

    let _ = subscriber.with_writer(std::io::stderr).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_dir_has_no_appender() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(file_appender(&tmp.path().join("missing")).is_none());
    }

    #[test]
    fn test_existing_dir_gets_daily_file() {
        let tmp = tempfile::tempdir().unwrap();

        let mut appender = file_appender(tmp.path()).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().any(|n| n.starts_with(LOG_FILE_PREFIX)));
    }
}
