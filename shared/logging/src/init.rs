use std::error::Error;
use std::fmt::{Display, Formatter};

use slog::{Drain, Level};
use slog_scope::GlobalLoggerGuard;

/// Overrides the default log level, e.g. `BOARD_LOG=debug`
pub const LOG_LEVEL_VAR: &str = "BOARD_LOG";

pub struct LoggerBuilder {
    level: Level,
}

/// Keeps the global logger installed until dropped
pub struct Logger(Level, GlobalLoggerGuard);

#[derive(Debug)]
pub enum LogError {
    BadLevel(String),
}

impl LoggerBuilder {
    pub fn with_env() -> Result<Self, LogError> {
        let mut builder = Self::default();

        if let Ok(env) = std::env::var(LOG_LEVEL_VAR) {
            builder = builder.level(parse_level(&env)?);
        }

        Ok(builder)
    }

    pub fn level(mut self, s: Level) -> Self {
        self.level = s;
        self
    }

    pub fn init(self) -> Logger {
        let decorator = slog_term::TermDecorator::new().stderr().build();
        let drain = slog_term::CompactFormat::new(decorator)
            .use_custom_timestamp(slog_term::timestamp_local)
            .build()
            .fuse();
        let drain = drain.filter_level(self.level).fuse();
        let drain = slog_async::Async::new(drain)
            .thread_name("logging".to_owned())
            .chan_size(1024)
            .build_no_guard()
            .fuse();
        let logger = slog::Logger::root(drain, slog::o!());

        let global = slog_scope::set_global_logger(logger);
        Logger(self.level, global)
    }
}

fn parse_level(s: &str) -> Result<Level, LogError> {
    s.parse().map_err(|_| LogError::BadLevel(s.to_owned()))
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self { level: Level::Info }
    }
}

impl Logger {
    pub fn level(&self) -> Level {
        self.0
    }
}

impl Display for LogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::BadLevel(s) => write!(f, "Invalid level {:?}", s),
        }
    }
}

impl Error for LogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing() {
        assert_eq!(parse_level("debug").unwrap(), Level::Debug);
        assert_eq!(parse_level("warn").unwrap(), Level::Warning);
        assert!(matches!(parse_level("loud"), Err(LogError::BadLevel(s)) if s == "loud"));
    }

    #[test]
    fn default_level() {
        assert_eq!(LoggerBuilder::default().level, Level::Info);
        assert_eq!(LoggerBuilder::default().level(Level::Trace).level, Level::Trace);
    }
}
