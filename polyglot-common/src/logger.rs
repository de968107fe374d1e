use polyglot_error::{PGError, PGResult};
use polyglot_models::constants::{LOG_DIR, LOG_FILE_NAME};
use std::{
    str::FromStr,
    sync::{Arc, Mutex},
};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{filter::DynFilterFn, fmt, layer::SubscriberExt, Layer, Registry};

/// Console logger with an optional daily rolling file, whose level can be
/// changed while running.
pub struct Logger {
    level: Arc<Mutex<Level>>,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Option<Level>) -> Self {
        Logger {
            level: Arc::new(Mutex::new(level.unwrap_or(Level::INFO))),
            _file_guard: None,
        }
    }

    /// Parse a configured level name, falling back to `INFO`.
    pub fn parse_level(name: &str) -> Level {
        Level::from_str(name.trim()).unwrap_or(Level::INFO)
    }

    #[inline]
    pub fn set_level(&self, new_level: Level) {
        let mut level = self.level.lock().unwrap_or_else(|e| e.into_inner());
        *level = new_level;
    }

    #[inline]
    pub fn get_level(&self) -> Level {
        *self.level.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Install the global subscriber.
    ///
    /// Logs go to stdout and, when `to_file` is set, to `logs/polyglot.log`
    /// rotated daily. Fails when a global subscriber is already installed.
    pub fn initialize(&mut self, to_file: bool) -> PGResult<()> {
        let console_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| {
                metadata.level() <= &*level.lock().unwrap_or_else(|e| e.into_inner())
            })
        };
        let file_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| {
                metadata.level() <= &*level.lock().unwrap_or_else(|e| e.into_inner())
            })
        };

        let console_layer = {
            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer().with_writer(std::io::stdout);

            layer.with_filter(console_filter)
        };

        let file_layer = if to_file {
            let (non_blocking, guard) =
                tracing_appender::non_blocking(rolling::daily(LOG_DIR, LOG_FILE_NAME));
            self._file_guard = Some(guard);
            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(file_filter),
            )
        } else {
            None
        };

        let subscriber = Registry::default().with(console_layer).with(file_layer);
        set_global_default(subscriber).map_err(|_| PGError::from("Failed to set logger"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing_and_runtime_change() {
        assert_eq!(Logger::parse_level("debug"), Level::DEBUG);
        assert_eq!(Logger::parse_level(" WARN "), Level::WARN);
        assert_eq!(Logger::parse_level("chatty"), Level::INFO);

        let logger = Logger::new(None);
        assert_eq!(logger.get_level(), Level::INFO);
        logger.set_level(Level::TRACE);
        assert_eq!(logger.get_level(), Level::TRACE);
    }
}
