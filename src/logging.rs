use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use thiserror::Error;
use crate::config::General;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up logging to stderr and/or a log file.
/// Stdout is left untouched since it carries the weather result.
///
/// # Arguments
///
/// * 'general' - general configuration holding log path, level and stderr flag
pub fn setup_logger(general: &General) -> Result<(), LoggerError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if general.log_to_stderr {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();

        builder = builder.appender(Appender::builder().build("stderr", Box::new(stderr)));
        root = root.appender("stderr");
    }

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path)
            .map_err(|e| LoggerError(format!("log file {}: {}", log_path, e)))?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let config = builder
        .build(root.build(general.log_level))
        .map_err(|e| LoggerError(e.to_string()))?;

    log4rs::init_config(config)
        .map_err(|e| LoggerError(e.to_string()))?;

    Ok(())
}

#[derive(Debug, Error)]
#[error("LoggerError: {0}")]
pub struct LoggerError(pub String);
