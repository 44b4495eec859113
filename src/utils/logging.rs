// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::config::LogConfig;
use crate::core::ConfigError;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// Starts the logger described by `config`.
///
/// With `to_file` set, output goes to size-rotated files under `config.dir`;
/// otherwise it goes to stderr.
///
/// # Examples
/// ```no_run
/// use sqlsegment::config::Config;
/// use sqlsegment::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config.log).expect("logger should start");
/// ```
pub fn init(config: &LogConfig) -> Result<(), ConfigError> {
    let logger = Logger::try_with_str(&config.level)?;
    let handle = if config.to_file {
        logger
            .log_to_file(
                FileSpec::default()
                    .basename(&config.file)
                    .directory(&config.dir),
            )
            .rotate(
                Criterion::Size(config.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.max_files),
            )
            .write_mode(WriteMode::Async)
            .append()
            .start()?
    } else {
        logger.log_to_stderr().start()?
    };

    // 保存句柄供后续 flush 使用
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    if config.to_file {
        log::info!("Logger started: {}/{}", config.dir, config.file);
    } else {
        log::info!("Logger started on stderr at level {}", config.level);
    }
    Ok(())
}

/// Flushes and drops the logger.
///
/// Blocks until the async writer has drained.
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
            // handle 在这里被 drop，会等待异步线程完成
        }
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
