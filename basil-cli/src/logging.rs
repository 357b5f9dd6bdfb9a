//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。

use crate::config::LogConfig;
use basil_config::{LogFormat, Phase};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    Layer,
};

/// Build the per-phase filter
pub fn targets(log_config: &LogConfig) -> Targets {
    Phase::ALL
        .iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            let target = phase.target();
            let level = log_config.level_for(&target);
            targets.with_target(target, level)
        })
}

/// 使用指定格式和日志配置初始化日志系统
///
/// Logs go to stderr; with `file` they are appended there as well.
pub fn init_with_file<P: AsRef<Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> Result<(), String> {
    let targets = targets(log_config);

    let file_layer = match file {
        Some(path) => {
            let path = path.as_ref();
            let handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("cannot open log file '{}': {}", path.display(), e))?;
            Some(create_format_layer(format, Mutex::new(handle), false).with_filter(targets.clone()))
        }
        None => None,
    };

    let stderr_layer = create_format_layer(format, io::stderr, true).with_filter(targets);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| e.to_string())
}

/// Create formatter layer based on format
fn create_format_layer<S, W>(
    format: LogFormat,
    make_writer: W,
    ansi: bool,
) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_ansi(ansi)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_ansi(ansi)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_targets_use_phase_overrides() {
        let cfg = LogConfig {
            global: Level::WARN,
            lexer: Some(Level::TRACE),
            ..Default::default()
        };
        let targets = targets(&cfg);
        assert!(targets.would_enable("basil::lexer", &Level::TRACE));
        assert!(!targets.would_enable("basil::api", &Level::INFO));
        assert!(targets.would_enable("basil::api", &Level::WARN));
        assert_eq!(targets.default_level(), Some(LevelFilter::WARN));
    }
}
