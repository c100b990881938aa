use std::path::Path;

use anyhow::{Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Install the global logger
///
/// Colored records go to stdout; when `log_file` is set, the same records
/// are appended to it without colors. Can only succeed once per process.
pub fn setup_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::BrightRed)
        .warn(Color::BrightYellow)
        .info(Color::BrightGreen)
        .debug(Color::Cyan)
        .trace(Color::BrightBlack);

    let stdout = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stdout());

    let mut dispatch = fern::Dispatch::new().level(level).chain(stdout);

    if let Some(path) = log_file {
        let file = fern::log_file(path)
            .with_context(|| format!("Error while opening log file {}", path.display()))?;
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] [{}] [{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(file);
        dispatch = dispatch.chain(file);
    }

    dispatch
        .apply()
        .context("Error while installing the global logger")?;

    log::info!("SmartDeFi {} logger ready at level {}", crate::config::VERSION, level);
    Ok(())
}
