use std::fs::File;
use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use log::LevelFilter;

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "termpong=debug"). The terminal belongs to the game while it runs, so
/// records go to `file` instead of stderr.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub file: PathBuf,
}

/// Installs the global logger. Call once, early in `main`.
pub fn init_logging(config: &LoggingConfig) -> color_eyre::Result<()> {
    let file = File::create(&config.file)
        .wrap_err_with(|| format!("cannot open log file {}", config.file.display()))?;

    let mut builder = env_logger::Builder::new();

    if let Some(filter) = &config.filter {
        builder.parse_filters(filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(LevelFilter::Info);
    }

    builder
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    log::debug!("logging initialized");
    Ok(())
}
