use log::{debug, LevelFilter};

/// Sends log records to stderr; stdout is reserved for the record itself.
pub fn setup_logging(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("redis", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;
    debug!("Logging initialized at {}.", level);
    Ok(())
}
