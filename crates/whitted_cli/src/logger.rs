use log::LevelFilter;

/// Initialize the logger. `RUST_LOG` is read first, then `level` overrides
/// the global filter.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
