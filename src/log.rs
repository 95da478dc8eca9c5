use log::LevelFilter;

/// Initialize logging for gridwords.
///
/// # Behavior
/// - `Info` level by default, `Debug` if `debug_enabled`.
/// - `RUST_LOG` overrides both when set.
/// - Safe to call more than once; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
