//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable.
///
/// # Example
/// ```
/// sward::core::logging::init();
/// log::info!("Patch tool started");
/// ```
pub fn init() {
    init_with_default("info");
}

/// Initialize logging with a custom default filter.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_default(filter: &str) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(filter)
    )
    .format_timestamp_millis()
    .try_init();
}
