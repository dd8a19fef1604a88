use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `log` records are forwarded to it.
///
/// stdout is reserved for the bridge protocol, so nothing may log there.
/// Returns `false` when a global subscriber was already installed; that one
/// stays in place and receives the warning.
pub fn init_logging() -> bool {
    // RUST_LOG=wintrack_lib=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init();

    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Keeping the existing log subscriber: {e}");
            false
        }
    }
}

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string panic payload>");

        let location = info
            .location()
            .map_or_else(|| "<unknown>".to_string(), |l| format!("{}:{}", l.file(), l.line()));

        log::error!("panic at {location}: {payload}");
    }));
}
