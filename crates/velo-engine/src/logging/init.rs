use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; subsequent calls are ignored.
///
/// Filter precedence: `RUST_LOG` when set, otherwise `default_filter`
/// (env_logger syntax, e.g. "info" or "velo_engine=debug").
/// Intended usage is early in `main`.
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(default_filter);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
