use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the global logger once; later calls are ignored. `RUST_LOG`
/// overrides `level`.
pub fn initialize_logger(level: LevelFilter) {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(level)
            .filter_module("chain_table", level)
            .filter_module("contact_book", level)
            .format_timestamp_millis()
            .parse_default_env();

        let _ = builder.try_init();
    });
}
