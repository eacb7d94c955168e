use log::LevelFilter;

/// Maps the repeated `-v` count onto a default filter: warn, info, debug, then trace.
#[must_use]
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global logger; `RUST_LOG` takes precedence over `verbosity`.
///
/// Modules in `quiet_modules` are capped at warn.
pub fn init_logging(verbosity: u8, quiet_modules: &[&str]) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level(verbosity)),
    );

    for module in quiet_modules {
        builder.filter_module(module, LevelFilter::Warn);
    }

    builder.format_timestamp_millis().init();
}
