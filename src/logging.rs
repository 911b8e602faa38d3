//! Logger initialization.
//!
//! All modules log through the `log` facade; the binaries install
//! `env_logger` once at startup. `RUST_LOG` always takes precedence. Without
//! it, the level comes from the `-v` count, falling back to the configured
//! level and finally to `warn`.

use log::LevelFilter;

/// Map a `-v` count to a level filter. `0` means "not requested".
pub fn level_from_verbosity(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Parse a level name from configuration (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}

/// Effective level for a run.
pub fn effective_level(verbosity: u8, configured: Option<LevelFilter>) -> LevelFilter {
    level_from_verbosity(verbosity)
        .or(configured)
        .unwrap_or(LevelFilter::Warn)
}

/// Install the global logger. Safe to call more than once.
pub fn init_logging(verbosity: u8, configured: Option<LevelFilter>) {
    let level = effective_level(verbosity, configured);

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .parse_default_env();

    if let Err(e) = builder.try_init() {
        // Already installed (tests, repeated runs in one process)
        log::debug!("logger already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_from_verbosity(0), None);
        assert_eq!(level_from_verbosity(1), Some(LevelFilter::Info));
        assert_eq!(level_from_verbosity(2), Some(LevelFilter::Debug));
        assert_eq!(level_from_verbosity(7), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_verbosity_overrides_config() {
        assert_eq!(
            effective_level(2, Some(LevelFilter::Error)),
            LevelFilter::Debug
        );
        assert_eq!(
            effective_level(0, Some(LevelFilter::Error)),
            LevelFilter::Error
        );
        assert_eq!(effective_level(0, None), LevelFilter::Warn);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(0, None);
        init_logging(3, None);
    }
}
