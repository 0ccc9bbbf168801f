//! Logger initialization

/// Map `-v` counts to a default filter; `RUST_LOG` still wins
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize `env_logger` unless output is quiet
pub fn init(verbose: u8, quiet: bool) -> Result<(), log::SetLoggerError> {
    if quiet {
        return Ok(());
    }

    let env = env_logger::Env::default().default_filter_or(level_for(verbose));
    env_logger::Builder::from_env(env).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(u8::MAX), "trace");
    }

    #[test]
    fn test_second_init_reports_error() {
        // Another test may already have installed the logger.
        let _ = init(0, false);
        assert!(init(2, false).is_err());
    }

    #[test]
    fn test_quiet_skips_init() {
        assert!(init(0, true).is_ok());
    }
}
