pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "accounting_core=info";

/// Installs the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` replaces the default `accounting_core=info` filter when set and valid.
/// Called once through [`crate::init`].
pub fn init_tracing() {
    let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn env_filter(raw: Option<String>) -> EnvFilter {
    raw.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn user_directives_can_raise_crate_verbosity() {
        let filter = env_filter(Some("accounting_core=debug".into()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = env_filter(Some("debug".into()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn missing_or_invalid_directives_fall_back_to_info() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            env_filter(Some("   ".into())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
        assert_eq!(
            env_filter(Some("accounting_core=loud".into())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
