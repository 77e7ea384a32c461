/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub rustc: &'static str,
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("ACCOUNTING_BUILD_HASH").unwrap_or("unknown"),
        timestamp: option_env!("ACCOUNTING_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("ACCOUNTING_BUILD_TARGET").unwrap_or("unknown"),
        rustc: option_env!("ACCOUNTING_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

impl BuildMetadata {
    pub fn rows(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("Version", self.version),
            ("Build hash", self.git_hash),
            ("Built at", self.timestamp),
            ("Target", self.target),
            ("Rustc", self.rustc),
        ]
    }
}
