//! Configuration for the bridge subprocess.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for spawning the automation bridge process.
pub struct BridgeConfig {
    /// Path to the bridge executable. If `None`, searches next to the
    /// current executable and in the working directory.
    pub bridge_exe_path: Option<PathBuf>,

    /// Timeout for the bridge's `Init` handshake (attaching to the host
    /// application can involve starting it).
    pub startup_timeout: Duration,

    /// Extra arguments to pass to the bridge process.
    pub extra_args: Vec<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bridge_exe_path: None,
            startup_timeout: Duration::from_secs(30),
            extra_args: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert!(config.bridge_exe_path.is_none());
        assert_eq!(config.startup_timeout, Duration::from_secs(30));
        assert!(config.extra_args.is_empty());
    }
}
